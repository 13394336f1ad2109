//! Pricing engine.
//!
//! Quotes for custom pieces, shipping, tax, and the totals shown on the cart
//! and billing views. All arithmetic is exact decimal; rounding happens only
//! where a value is displayed or explicitly rounded ([`price_range`]).

use jewelcraft_core::Price;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::catalog::Catalog;
use crate::config::PricingConfig;
use crate::error::{Result, StoreError};
use crate::store::{Cart, CartLine, MAX_LINE_QUANTITY, check_unit_price};

const BASE_LABOR: Decimal = Decimal::from_parts(200, 0, 0, false, 0);
const ENGRAVING_FEE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);
const CUSTOM_DESIGN_FEE: Decimal = Decimal::from_parts(300, 0, 0, false, 0);

/// Share of labor attributed to the setting (0.6); the rest is crafting.
const SETTING_SHARE: Decimal = Decimal::from_parts(6, 0, 0, false, 1);

/// Relative spread of [`price_range`] (0.15).
const PRICE_VARIANCE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Setting style of a custom piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Setting {
    #[default]
    Basic,
    Prong,
    Bezel,
    Pave,
    Channel,
    Vintage,
}

impl Setting {
    #[must_use]
    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::Basic => Decimal::ONE,
            Self::Prong => Decimal::new(12, 1),
            Self::Bezel => Decimal::new(13, 1),
            Self::Pave => Decimal::new(18, 1),
            Self::Channel => Decimal::new(15, 1),
            Self::Vintage => Decimal::new(2, 0),
        }
    }
}

/// Size class of a custom piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SizeClass {
    Xs,
    Small,
    #[default]
    Standard,
    Large,
    Xl,
}

impl SizeClass {
    #[must_use]
    pub fn multiplier(&self) -> Decimal {
        match self {
            Self::Xs => Decimal::new(8, 1),
            Self::Small => Decimal::new(9, 1),
            Self::Standard => Decimal::ONE,
            Self::Large => Decimal::new(11, 1),
            Self::Xl => Decimal::new(12, 1),
        }
    }
}

/// A gemstone in a custom design.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GemstoneSpec {
    /// Material ID (e.g. `diamond`).
    pub material: String,
    pub carats: Decimal,
}

/// Specification of a custom piece to quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomDesign {
    /// Metal material ID (e.g. `gold-14k`).
    pub metal: Option<String>,
    /// Metal weight in grams.
    pub metal_weight: Decimal,
    pub gemstones: Vec<GemstoneSpec>,
    pub setting: Setting,
    pub size: SizeClass,
    pub engraving: bool,
    pub custom_design: bool,
}

/// Cost components of a quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteBreakdown {
    pub metal_cost: Decimal,
    pub gemstone_cost: Decimal,
    pub setting_cost: Decimal,
    pub crafting_cost: Decimal,
    pub additional_services: Decimal,
}

/// Price of a custom piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub materials: Decimal,
    pub labor: Decimal,
    pub total: Decimal,
    pub breakdown: QuoteBreakdown,
}

/// A rounded low/high estimate around a base price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceEstimate {
    pub min: Decimal,
    pub max: Decimal,
    pub formatted: String,
}

/// Delivery choices that affect shipping and tax.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShippingOptions {
    pub expedited: bool,
    pub international: bool,
    /// Two-letter US state code.
    pub state: Option<String>,
}

/// Price and quantity of one order line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineAmount {
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl LineAmount {
    /// Unit price times quantity.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidUnitPrice`] or
    /// [`StoreError::QuantityOverflow`] for amounts a cart line could not
    /// hold. `label` names the line in the error.
    pub fn total(&self, label: impl std::fmt::Display) -> Result<Decimal> {
        check_unit_price(self.unit_price)?;
        if self.quantity > MAX_LINE_QUANTITY {
            return Err(StoreError::QuantityOverflow(label.to_string()));
        }
        Ok(self.unit_price * Decimal::from(self.quantity))
    }
}

impl From<&CartLine> for LineAmount {
    fn from(line: &CartLine) -> Self {
        Self {
            unit_price: line.unit_price,
            quantity: line.quantity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBreakdown {
    /// Number of distinct lines.
    pub items: usize,
    pub total_quantity: u64,
    /// `None` for an empty order.
    pub average_item_price: Option<Decimal>,
    pub free_shipping_eligible: bool,
}

/// Totals shown on the billing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotal {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub tax_rate: Decimal,
    pub total: Decimal,
    pub breakdown: OrderBreakdown,
}

/// Promotional codes accepted at the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromoCode {
    Welcome10,
}

impl PromoCode {
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Welcome10 => "WELCOME10",
        }
    }

    /// Fraction of the subtotal taken off.
    #[must_use]
    pub fn discount_rate(&self) -> Decimal {
        match self {
            Self::Welcome10 => Decimal::new(1, 1),
        }
    }
}

impl std::str::FromStr for PromoCode {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case(Self::Welcome10.code()) {
            Ok(Self::Welcome10)
        } else {
            Err(StoreError::InvalidPromoCode(s.to_string()))
        }
    }
}

/// Totals shown on the cart view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub tax: Decimal,
    pub discount: Decimal,
    pub promo: Option<PromoCode>,
    pub total: Decimal,
    /// How much more to spend for free shipping, while shipping is charged.
    pub amount_to_free_shipping: Option<Decimal>,
}

/// Prices custom pieces and orders against a catalog.
#[derive(Debug, Clone, Copy)]
pub struct PricingEngine<'a> {
    catalog: &'a Catalog,
    config: PricingConfig,
}

impl<'a> PricingEngine<'a> {
    #[must_use]
    pub const fn new(catalog: &'a Catalog, config: PricingConfig) -> Self {
        Self { catalog, config }
    }

    /// Quote a custom piece.
    ///
    /// Unknown material IDs, gemstones given as metals (and vice versa), and
    /// zero weights contribute nothing to the material cost.
    #[instrument(skip(self, design), fields(setting = ?design.setting, size = ?design.size))]
    #[must_use]
    pub fn quote(&self, design: &CustomDesign) -> Quote {
        let metal_cost = design
            .metal
            .as_deref()
            .and_then(|id| self.catalog.material(id))
            .and_then(jewelcraft_core::Material::price_per_gram)
            .map_or(Decimal::ZERO, |per_gram| per_gram * design.metal_weight);

        let gemstone_cost: Decimal = design
            .gemstones
            .iter()
            .filter_map(|gem| {
                self.catalog
                    .material(&gem.material)
                    .and_then(jewelcraft_core::Material::price_per_carat)
                    .map(|per_carat| per_carat * gem.carats)
            })
            .sum();

        let complexity = design.setting.multiplier() * design.size.multiplier();
        let mut additional_services = Decimal::ZERO;
        if design.engraving {
            additional_services += ENGRAVING_FEE;
        }
        if design.custom_design {
            additional_services += CUSTOM_DESIGN_FEE;
        }
        let labor = BASE_LABOR * complexity + additional_services;
        let materials = metal_cost + gemstone_cost;

        Quote {
            materials,
            labor,
            total: materials + labor,
            breakdown: QuoteBreakdown {
                metal_cost,
                gemstone_cost,
                setting_cost: labor * SETTING_SHARE,
                crafting_cost: labor * (Decimal::ONE - SETTING_SHARE),
                additional_services,
            },
        }
    }

    /// Shipping charge for an order subtotal.
    #[must_use]
    pub fn shipping_cost(&self, subtotal: Decimal, options: &ShippingOptions) -> Decimal {
        let base = if subtotal >= self.config.free_shipping_threshold {
            Decimal::ZERO
        } else if options.international {
            Decimal::new(50, 0)
        } else {
            Decimal::new(25, 0)
        };
        let expedited = match (options.expedited, options.international) {
            (false, _) => Decimal::ZERO,
            (true, true) => Decimal::new(75, 0),
            (true, false) => Decimal::new(35, 0),
        };
        base + expedited
    }

    /// Sales tax rate for a US state code, or the configured default.
    #[must_use]
    pub fn tax_rate(&self, state: Option<&str>) -> Decimal {
        let code = state.map(|s| s.trim().to_ascii_uppercase());
        match code.as_deref() {
            Some("CA") => Decimal::new(975, 4),
            Some("NY") => Decimal::new(8, 2),
            Some("TX") => Decimal::new(625, 4),
            Some("FL") => Decimal::new(6, 2),
            Some("WA") => Decimal::new(65, 3),
            _ => self.config.default_tax_rate,
        }
    }

    /// Totals for the billing view.
    ///
    /// # Errors
    ///
    /// Returns the error of [`LineAmount::total`] for the first line outside
    /// the cart's price and quantity bounds. Lines are labelled `#1`, `#2`...
    #[instrument(skip(self, lines), fields(lines = lines.len()))]
    pub fn order_total(
        &self,
        lines: &[LineAmount],
        options: &ShippingOptions,
    ) -> Result<OrderTotal> {
        let subtotal = lines
            .iter()
            .enumerate()
            .map(|(index, line)| line.total(format_args!("#{}", index + 1)))
            .sum::<Result<Decimal>>()?;
        let total_quantity: u64 = lines.iter().map(|line| u64::from(line.quantity)).sum();

        let shipping = self.shipping_cost(subtotal, options);
        let tax_rate = self.tax_rate(options.state.as_deref());
        let tax = subtotal * tax_rate;

        Ok(OrderTotal {
            subtotal,
            shipping,
            tax,
            tax_rate,
            total: subtotal + shipping + tax,
            breakdown: OrderBreakdown {
                items: lines.len(),
                total_quantity,
                average_item_price: (total_quantity > 0)
                    .then(|| subtotal / Decimal::from(total_quantity)),
                free_shipping_eligible: subtotal >= self.config.free_shipping_threshold,
            },
        })
    }

    /// Totals for the cart view.
    ///
    /// Unlike [`Self::order_total`], shipping is free only strictly above the
    /// threshold, and the default tax rate always applies.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPromoCode`] for an unrecognised code.
    pub fn cart_summary(&self, cart: &Cart, promo: Option<&str>) -> Result<CartSummary> {
        let promo = promo
            .filter(|code| !code.trim().is_empty())
            .map(str::parse::<PromoCode>)
            .transpose()?;

        let subtotal = cart.subtotal();
        let threshold = self.config.free_shipping_threshold;
        let shipping = if subtotal > threshold {
            Decimal::ZERO
        } else {
            Decimal::new(25, 0)
        };
        let tax = subtotal * self.config.default_tax_rate;
        let discount = promo.map_or(Decimal::ZERO, |code| subtotal * code.discount_rate());

        Ok(CartSummary {
            subtotal,
            shipping,
            tax,
            discount,
            promo,
            total: subtotal + shipping + tax - discount,
            amount_to_free_shipping: (!shipping.is_zero()).then(|| threshold - subtotal),
        })
    }
}

/// Low/high estimate at ±15 %, rounded to whole units.
///
/// The formatted text uses the unrounded bounds.
#[must_use]
pub fn price_range(base: Decimal) -> PriceEstimate {
    let low = base * (Decimal::ONE - PRICE_VARIANCE);
    let high = base * (Decimal::ONE + PRICE_VARIANCE);
    PriceEstimate {
        min: low.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        max: high.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        formatted: format!("{} - {}", format_price(low), format_price(high)),
    }
}

/// US dollar formatting, e.g. `$2,500.00`.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    Price::usd(amount).display()
}
