//! Catalog records: products, categories, materials, and sellers.
//!
//! These are plain data. The seeded values and the lookup/filter logic live
//! in the storefront crate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{ProductId, SellerId};
use super::price::Price;

/// A jewelry product listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Category ID (e.g. `rings`).
    pub category: String,
    /// Subcategory ID within the category (e.g. `engagement`).
    pub subcategory: String,
    pub price: Decimal,
    /// Pre-discount price shown struck through.
    pub original_price: Decimal,
    pub images: Vec<String>,
    /// Free-text material descriptions (e.g. `14k White Gold`).
    pub materials: Vec<String>,
    pub description: String,
    pub rating: Decimal,
    pub review_count: u32,
    pub seller: SellerSummary,
    pub sustainability: Sustainability,
    pub customizable: bool,
    pub in_stock: bool,
    pub weight: String,
    pub dimensions: String,
}

impl Product {
    /// The product's price as a formatted USD amount.
    #[must_use]
    pub const fn list_price(&self) -> Price {
        Price::usd(self.price)
    }

    /// Whether the product is currently discounted from its original price.
    #[must_use]
    pub fn is_on_sale(&self) -> bool {
        self.original_price > self.price
    }

    /// Capture the fields carried into cart lines and wishlist entries.
    #[must_use]
    pub fn snapshot(&self) -> ProductSnapshot {
        ProductSnapshot {
            id: self.id,
            name: self.name.clone(),
            price: self.price,
            materials: self.materials.clone(),
            in_stock: self.in_stock,
        }
    }
}

/// A frozen copy of the product fields shown next to cart and wishlist rows.
///
/// Taken when the row is created; later catalog changes do not affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
}

const fn default_in_stock() -> bool {
    true
}

/// Seller fields embedded in each product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerSummary {
    pub id: SellerId,
    pub name: String,
    pub rating: Decimal,
    pub verified: bool,
}

/// Sourcing attributes of a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sustainability {
    pub recycled_metal: bool,
    pub ethical_stones: bool,
    pub certification: Option<String>,
    pub carbon_neutral: bool,
}

impl Sustainability {
    /// Whether this product satisfies a sustainability filter flag.
    #[must_use]
    pub const fn satisfies(&self, flag: SustainabilityFlag) -> bool {
        match flag {
            SustainabilityFlag::RecycledMetal => self.recycled_metal,
            SustainabilityFlag::EthicalStones => self.ethical_stones,
            SustainabilityFlag::CarbonNeutral => self.carbon_neutral,
        }
    }
}

/// Sustainability filter options offered on the category page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SustainabilityFlag {
    RecycledMetal,
    EthicalStones,
    CarbonNeutral,
}

impl SustainabilityFlag {
    /// Wire name used in filters and command-line arguments.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::RecycledMetal => "recycled-metal",
            Self::EthicalStones => "ethical-stones",
            Self::CarbonNeutral => "carbon-neutral",
        }
    }
}

impl std::fmt::Display for SustainabilityFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SustainabilityFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recycled-metal" => Ok(Self::RecycledMetal),
            "ethical-stones" => Ok(Self::EthicalStones),
            "carbon-neutral" => Ok(Self::CarbonNeutral),
            _ => Err(format!("invalid sustainability flag: {s}")),
        }
    }
}

/// A top-level product category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub image: String,
    pub subcategories: Vec<Subcategory>,
}

/// A subcategory within a [`Category`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    pub name: String,
}

/// A raw material with its unit cost, used by the custom piece pricer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    /// Material ID (e.g. `gold-14k`, `diamond`).
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: MaterialKind,
}

/// Whether a material is priced by weight or by carat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MaterialKind {
    #[serde(rename_all = "camelCase")]
    Metal {
        price_per_gram: Decimal,
        colors: Vec<String>,
        sustainable: bool,
    },
    #[serde(rename_all = "camelCase")]
    Gemstone { price_per_carat: Decimal, ethical: bool },
}

impl Material {
    /// Cost per gram, if this material is a metal.
    #[must_use]
    pub const fn price_per_gram(&self) -> Option<Decimal> {
        match &self.kind {
            MaterialKind::Metal { price_per_gram, .. } => Some(*price_per_gram),
            MaterialKind::Gemstone { .. } => None,
        }
    }

    /// Cost per carat, if this material is a gemstone.
    #[must_use]
    pub const fn price_per_carat(&self) -> Option<Decimal> {
        match &self.kind {
            MaterialKind::Gemstone {
                price_per_carat, ..
            } => Some(*price_per_carat),
            MaterialKind::Metal { .. } => None,
        }
    }
}

/// A marketplace seller profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
    pub rating: Decimal,
    pub review_count: u32,
    pub verified: bool,
    pub location: String,
    pub specialties: Vec<String>,
    pub established_year: u16,
    pub certifications: Vec<String>,
}
