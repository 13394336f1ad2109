//! Smart Jewel Craft CLI - catalog queries, pricing, and session replay.
//!
//! # Usage
//!
//! ```bash
//! # List in-stock rings, cheapest first
//! jc-cli catalog list --category rings --in-stock --sort price-low
//!
//! # Quote a custom piece described in YAML
//! jc-cli quote design.yaml
//!
//! # Billing totals for two lines shipped to California
//! jc-cli order-total --item 2500:1 --item 450:2 --state CA
//!
//! # Style recommendations from questionnaire answers
//! jc-cli style questionnaire --style modern --metal white
//!
//! # Gemstone articles from the sustainability guide
//! jc-cli sustainability articles --category gemstones
//!
//! # Replay a scripted session through the store
//! jc-cli session demo.yaml
//! ```
//!
//! Every command prints JSON to stdout.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use jewelcraft_core::{SellerId, SustainabilityFlag};
use jewelcraft_storefront::catalog::SortOrder;
use jewelcraft_storefront::config::StorefrontConfig;
use jewelcraft_storefront::reviews::AnalysisTier;
use jewelcraft_storefront::style::{
    MetalColor, Occasion, PersonalStyle, SizePreference, SkinTone, StyleAesthetic,
};
use jewelcraft_storefront::sustainability::ArticleCategory;
use rust_decimal::Decimal;
use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::pricing::LineArg;

#[derive(Parser)]
#[command(name = "jc-cli")]
#[command(author, version, about = "Smart Jewel Craft storefront tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Quote a custom piece from a YAML design file
    Quote {
        /// Path to the design file
        design: PathBuf,
    },
    /// Compute billing totals
    OrderTotal(OrderTotalArgs),
    /// Run the style assistant
    Style {
        #[command(subcommand)]
        method: StyleMethod,
    },
    /// Expert review tiers and panel
    Review {
        #[command(subcommand)]
        action: ReviewAction,
    },
    /// Sustainability guide: certifications, sourcing, and articles
    Sustainability {
        #[command(subcommand)]
        topic: SustainabilityTopic,
    },
    /// Replay a YAML script of store steps and print the final state
    Session {
        /// Path to the script
        script: PathBuf,

        /// Log rejected steps and continue instead of stopping
        #[arg(long)]
        keep_going: bool,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List products through the category filters
    List(ListArgs),
    /// Search names, materials, and sellers
    Search {
        query: String,
    },
    /// Highest-rated in-stock products
    Featured,
    /// Products with recycled metal or ethical stones
    Sustainable,
    /// Products from one seller
    Seller {
        id: SellerId,
    },
    /// Categories with their subcategories
    Categories,
    /// Raw materials and unit prices
    Materials,
    /// Quick-pick price ranges with product counts
    PriceRanges,
}

#[derive(Args)]
struct ListArgs {
    /// Category ID (e.g. rings)
    #[arg(long)]
    category: Option<String>,

    /// Subcategory ID within the category
    #[arg(long)]
    subcategory: Option<String>,

    /// Minimum price
    #[arg(long)]
    min: Option<Decimal>,

    /// Maximum price
    #[arg(long)]
    max: Option<Decimal>,

    /// Material keyword; repeat for several (any may match)
    #[arg(long = "material")]
    materials: Vec<String>,

    /// Sustainability flag; repeat for several (all must hold)
    #[arg(long = "sustainability")]
    sustainability: Vec<SustainabilityFlag>,

    /// Only products in stock
    #[arg(long)]
    in_stock: bool,

    /// featured, price-low, price-high, rating, or newest
    #[arg(long, default_value = "featured")]
    sort: SortOrder,
}

#[derive(Args)]
struct OrderTotalArgs {
    /// Line as PRICE:QUANTITY; repeat for several
    #[arg(long = "item", required = true)]
    items: Vec<LineArg>,

    /// Two-letter US state code for tax
    #[arg(long)]
    state: Option<String>,

    #[arg(long)]
    expedited: bool,

    #[arg(long)]
    international: bool,
}

#[derive(Subcommand)]
enum StyleMethod {
    /// Answer the five-question questionnaire
    Questionnaire {
        #[arg(long)]
        style: Option<StyleAesthetic>,

        /// Repeat for several
        #[arg(long = "occasion")]
        occasions: Vec<Occasion>,

        #[arg(long)]
        metal: Option<MetalColor>,

        /// Repeat for several
        #[arg(long = "personal-style")]
        personal_style: Vec<PersonalStyle>,

        #[arg(long)]
        size: Option<SizePreference>,
    },
    /// Use an undertone detected from a photo
    Photo {
        #[arg(long)]
        tone: SkinTone,
    },
    /// Print the questionnaire
    Questions,
}

#[derive(Subcommand)]
enum ReviewAction {
    /// Analysis tiers with price and turnaround
    Tiers {
        /// Show a single tier
        #[arg(long)]
        tier: Option<AnalysisTier>,
    },
    /// The expert panel
    Experts,
}

#[derive(Subcommand)]
enum SustainabilityTopic {
    /// Stats, certifications, sourcing, articles, and sustainable products
    Overview,
    /// Industry certifications
    Certifications {
        /// Show a single certification (e.g. rjc)
        #[arg(long)]
        id: Option<String>,
    },
    /// Metal sourcing and gemstone ethics
    Sourcing,
    /// Educational articles
    Articles {
        /// sustainability, materials, or gemstones
        #[arg(long)]
        category: Option<ArticleCategory>,
    },
}

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt::init();
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    // Sentry before the subscriber so the layer has a client
    let _sentry_guard = init_sentry(&config);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "jewelcraft_storefront=info,jewelcraft_cli=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli, config).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: StorefrontConfig) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::List(args) => {
                commands::catalog::list(&commands::catalog::ListQuery {
                    category: args.category,
                    subcategory: args.subcategory,
                    min: args.min,
                    max: args.max,
                    materials: args.materials,
                    sustainability: args.sustainability,
                    in_stock: args.in_stock,
                    sort: args.sort,
                })?;
            }
            CatalogAction::Search { query } => commands::catalog::search(&query)?,
            CatalogAction::Featured => commands::catalog::featured()?,
            CatalogAction::Sustainable => commands::catalog::sustainable()?,
            CatalogAction::Seller { id } => commands::catalog::by_seller(id)?,
            CatalogAction::Categories => commands::catalog::categories()?,
            CatalogAction::Materials => commands::catalog::materials()?,
            CatalogAction::PriceRanges => commands::catalog::price_ranges()?,
        },
        Commands::Quote { design } => commands::pricing::quote(&design, &config).await?,
        Commands::OrderTotal(args) => commands::pricing::order_total(
            &args.items,
            args.state,
            args.expedited,
            args.international,
            &config,
        )?,
        Commands::Style { method } => match method {
            StyleMethod::Questionnaire {
                style,
                occasions,
                metal,
                personal_style,
                size,
            } => commands::style::questionnaire(
                jewelcraft_storefront::style::QuestionnaireAnswers {
                    style,
                    occasions,
                    metal,
                    personal_style,
                    size,
                },
            )?,
            StyleMethod::Photo { tone } => commands::style::photo(tone)?,
            StyleMethod::Questions => commands::style::questions()?,
        },
        Commands::Review { action } => match action {
            ReviewAction::Tiers { tier } => commands::review::tiers(tier)?,
            ReviewAction::Experts => commands::review::experts()?,
        },
        Commands::Sustainability { topic } => match topic {
            SustainabilityTopic::Overview => commands::sustainability::overview()?,
            SustainabilityTopic::Certifications { id } => {
                commands::sustainability::certifications(id.as_deref())?;
            }
            SustainabilityTopic::Sourcing => commands::sustainability::sourcing()?,
            SustainabilityTopic::Articles { category } => {
                commands::sustainability::articles(category)?;
            }
        },
        Commands::Session { script, keep_going } => {
            commands::session::run(&script, keep_going, config).await?;
        }
    }
    Ok(())
}
