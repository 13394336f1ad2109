//! Sustainability guide: certifications, material sourcing, gemstone ethics,
//! and the educational articles shown next to the sustainable products.

use jewelcraft_core::Product;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{Result, StoreError};

/// An industry certification sellers can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Certification {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

#[must_use]
pub fn certifications() -> Vec<Certification> {
    vec![
        Certification {
            id: "rjc",
            name: "Responsible Jewelry Council",
            description: "Promotes responsible ethical, human rights, social and environmental practices",
        },
        Certification {
            id: "fairtrade",
            name: "Fair Trade Gold",
            description: "Ensures miners receive fair wages and work in safe conditions",
        },
        Certification {
            id: "kimberley",
            name: "Kimberley Process",
            description: "Prevents conflict diamonds from entering the mainstream market",
        },
        Certification {
            id: "spi",
            name: "Sustainable Pearl Initiative",
            description: "Promotes sustainable pearl farming and ocean conservation",
        },
    ]
}

/// One way of sourcing precious metal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetalOption {
    pub title: &'static str,
    pub description: &'static str,
    pub benefits: &'static [&'static str],
    /// Metals offered this way. Empty when not listed.
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub availability: &'static [&'static str],
    /// Certifications backing the source. Empty when not listed.
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub certifications: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetalSourcing {
    pub recycled: MetalOption,
    pub newly_mined: MetalOption,
}

#[must_use]
pub fn metal_sourcing() -> MetalSourcing {
    MetalSourcing {
        recycled: MetalOption {
            title: "Recycled Metals",
            description: "Metals sourced from previously used jewelry and electronic waste",
            benefits: &[
                "Reduces mining impact",
                "Lower carbon footprint",
                "Preserves natural resources",
            ],
            availability: &["Gold", "Silver", "Platinum", "Palladium"],
            certifications: &[],
        },
        newly_mined: MetalOption {
            title: "Responsibly Mined",
            description: "Newly mined metals from certified responsible sources",
            benefits: &[
                "Fair labor practices",
                "Environmental protection",
                "Community development",
            ],
            availability: &[],
            certifications: &["Fair Trade", "RJC", "ARM"],
        },
    }
}

/// An ethical standard for gemstones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GemstonePractice {
    pub title: &'static str,
    pub description: &'static str,
    /// Benefits, standards, or the verification scheme, depending on the practice.
    pub points: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GemstoneEthics {
    pub conflict_free: GemstonePractice,
    pub lab_grown: GemstonePractice,
    pub ethical_sourcing: GemstonePractice,
}

#[must_use]
pub fn gemstone_ethics() -> GemstoneEthics {
    GemstoneEthics {
        conflict_free: GemstonePractice {
            title: "Conflict-Free Diamonds",
            description: "Diamonds that have not financed civil wars or human rights abuses",
            points: &["Kimberley Process Certification"],
        },
        lab_grown: GemstonePractice {
            title: "Lab-Grown Gems",
            description: "Identical to natural gems but created in controlled laboratory environments",
            points: &[
                "No mining required",
                "Traceable origin",
                "Lower environmental impact",
            ],
        },
        ethical_sourcing: GemstonePractice {
            title: "Ethically Sourced",
            description: "Gems sourced with respect for human rights and environmental protection",
            points: &[
                "Fair wages",
                "Safe working conditions",
                "Environmental restoration",
            ],
        },
    }
}

/// Topic an article belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleCategory {
    Sustainability,
    Materials,
    Gemstones,
}

impl ArticleCategory {
    pub const ALL: [Self; 3] = [Self::Sustainability, Self::Materials, Self::Gemstones];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sustainability => "sustainability",
            Self::Materials => "materials",
            Self::Gemstones => "gemstones",
        }
    }
}

impl std::fmt::Display for ArticleCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ArticleCategory {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| StoreError::unknown("article category", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u32,
    pub title: &'static str,
    pub category: ArticleCategory,
    pub summary: &'static str,
    pub read_time_minutes: u32,
}

#[must_use]
pub fn articles() -> Vec<Article> {
    vec![
        Article {
            id: 1,
            title: "Understanding Jewelry Sustainability",
            category: ArticleCategory::Sustainability,
            summary: "Learn about the environmental and social impact of jewelry production and how to make responsible choices.",
            read_time_minutes: 5,
        },
        Article {
            id: 2,
            title: "Recycled vs. Newly Mined Metals",
            category: ArticleCategory::Materials,
            summary: "Discover the differences between recycled and newly mined precious metals and their environmental impact.",
            read_time_minutes: 3,
        },
        Article {
            id: 3,
            title: "Conflict-Free Diamond Guide",
            category: ArticleCategory::Gemstones,
            summary: "Everything you need to know about conflict-free diamonds and ethical gemstone sourcing.",
            read_time_minutes: 7,
        },
        Article {
            id: 4,
            title: "Lab-Grown vs. Natural Gems",
            category: ArticleCategory::Gemstones,
            summary: "Compare lab-grown and natural gemstones in terms of quality, value, and environmental impact.",
            read_time_minutes: 6,
        },
    ]
}

/// Articles on one topic, or all of them.
#[must_use]
pub fn articles_in(category: Option<ArticleCategory>) -> Vec<Article> {
    articles()
        .into_iter()
        .filter(|a| category.is_none_or(|c| a.category == c))
        .collect()
}

/// A headline figure on the overview tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImpactStat {
    pub figure: &'static str,
    pub label: &'static str,
    pub detail: &'static str,
}

#[must_use]
pub fn impact_stats() -> Vec<ImpactStat> {
    vec![
        ImpactStat {
            figure: "95%",
            label: "Less Energy",
            detail: "Using recycled metals",
        },
        ImpactStat {
            figure: "100%",
            label: "Conflict-Free",
            detail: "Diamond sourcing",
        },
        ImpactStat {
            figure: "50+",
            label: "Certified",
            detail: "Sustainable sellers",
        },
        ImpactStat {
            figure: "1M+",
            label: "Trees Protected",
            detail: "Through partnerships",
        },
    ]
}

/// Everything the sustainability page shows, with the catalog's sustainable products.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SustainabilityGuide<'a> {
    pub stats: Vec<ImpactStat>,
    pub certifications: Vec<Certification>,
    pub metal_sourcing: MetalSourcing,
    pub gemstone_ethics: GemstoneEthics,
    pub articles: Vec<Article>,
    pub products: Vec<&'a Product>,
}

impl<'a> SustainabilityGuide<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            stats: impact_stats(),
            certifications: certifications(),
            metal_sourcing: metal_sourcing(),
            gemstone_ethics: gemstone_ethics(),
            articles: articles(),
            products: catalog.sustainable(),
        }
    }
}
