//! Style assistant: questionnaire, skin-tone tables, and recommendations.
//!
//! The assistant is a fixed decision table. A questionnaire (or a skin tone
//! detected from a photo by the caller) produces a [`StyleProfile`], which is
//! then matched against the catalog to pick up to six products and three tips.

use jewelcraft_core::ProductSnapshot;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::catalog::Catalog;
use crate::error::StoreError;

const MAX_RECOMMENDED_ITEMS: usize = 6;
const MAX_TIPS: usize = 3;

macro_rules! string_enum {
    ($(#[$meta:meta])* $name:ident, $kind:literal { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = StoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == s)
                    .ok_or_else(|| StoreError::unknown($kind, s))
            }
        }
    };
}

string_enum!(
    /// Answer to "What's your preferred style aesthetic?"
    StyleAesthetic, "style" {
        Classic => "classic",
        Modern => "modern",
        Vintage => "vintage",
        Bohemian => "bohemian",
        Glamorous => "glamorous",
    }
);

string_enum!(
    /// Answer to "What occasions do you typically dress for?"
    Occasion, "occasion" {
        Everyday => "everyday",
        Work => "work",
        Formal => "formal",
        Casual => "casual",
        Special => "special",
    }
);

string_enum!(
    /// Answer to "What's your preferred metal color?"
    MetalColor, "metal color" {
        Yellow => "yellow",
        White => "white",
        Rose => "rose",
        Mixed => "mixed",
    }
);

string_enum!(
    /// Answer to "How would you describe your personal style?"
    PersonalStyle, "personal style" {
        Elegant => "elegant",
        Edgy => "edgy",
        Romantic => "romantic",
        Sporty => "sporty",
        Artistic => "artistic",
        Sophisticated => "sophisticated",
    }
);

string_enum!(
    /// Answer to "What size jewelry do you prefer?"
    SizePreference, "size preference" {
        Delicate => "delicate",
        Medium => "medium",
        Statement => "statement",
        Varies => "varies",
    }
);

string_enum!(
    /// Skin undertone classification.
    SkinTone, "skin tone" {
        Cool => "cool",
        Warm => "warm",
        Neutral => "neutral",
    }
);

/// How a profile was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMethod {
    Questionnaire,
    Photo,
}

// =============================================================================
// Questionnaire
// =============================================================================

/// Whether a question takes one answer or several.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    MultipleChoice,
    MultipleSelect,
}

/// One questionnaire step.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StyleQuestion {
    pub id: u8,
    pub question: &'static str,
    pub kind: QuestionKind,
    /// `(option id, label)` pairs.
    pub options: &'static [(&'static str, &'static str)],
}

/// The five questionnaire steps, in order.
pub const QUESTIONS: [StyleQuestion; 5] = [
    StyleQuestion {
        id: 1,
        question: "What's your preferred style aesthetic?",
        kind: QuestionKind::MultipleChoice,
        options: &[
            ("classic", "Classic & Timeless"),
            ("modern", "Modern & Minimalist"),
            ("vintage", "Vintage & Antique"),
            ("bohemian", "Bohemian & Eclectic"),
            ("glamorous", "Glamorous & Bold"),
        ],
    },
    StyleQuestion {
        id: 2,
        question: "What occasions do you typically dress for?",
        kind: QuestionKind::MultipleSelect,
        options: &[
            ("everyday", "Everyday wear"),
            ("work", "Professional/Work"),
            ("formal", "Formal events"),
            ("casual", "Casual outings"),
            ("special", "Special occasions"),
        ],
    },
    StyleQuestion {
        id: 3,
        question: "What's your preferred metal color?",
        kind: QuestionKind::MultipleChoice,
        options: &[
            ("yellow", "Yellow Gold"),
            ("white", "White Gold/Silver"),
            ("rose", "Rose Gold"),
            ("mixed", "Mixed metals"),
        ],
    },
    StyleQuestion {
        id: 4,
        question: "How would you describe your personal style?",
        kind: QuestionKind::MultipleSelect,
        options: &[
            ("elegant", "Elegant"),
            ("edgy", "Edgy"),
            ("romantic", "Romantic"),
            ("sporty", "Sporty"),
            ("artistic", "Artistic"),
            ("sophisticated", "Sophisticated"),
        ],
    },
    StyleQuestion {
        id: 5,
        question: "What size jewelry do you prefer?",
        kind: QuestionKind::MultipleChoice,
        options: &[
            ("delicate", "Delicate & Subtle"),
            ("medium", "Medium & Noticeable"),
            ("statement", "Bold & Statement"),
            ("varies", "It varies by piece"),
        ],
    },
];

/// Answers collected by the questionnaire. Every answer may be skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuestionnaireAnswers {
    pub style: Option<StyleAesthetic>,
    pub occasions: Vec<Occasion>,
    pub metal: Option<MetalColor>,
    pub personal_style: Vec<PersonalStyle>,
    pub size: Option<SizePreference>,
}

// =============================================================================
// Decision tables
// =============================================================================

/// Guidance for one skin undertone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkinToneAnalysis {
    pub characteristics: &'static [&'static str],
    pub recommended_metals: &'static [&'static str],
    pub recommended_gemstones: &'static [&'static str],
    pub avoid_metals: &'static [&'static str],
    pub description: &'static str,
}

impl SkinTone {
    /// Lookup into the undertone table.
    #[must_use]
    pub const fn analysis(&self) -> &'static SkinToneAnalysis {
        match self {
            Self::Cool => &SkinToneAnalysis {
                characteristics: &[
                    "Pink or blue undertones",
                    "Burns easily in sun",
                    "Veins appear blue",
                ],
                recommended_metals: &["white-gold", "platinum", "silver"],
                recommended_gemstones: &["diamond", "sapphire", "emerald", "amethyst"],
                avoid_metals: &["yellow-gold"],
                description: "Cool undertones pair beautifully with white metals and blue-based gemstones",
            },
            Self::Warm => &SkinToneAnalysis {
                characteristics: &[
                    "Yellow or golden undertones",
                    "Tans easily",
                    "Veins appear green",
                ],
                recommended_metals: &["yellow-gold", "rose-gold", "copper"],
                recommended_gemstones: &["ruby", "citrine", "amber", "coral"],
                avoid_metals: &["platinum"],
                description: "Warm undertones complement yellow and rose metals with warm-colored stones",
            },
            Self::Neutral => &SkinToneAnalysis {
                characteristics: &[
                    "Mix of pink and yellow undertones",
                    "Moderate sun sensitivity",
                    "Veins appear blue-green",
                ],
                recommended_metals: &["yellow-gold", "white-gold", "rose-gold", "silver"],
                recommended_gemstones: &["diamond", "pearl", "aquamarine", "peridot"],
                avoid_metals: &[],
                description: "Neutral undertones are versatile and work well with most metals and gemstones",
            },
        }
    }

    /// Undertone inferred from the preferred metal color.
    #[must_use]
    pub const fn from_metal(metal: MetalColor) -> Self {
        match metal {
            MetalColor::Yellow => Self::Warm,
            MetalColor::White => Self::Cool,
            MetalColor::Rose | MetalColor::Mixed => Self::Neutral,
        }
    }
}

/// Guidance for one style aesthetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecommendation {
    pub description: &'static str,
    pub recommended_items: &'static [&'static str],
    pub metals: &'static [&'static str],
    pub gemstones: &'static [&'static str],
    pub characteristics: &'static [&'static str],
}

impl StyleAesthetic {
    /// Lookup into the style table.
    #[must_use]
    pub const fn recommendation(&self) -> &'static StyleRecommendation {
        match self {
            Self::Classic => &StyleRecommendation {
                description: "Timeless pieces that never go out of style",
                recommended_items: &[
                    "solitaire-rings",
                    "pearl-earrings",
                    "simple-chains",
                    "tennis-bracelets",
                ],
                metals: &["yellow-gold", "white-gold", "platinum"],
                gemstones: &["diamond", "pearl"],
                characteristics: &["Clean lines", "Traditional settings", "Minimal embellishment"],
            },
            Self::Modern => &StyleRecommendation {
                description: "Contemporary designs with clean, geometric lines",
                recommended_items: &["geometric-rings", "linear-earrings", "minimalist-necklaces"],
                metals: &["white-gold", "platinum", "silver"],
                gemstones: &["diamond", "black-diamond", "clear-quartz"],
                characteristics: &["Geometric shapes", "Asymmetrical designs", "Mixed materials"],
            },
            Self::Vintage => &StyleRecommendation {
                description: "Inspired by bygone eras with intricate details",
                recommended_items: &["art-deco-rings", "chandelier-earrings", "ornate-brooches"],
                metals: &["yellow-gold", "rose-gold"],
                gemstones: &["emerald", "ruby", "sapphire", "pearl"],
                characteristics: &["Ornate details", "Filigree work", "Colored gemstones"],
            },
            Self::Bohemian => &StyleRecommendation {
                description: "Free-spirited designs with natural elements",
                recommended_items: &[
                    "stacking-rings",
                    "layered-necklaces",
                    "natural-stone-jewelry",
                ],
                metals: &["silver", "copper", "mixed-metals"],
                gemstones: &["turquoise", "amethyst", "moonstone", "labradorite"],
                characteristics: &["Natural stones", "Organic shapes", "Layered styling"],
            },
            Self::Glamorous => &StyleRecommendation {
                description: "Bold, eye-catching pieces that make a statement",
                recommended_items: &[
                    "cocktail-rings",
                    "chandelier-earrings",
                    "statement-necklaces",
                ],
                metals: &["yellow-gold", "rose-gold", "platinum"],
                gemstones: &["diamond", "ruby", "emerald", "sapphire"],
                characteristics: &["Large gemstones", "Dramatic designs", "Luxurious materials"],
            },
        }
    }
}

// =============================================================================
// Profiles
// =============================================================================

/// Preferences carried by a style profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePreferences {
    pub style: StyleAesthetic,
    pub metals: Vec<String>,
    #[serde(default)]
    pub gemstones: Vec<String>,
    #[serde(default)]
    pub occasions: Vec<Occasion>,
    #[serde(default)]
    pub personal_style: Vec<PersonalStyle>,
    #[serde(default)]
    pub size: Option<SizePreference>,
}

/// Result of a style analysis, stored wholesale by the application store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    pub method: AnalysisMethod,
    pub skin_tone: SkinTone,
    pub preferences: StylePreferences,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answers: Option<QuestionnaireAnswers>,
}

impl StyleProfile {
    /// Build a profile from questionnaire answers.
    ///
    /// Skipped answers fall back to classic style, yellow metal, and medium size.
    #[must_use]
    pub fn from_questionnaire(answers: QuestionnaireAnswers) -> Self {
        let style = answers.style.unwrap_or(StyleAesthetic::Classic);
        let metal = answers.metal.unwrap_or(MetalColor::Yellow);

        Self {
            method: AnalysisMethod::Questionnaire,
            skin_tone: SkinTone::from_metal(metal),
            preferences: StylePreferences {
                style,
                metals: vec![metal.as_str().to_string()],
                gemstones: Vec::new(),
                occasions: answers.occasions.clone(),
                personal_style: answers.personal_style.clone(),
                size: Some(answers.size.unwrap_or(SizePreference::Medium)),
            },
            answers: Some(answers),
        }
    }

    /// Build a profile from an undertone detected in a photo.
    #[must_use]
    pub fn from_photo(skin_tone: SkinTone) -> Self {
        let analysis = skin_tone.analysis();
        Self {
            method: AnalysisMethod::Photo,
            skin_tone,
            preferences: StylePreferences {
                style: StyleAesthetic::Modern,
                metals: to_strings(analysis.recommended_metals),
                gemstones: to_strings(analysis.recommended_gemstones),
                occasions: Vec::new(),
                personal_style: Vec::new(),
                size: None,
            },
            answers: None,
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Products and advice derived from a profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub profile: StyleProfile,
    pub style: &'static StyleRecommendation,
    pub skin_tone: &'static SkinToneAnalysis,
    pub items: Vec<ProductSnapshot>,
    pub tips: Vec<String>,
}

/// Match a profile against the catalog.
///
/// A product qualifies if any of its materials mentions a metal or gemstone
/// recommended for the profile's undertone.
#[instrument(skip(catalog, profile), fields(tone = %profile.skin_tone, style = %profile.preferences.style))]
#[must_use]
pub fn recommend(catalog: &Catalog, profile: StyleProfile) -> Recommendations {
    let style = profile.preferences.style.recommendation();
    let tone = profile.skin_tone.analysis();

    // "white-gold" matches "14k White Gold"
    let metals: Vec<String> = tone
        .recommended_metals
        .iter()
        .map(|m| m.replacen('-', " ", 1))
        .collect();

    let items: Vec<ProductSnapshot> = catalog
        .products()
        .iter()
        .filter(|product| {
            product.materials.iter().any(|material| {
                let material = material.to_lowercase();
                metals.iter().any(|m| material.contains(m.as_str()))
                    || tone
                        .recommended_gemstones
                        .iter()
                        .any(|g| material.contains(&g.to_lowercase()))
            })
        })
        .take(MAX_RECOMMENDED_ITEMS)
        .map(jewelcraft_core::Product::snapshot)
        .collect();

    tracing::debug!(matched = items.len(), "style recommendations computed");

    let tips = personalized_tips(&profile);
    Recommendations {
        profile,
        style,
        skin_tone: tone,
        items,
        tips,
    }
}

fn personalized_tips(profile: &StyleProfile) -> Vec<String> {
    let tone = profile.skin_tone;
    let characteristics = profile
        .preferences
        .style
        .recommendation()
        .characteristics
        .join(", ")
        .to_lowercase();

    let tips = [
        format!(
            "Your {tone} undertone pairs beautifully with {} metals.",
            tone.analysis().recommended_metals.join(", ")
        ),
        format!("Based on your style preference, consider {characteristics}."),
        "Mix metals for a modern, layered look that works with your versatile style.".to_string(),
        "Consider the occasion when choosing jewelry size and formality.".to_string(),
    ];
    tips.into_iter().take(MAX_TIPS).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_questionnaire_defaults() {
        let profile = StyleProfile::from_questionnaire(QuestionnaireAnswers::default());
        assert_eq!(profile.method, AnalysisMethod::Questionnaire);
        assert_eq!(profile.preferences.style, StyleAesthetic::Classic);
        assert_eq!(profile.skin_tone, SkinTone::Warm);
        assert_eq!(profile.preferences.metals, vec!["yellow".to_string()]);
        assert_eq!(profile.preferences.size, Some(SizePreference::Medium));
    }

    #[test]
    fn test_metal_color_drives_tone() {
        assert_eq!(SkinTone::from_metal(MetalColor::White), SkinTone::Cool);
        assert_eq!(SkinTone::from_metal(MetalColor::Yellow), SkinTone::Warm);
        assert_eq!(SkinTone::from_metal(MetalColor::Rose), SkinTone::Neutral);
        assert_eq!(SkinTone::from_metal(MetalColor::Mixed), SkinTone::Neutral);
    }

    #[test]
    fn test_photo_profile_uses_tone_table() {
        let profile = StyleProfile::from_photo(SkinTone::Cool);
        assert_eq!(profile.method, AnalysisMethod::Photo);
        assert_eq!(profile.preferences.style, StyleAesthetic::Modern);
        assert_eq!(
            profile.preferences.metals,
            vec!["white-gold", "platinum", "silver"]
        );
        assert!(profile.answers.is_none());
    }

    #[test]
    fn test_cool_tone_recommendations() {
        let catalog = Catalog::seeded();
        let answers = QuestionnaireAnswers {
            style: Some(StyleAesthetic::Modern),
            metal: Some(MetalColor::White),
            ..QuestionnaireAnswers::default()
        };
        let recs = recommend(&catalog, StyleProfile::from_questionnaire(answers));

        let names: Vec<&str> = recs.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Diamond Solitaire Ring",
                "Emerald Tennis Bracelet",
                "Pearl Drop Earrings",
                "Sapphire Pendant Necklace",
                "Ruby Statement Ring",
            ]
        );
        assert_eq!(recs.tips.len(), 3);
        assert_eq!(
            recs.tips[0],
            "Your cool undertone pairs beautifully with white-gold, platinum, silver metals."
        );
        assert_eq!(
            recs.tips[1],
            "Based on your style preference, consider geometric shapes, asymmetrical designs, mixed materials."
        );
    }

    #[test]
    fn test_warm_tone_recommendations() {
        let catalog = Catalog::seeded();
        let recs = recommend(&catalog, StyleProfile::from_photo(SkinTone::Warm));
        let ids: Vec<i32> = recs.items.iter().map(|p| p.id.as_i32()).collect();
        // yellow gold bracelet, rose gold necklace, ruby ring
        assert_eq!(ids, vec![2, 4, 5]);
    }

    #[test]
    fn test_parse_answers() {
        assert_eq!("bohemian".parse::<StyleAesthetic>().unwrap(), StyleAesthetic::Bohemian);
        let err = "punk".parse::<StyleAesthetic>().unwrap_err();
        assert_eq!(err, StoreError::unknown("style", "punk"));
        assert_eq!(QUESTIONS.len(), 5);
        assert_eq!(QUESTIONS[2].options.len(), MetalColor::ALL.len());
    }

    #[test]
    fn test_profile_serde() {
        let profile = StyleProfile::from_photo(SkinTone::Neutral);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["method"], "photo");
        assert_eq!(json["skinTone"], "neutral");
        assert!(json.get("answers").is_none());
        let back: StyleProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile);
    }
}
