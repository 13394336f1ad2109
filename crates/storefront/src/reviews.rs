//! Expert review tiers and submission validation.

use chrono::{DateTime, Utc};
use jewelcraft_core::{Email, ExpertId, ReviewId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::error::{Result, StoreError};
use crate::store::NotificationRequest;

/// Depth of analysis purchased with a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisTier {
    Basic,
    Detailed,
    Premium,
}

impl AnalysisTier {
    pub const ALL: [Self; 3] = [Self::Basic, Self::Detailed, Self::Premium];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Detailed => "detailed",
            Self::Premium => "premium",
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Basic => "Basic Analysis",
            Self::Detailed => "Detailed Analysis",
            Self::Premium => "Premium Analysis",
        }
    }

    /// Price in whole dollars.
    #[must_use]
    pub fn price(&self) -> Decimal {
        match self {
            Self::Basic => Decimal::new(25, 0),
            Self::Detailed => Decimal::new(75, 0),
            Self::Premium => Decimal::new(150, 0),
        }
    }

    #[must_use]
    pub const fn delivery_time(&self) -> &'static str {
        match self {
            Self::Basic => "24-48 hours",
            Self::Detailed => "48-72 hours",
            Self::Premium => "3-5 business days",
        }
    }

    #[must_use]
    pub const fn includes(&self) -> &'static [&'static str] {
        match self {
            Self::Basic => &[
                "Material identification",
                "Approximate weight estimation",
                "Basic condition assessment",
                "Market value range",
            ],
            Self::Detailed => &[
                "Comprehensive material analysis",
                "Precise weight calculations",
                "Detailed condition report",
                "Accurate market valuation",
                "Craftsmanship assessment",
                "Age and origin estimation",
            ],
            Self::Premium => &[
                "Complete gemological assessment",
                "Certified weight measurements",
                "Professional photography",
                "Detailed condition documentation",
                "Market analysis and trends",
                "Authentication verification",
                "Insurance appraisal document",
                "Video consultation with expert",
            ],
        }
    }
}

impl std::fmt::Display for AnalysisTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AnalysisTier {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| StoreError::unknown("analysis tier", s))
    }
}

/// A reviewer on the panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Expert {
    pub id: ExpertId,
    pub name: &'static str,
    pub title: &'static str,
    pub credentials: &'static [&'static str],
    pub specialties: &'static [&'static str],
    pub rating: Decimal,
    pub review_count: u32,
}

/// The review panel.
#[must_use]
pub fn experts() -> Vec<Expert> {
    vec![
        Expert {
            id: ExpertId::new(1),
            name: "Sarah Mitchell",
            title: "Senior Gemologist",
            credentials: &["GIA Graduate Gemologist", "15+ years experience"],
            specialties: &["Diamond Grading", "Engagement Rings", "Modern Jewelry"],
            rating: Decimal::new(49, 1),
            review_count: 342,
        },
        Expert {
            id: ExpertId::new(2),
            name: "Michael Chen",
            title: "Certified Appraiser",
            credentials: &[
                "FGA Fellow",
                "Certified Gemologist Appraiser",
                "20+ years experience",
            ],
            specialties: &["Colored Gemstones", "Vintage Jewelry", "Insurance Appraisals"],
            rating: Decimal::new(48, 1),
            review_count: 287,
        },
        Expert {
            id: ExpertId::new(3),
            name: "Elena Rodriguez",
            title: "Jewelry Historian",
            credentials: &[
                "Master's in Art History",
                "Antique Jewelry Specialist",
                "12+ years experience",
            ],
            specialties: &["Antique Jewelry", "Period Identification", "Authentication"],
            rating: Decimal::new(49, 1),
            review_count: 156,
        },
    ]
}

/// Form input for a review request. Nothing is validated until [`ReviewRequest::submit`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReviewRequest {
    pub tier: Option<AnalysisTier>,
    pub jewelry_type: String,
    pub description: String,
    pub estimated_age: Option<String>,
    pub purchase_price: Option<Decimal>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub image_count: u32,
}

impl ReviewRequest {
    /// Validate the request and turn it into a submitted review.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidReview`] without a tier or without images,
    /// and [`StoreError::Email`] for a malformed contact email.
    #[instrument(skip(self), fields(tier = ?self.tier, images = self.image_count))]
    pub fn submit(self, now: DateTime<Utc>) -> Result<ExpertReview> {
        let Some(tier) = self.tier else {
            return Err(StoreError::InvalidReview(
                "an analysis tier must be selected".to_string(),
            ));
        };
        if self.image_count == 0 {
            return Err(StoreError::InvalidReview(
                "at least one image is required".to_string(),
            ));
        }
        let contact_email = self
            .contact_email
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Email::parse)
            .transpose()?;

        Ok(ExpertReview {
            id: ReviewId::generate(),
            tier,
            jewelry_type: self.jewelry_type,
            description: self.description,
            estimated_age: self.estimated_age.filter(|s| !s.trim().is_empty()),
            purchase_price: self.purchase_price,
            contact_email,
            contact_phone: self.contact_phone.filter(|s| !s.trim().is_empty()),
            image_count: self.image_count,
            submitted_at: now,
        })
    }
}

/// A submitted review request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpertReview {
    pub id: ReviewId,
    pub tier: AnalysisTier,
    pub jewelry_type: String,
    pub description: String,
    pub estimated_age: Option<String>,
    pub purchase_price: Option<Decimal>,
    pub contact_email: Option<Email>,
    pub contact_phone: Option<String>,
    pub image_count: u32,
    pub submitted_at: DateTime<Utc>,
}

impl ExpertReview {
    /// Notification confirming the submission.
    #[must_use]
    pub fn confirmation(&self) -> NotificationRequest {
        NotificationRequest::success(
            "Review Request Submitted",
            format!(
                "Your {} request has been submitted successfully.",
                self.tier.name()
            ),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use jewelcraft_core::EmailError;

    use super::*;

    fn request() -> ReviewRequest {
        ReviewRequest {
            tier: Some(AnalysisTier::Detailed),
            jewelry_type: "ring".to_string(),
            description: "Grandmother's emerald ring".to_string(),
            image_count: 3,
            ..ReviewRequest::default()
        }
    }

    #[test]
    fn test_tier_table() {
        assert_eq!(AnalysisTier::Basic.price(), Decimal::new(25, 0));
        assert_eq!(AnalysisTier::Premium.delivery_time(), "3-5 business days");
        assert_eq!(AnalysisTier::Detailed.includes().len(), 6);
        assert_eq!("premium".parse::<AnalysisTier>().unwrap(), AnalysisTier::Premium);
        assert!("platinum".parse::<AnalysisTier>().is_err());
    }

    #[test]
    fn test_submit_requires_tier_and_images() {
        let err = ReviewRequest {
            tier: None,
            ..request()
        }
        .submit(Utc::now())
        .unwrap_err();
        assert!(matches!(err, StoreError::InvalidReview(_)));

        let err = ReviewRequest {
            image_count: 0,
            ..request()
        }
        .submit(Utc::now())
        .unwrap_err();
        assert!(matches!(err, StoreError::InvalidReview(_)));
    }

    #[test]
    fn test_submit_validates_email() {
        let err = ReviewRequest {
            contact_email: Some("not-an-email".to_string()),
            ..request()
        }
        .submit(Utc::now())
        .unwrap_err();
        assert_eq!(err, StoreError::Email(EmailError::AtSymbolCount));

        let review = ReviewRequest {
            contact_email: Some(" ".to_string()),
            ..request()
        }
        .submit(Utc::now())
        .unwrap();
        assert!(review.contact_email.is_none());
    }

    #[test]
    fn test_confirmation_names_tier() {
        let review = request().submit(Utc::now()).unwrap();
        let notice = review.confirmation();
        assert_eq!(notice.title.as_deref(), Some("Review Request Submitted"));
        assert_eq!(
            notice.message,
            "Your Detailed Analysis request has been submitted successfully."
        );
    }

    #[test]
    fn test_experts_panel() {
        let panel = experts();
        assert_eq!(panel.len(), 3);
        assert_eq!(panel[1].name, "Michael Chen");
    }
}
