//! Style assistant commands.

use jewelcraft_storefront::catalog::Catalog;
use jewelcraft_storefront::style::{
    QUESTIONS, QuestionnaireAnswers, SkinTone, StyleProfile, recommend,
};
use tracing::instrument;

use crate::output::print_json;

/// Recommendations from questionnaire answers.
///
/// # Errors
///
/// Returns an error if output fails.
#[instrument(skip(answers))]
pub fn questionnaire(answers: QuestionnaireAnswers) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::seeded();
    print_json(&recommend(&catalog, StyleProfile::from_questionnaire(answers)))
}

/// Recommendations for a detected undertone.
///
/// # Errors
///
/// Returns an error if output fails.
#[instrument]
pub fn photo(tone: SkinTone) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::seeded();
    print_json(&recommend(&catalog, StyleProfile::from_photo(tone)))
}

/// # Errors
///
/// Returns an error if output fails.
pub fn questions() -> Result<(), Box<dyn std::error::Error>> {
    print_json(&QUESTIONS)
}
