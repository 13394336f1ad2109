//! Scripted session replay.
//!
//! A script is a YAML list of steps run in order against one store:
//!
//! ```yaml
//! steps:
//!   - step: add_product
//!     product: 1
//!     customizations:
//!       size: "6"
//!   - step: dispatch
//!     intent:
//!       type: ADD_NOTIFICATION
//!       payload:
//!         message: Added to cart
//!   - step: sleep
//!     millis: 6000
//! ```

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use jewelcraft_core::ProductId;
use jewelcraft_storefront::catalog::Catalog;
use jewelcraft_storefront::config::StorefrontConfig;
use jewelcraft_storefront::error::StoreError;
use jewelcraft_storefront::reviews::ReviewRequest;
use jewelcraft_storefront::state::StoreHandle;
use jewelcraft_storefront::store::{AppState, CartItem, Intent};
use jewelcraft_storefront::style::{QuestionnaireAnswers, SkinTone, StyleProfile};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::output::print_json;

/// One scripted action.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// Apply a raw intent.
    Dispatch { intent: Intent },
    /// Add a catalog product to the cart at its list price.
    AddProduct {
        product: ProductId,
        #[serde(default)]
        customizations: BTreeMap<String, String>,
    },
    /// Submit an expert review request.
    SubmitReview { request: ReviewRequest },
    /// Complete a style analysis from answers, or from a detected tone.
    StyleAnalysis {
        #[serde(default)]
        answers: Option<QuestionnaireAnswers>,
        #[serde(default)]
        tone: Option<SkinTone>,
    },
    /// Wait, letting notification timers run.
    Sleep { millis: u64 },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Script {
    pub steps: Vec<Step>,
}

/// A step the store rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    /// Zero-based step index.
    pub step: usize,
    pub error: String,
}

/// Outcome of a replay.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Replay {
    pub applied: usize,
    pub rejected: Vec<Rejection>,
    pub state: AppState,
}

/// Replay `script` against `store`.
///
/// # Errors
///
/// Returns the first rejection unless `keep_going` is set.
pub async fn replay(
    store: &StoreHandle,
    catalog: &Catalog,
    script: Script,
    keep_going: bool,
) -> Result<Replay, StoreError> {
    let mut applied = 0;
    let mut rejected = Vec::new();

    for (index, step) in script.steps.into_iter().enumerate() {
        match run_step(store, catalog, step).await {
            Ok(()) => applied += 1,
            Err(e) if keep_going => {
                warn!(step = index, error = %e, "step rejected");
                rejected.push(Rejection {
                    step: index,
                    error: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    Ok(Replay {
        applied,
        rejected,
        state: store.snapshot(),
    })
}

async fn run_step(store: &StoreHandle, catalog: &Catalog, step: Step) -> Result<(), StoreError> {
    match step {
        Step::Dispatch { intent } => {
            store.dispatch(intent)?;
        }
        Step::AddProduct {
            product,
            customizations,
        } => {
            let mut item = CartItem::from_product(catalog.require_product(product)?);
            item.customizations = customizations;
            store.add_to_cart(item)?;
        }
        Step::SubmitReview { request } => {
            store.submit_expert_review(request)?;
        }
        Step::StyleAnalysis { answers, tone } => {
            let profile = match (tone, answers) {
                (Some(tone), _) => StyleProfile::from_photo(tone),
                (None, answers) => StyleProfile::from_questionnaire(answers.unwrap_or_default()),
            };
            store.complete_style_analysis(profile)?;
        }
        Step::Sleep { millis } => {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
    Ok(())
}

/// Replay a script file and print the final state.
///
/// # Errors
///
/// Returns an error if the script cannot be read or parsed, a step is
/// rejected (without `keep_going`), or output fails.
#[instrument(skip(path, config), fields(path = %path.display()))]
pub async fn run(
    path: &Path,
    keep_going: bool,
    config: StorefrontConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("File not found: {}", path.display()).into());
    }
    let content = tokio::fs::read_to_string(path).await?;
    let script: Script = serde_yaml::from_str(&content)?;
    info!(steps = script.steps.len(), "Parsed script");

    let store = StoreHandle::new(config);
    let catalog = Catalog::seeded();
    let replay = replay(&store, &catalog, script, keep_going).await?;

    info!(
        applied = replay.applied,
        rejected = replay.rejected.len(),
        "Session replayed"
    );
    print_json(&replay)
}
