//! Assessment service
//!
//! Runs each feature with the strategy chosen at construction:
//! - Remote: prompt template + completion backend
//! - Local: keyword classification + templated report
//!
//! Remote failures are rendered per feature. Symptom checks report the
//! reason, product analysis falls back to the local classifier.

use std::sync::Arc;
use tracing::{info, warn};

use crate::alternatives;
use crate::catalog::{self, ProductCatalog};
use crate::completion::{Completion, CompletionBackend};
use crate::config::Strategy;
use crate::error::AssessmentError;
use crate::models::{AssessmentReport, ClassificationInput, ProductCategory};
use crate::prompts::{self, Feature};
use crate::report::{self, ReportLayout, MEDICAL_DISCLAIMER};
use crate::Result;

/// Local symptom assessment. Total over any input.
pub fn symptom_report(input: &ClassificationInput) -> AssessmentReport {
    let text = input.normalized();
    let table = &catalog::SYMPTOM_TABLE;
    let classification = table.classify(&text);

    let mut concerns = catalog::extract_symptoms(&text);
    if concerns.is_empty() {
        concerns.push(input.text.trim().to_string());
    }

    AssessmentReport {
        subject: input.text.trim().to_string(),
        tier: classification.tier.to_string(),
        concerns,
        alternatives: alternatives::resolve(table, &classification, &text),
        disclaimer: Some(MEDICAL_DISCLAIMER.to_string()),
    }
}

/// Local product assessment. Untagged input is treated as food.
pub fn product_report(input: &ClassificationInput, catalog: &ProductCatalog) -> AssessmentReport {
    let text = input.normalized();
    let table = catalog.table(input.category.unwrap_or(ProductCategory::Food));
    let classification = table.classify(&text);

    AssessmentReport {
        subject: input.text.trim().to_string(),
        tier: classification.tier.to_string(),
        concerns: classification
            .rule
            .concerns
            .iter()
            .map(|s| s.to_string())
            .collect(),
        alternatives: alternatives::resolve(table, &classification, &text),
        disclaimer: None,
    }
}

pub struct AssessmentService {
    strategy: Strategy,
    backend: Arc<dyn CompletionBackend>,
    catalog: &'static ProductCatalog,
}

impl AssessmentService {
    pub fn new(
        strategy: Strategy,
        backend: Arc<dyn CompletionBackend>,
        catalog: &'static ProductCatalog,
    ) -> Self {
        Self {
            strategy,
            backend,
            catalog,
        }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub async fn check_symptoms(&self, symptoms: &str) -> Result<String> {
        let symptoms = required(symptoms, "Please describe your symptoms.")?;

        match self.strategy {
            Strategy::Local => {
                let input = ClassificationInput::new(symptoms, None);
                let report = symptom_report(&input);
                info!(tier = %report.tier, "Local symptom assessment");
                Ok(report::render(&report, &ReportLayout::symptoms()))
            }
            Strategy::Remote => {
                let prompt = prompts::symptom_prompt(symptoms);
                match self.backend.complete(&prompt, Feature::SymptomCheck).await {
                    Completion::Text(text) => Ok(text),
                    Completion::Failed(reason) => {
                        Ok(format!("Sorry, I couldn't analyze your symptoms: {}", reason))
                    }
                }
            }
        }
    }

    pub async fn analyze_product(&self, product: &str, category: ProductCategory) -> Result<String> {
        let product = required(product, "Please enter a product name.")?;
        let input = ClassificationInput::new(product, Some(category));

        if self.strategy == Strategy::Remote {
            let prompt = prompts::product_prompt(product, category, self.catalog.region);
            match self.backend.complete(&prompt, Feature::ProductAnalysis).await {
                Completion::Text(text) => return Ok(text),
                Completion::Failed(reason) => {
                    warn!(%reason, "Remote product analysis failed, using local classifier");
                }
            }
        }

        let report = product_report(&input, self.catalog);
        info!(tier = %report.tier, category = %category, "Local product assessment");
        Ok(report::render(&report, &ReportLayout::product(self.catalog.region)))
    }

    /// `report_text` is text already extracted from the uploaded document.
    pub async fn analyze_report(&self, report_text: &str) -> Result<String> {
        let text = report_text.trim();
        if text.is_empty() {
            return Err(AssessmentError::Extraction(
                "Could not extract any text from the uploaded report. \
                 Please upload a clearer scan or a text-based PDF/DOCX file."
                    .to_string(),
            ));
        }

        if self.strategy == Strategy::Local {
            return Err(AssessmentError::Unavailable(
                "report analysis requires the remote assessment service".to_string(),
            ));
        }

        let prompt = prompts::report_prompt(text);
        Ok(match self.backend.complete(&prompt, Feature::ReportAnalysis).await {
            Completion::Text(text) => text,
            Completion::Failed(reason) => {
                format!("Sorry, I couldn't analyze your report: {}", reason)
            }
        })
    }
}

fn required<'a>(value: &'a str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(AssessmentError::validation(message))
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Backend that replays one canned outcome and records what it was sent.
    pub struct FakeBackend {
        outcome: Completion,
        pub calls: Mutex<Vec<(String, Feature)>>,
    }

    impl FakeBackend {
        pub fn new(outcome: Completion) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CompletionBackend for FakeBackend {
        async fn complete(&self, prompt: &str, feature: Feature) -> Completion {
            self.calls.lock().unwrap().push((prompt.to_string(), feature));
            self.outcome.clone()
        }
    }
}
