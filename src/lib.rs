//! Health Assessment Service
//!
//! A small web service that:
//! - Checks free-text symptoms and assigns an urgency tier
//! - Rates food and personal-care products and suggests regional alternatives
//! - Explains already-extracted medical report text via a remote model
//! - Computes BMI, body-fat estimate and a risk narrative
//! - Finds nearby facilities sorted by great-circle distance
//!
//! Symptom and product features run either against a remote completion API
//! or a deterministic keyword classifier, chosen once from configuration.

pub mod alternatives;
pub mod api;
pub mod assessment;
pub mod biometrics;
pub mod catalog;
pub mod classifier;
pub mod completion;
pub mod config;
pub mod error;
pub mod geo;
pub mod models;
pub mod prompts;
pub mod report;

pub use error::Result;

// Re-export common types
pub use models::*;
pub use assessment::AssessmentService;
pub use classifier::{KeywordSet, TierTable};
pub use config::{AppConfig, Strategy};
