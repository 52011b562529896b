//! Static keyword catalogs
//!
//! Everything here is data: keyword sets, tier tables, alternatives tables.
//! The classifier and resolver know nothing about symptoms or products.

pub mod products;
pub mod symptoms;

pub use products::{ProductCatalog, INDIA};
pub use symptoms::{extract_symptoms, SYMPTOM_TABLE};
