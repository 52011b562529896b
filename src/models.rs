//! Core data models for the health assessment service

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AssessmentError;

//
// ================= Enums =================
//

/// Symptom checker tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Urgency {
    Mild,
    Moderate,
    Severe,
}

/// Product analyzer tier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HealthRating {
    Healthy,
    Moderate,
    #[serde(rename = "Less Healthy")]
    LessHealthy,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    Food,
    PersonalCare,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

//
// ================= Inputs =================
//

/// Free-form text plus an optional category tag. Lives for one request.
#[derive(Debug, Clone)]
pub struct ClassificationInput {
    pub text: String,
    pub category: Option<ProductCategory>,
}

impl ClassificationInput {
    pub fn new(text: impl Into<String>, category: Option<ProductCategory>) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// Lowercased text used for keyword membership tests.
    pub fn normalized(&self) -> String {
        self.text.to_lowercase()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BiometricInput {
    /// Kilograms
    pub weight: f64,
    /// Centimetres
    pub height: f64,
    pub age: u32,
    pub sex: Sex,
}

//
// ================= Outputs =================
//

/// Output of the local strategy before rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentReport {
    pub subject: String,
    pub tier: String,
    pub concerns: Vec<String>,
    pub alternatives: Vec<String>,
    pub disclaimer: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BiometricResult {
    pub bmi: f64,
    pub category: String,
    pub body_fat: f64,
    pub risk: String,
    pub age: u32,
    pub sex: Sex,
}

//
// ================= Parsing & Display =================
//

impl FromStr for ProductCategory {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "food" => Ok(ProductCategory::Food),
            "personal-care" | "personal" | "care" => Ok(ProductCategory::PersonalCare),
            other => Err(AssessmentError::validation(format!(
                "Unknown product type '{}'. Use 'food' or 'personal-care'.",
                other
            ))),
        }
    }
}

impl FromStr for Sex {
    type Err = AssessmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(AssessmentError::validation(
                "Gender must be either 'male' or 'female'.",
            )),
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Urgency::Mild => "Mild",
            Urgency::Moderate => "Moderate",
            Urgency::Severe => "Severe",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for HealthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HealthRating::Healthy => "Healthy",
            HealthRating::Moderate => "Moderate",
            HealthRating::LessHealthy => "Less Healthy",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProductCategory::Food => "food",
            ProductCategory::PersonalCare => "personal care",
        };
        write!(f, "{}", s)
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sex::Male => "male",
            Sex::Female => "female",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_category_parsing() {
        assert_eq!("food".parse::<ProductCategory>().unwrap(), ProductCategory::Food);
        assert_eq!(
            "Personal_Care".parse::<ProductCategory>().unwrap(),
            ProductCategory::PersonalCare
        );
        assert!("electronics".parse::<ProductCategory>().is_err());
    }

    #[test]
    fn test_sex_parsing() {
        assert_eq!("Female".parse::<Sex>().unwrap(), Sex::Female);
        let err = "other".parse::<Sex>().unwrap_err();
        assert!(err.to_string().starts_with("Error:"));
    }

    #[test]
    fn test_rating_serializes_with_space() {
        let json = serde_json::to_string(&HealthRating::LessHealthy).unwrap();
        assert_eq!(json, "\"Less Healthy\"");
    }
}
