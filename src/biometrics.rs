//! Biometric Calculator
//!
//! BMI, band, estimated body-fat percentage and a risk narrative.
//! Pure functions over `BiometricInput`.

use crate::error::AssessmentError;
use crate::models::{BiometricInput, BiometricResult, Sex};
use crate::Result;

/// Upper bounds (exclusive) paired with band names; the last band is open.
const BANDS: &[(f64, &str)] = &[
    (16.0, "Severe Underweight"),
    (17.0, "Moderate Underweight"),
    (18.5, "Mild Underweight"),
    (21.0, "Lower Normal Weight"),
    (23.5, "Mid Normal Weight"),
    (25.0, "Upper Normal Weight"),
    (27.5, "Overweight Class I"),
    (30.0, "Overweight Class II"),
    (35.0, "Obesity Class I (Moderate)"),
    (40.0, "Obesity Class II (Severe)"),
];

const TOP_BAND: &str = "Obesity Class III (Very Severe)";

/// Age above which the normal and overweight narratives change tone.
const SENIOR_AGE: u32 = 65;

struct BodyFatModel {
    offset: f64,
    floor: f64,
    ceiling: f64,
    /// Exclusive upper bounds for extremely low, athletic, fitness, acceptable.
    /// Contiguous half-open ranges, so fractional values such as 13.5 land in
    /// a named range instead of falling through to "elevated".
    remark_bounds: [f64; 4],
    low_remark: &'static str,
}

const MALE: BodyFatModel = BodyFatModel {
    offset: 16.2,
    floor: 2.0,
    ceiling: 50.0,
    remark_bounds: [6.0, 14.0, 18.0, 25.0],
    low_remark: "Body fat percentage is extremely low, which can affect hormone function and overall health.",
};

const FEMALE: BodyFatModel = BodyFatModel {
    offset: 5.4,
    floor: 10.0,
    ceiling: 60.0,
    remark_bounds: [16.0, 21.0, 25.0, 32.0],
    low_remark: "Body fat percentage is extremely low, which can affect hormone function and reproductive health.",
};

fn model(sex: Sex) -> &'static BodyFatModel {
    match sex {
        Sex::Male => &MALE,
        Sex::Female => &FEMALE,
    }
}

/// Parse raw form values. Every failure is a validation error.
pub fn parse_input(weight: &str, height: &str, age: &str, sex: &str) -> Result<BiometricInput> {
    let weight: f64 = parse_number(weight, "Weight")?;
    let height: f64 = parse_number(height, "Height")?;
    let age: f64 = parse_number(age, "Age")?;

    if !(weight > 0.0 && height > 0.0 && age > 0.0) {
        return Err(non_positive());
    }
    if age.fract() != 0.0 || age > u32::MAX as f64 {
        return Err(AssessmentError::validation("Age must be a whole number of years."));
    }

    Ok(BiometricInput {
        weight,
        height,
        age: age as u32,
        sex: sex.parse()?,
    })
}

fn parse_number(raw: &str, field: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| AssessmentError::validation(format!("{} must be a number.", field)))?;
    if !value.is_finite() {
        return Err(AssessmentError::validation(format!("{} must be a number.", field)));
    }
    Ok(value)
}

fn non_positive() -> AssessmentError {
    AssessmentError::validation("Weight, height, and age must be positive numbers.")
}

/// Full assessment for validated or unvalidated input.
pub fn assess(input: &BiometricInput) -> Result<BiometricResult> {
    if !(input.weight > 0.0 && input.height > 0.0 && input.age > 0) {
        return Err(non_positive());
    }

    let bmi = bmi(input.weight, input.height);
    let body_fat = body_fat(bmi, input.age, input.sex);

    Ok(BiometricResult {
        bmi,
        category: band(bmi).to_string(),
        body_fat,
        risk: risk_narrative(bmi, input.age, input.sex, body_fat),
        age: input.age,
        sex: input.sex,
    })
}

/// Weight in kilograms over height in metres squared.
pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let metres = height_cm / 100.0;
    weight_kg / (metres * metres)
}

pub fn band(bmi: f64) -> &'static str {
    BANDS
        .iter()
        .find(|(upper, _)| bmi < *upper)
        .map(|(_, name)| *name)
        .unwrap_or(TOP_BAND)
}

/// Sex-specific linear estimate, clamped to a realistic range.
pub fn body_fat(bmi: f64, age: u32, sex: Sex) -> f64 {
    let m = model(sex);
    (1.20 * bmi + 0.23 * age as f64 - m.offset).clamp(m.floor, m.ceiling)
}

pub fn risk_narrative(bmi: f64, age: u32, sex: Sex, body_fat: f64) -> String {
    let senior = age > SENIOR_AGE;

    let base = if bmi < 16.0 {
        "Severe health risk due to significant underweight status. Possible malnutrition, weakened immune system, and hormonal disruptions."
    } else if bmi < 18.5 {
        "Increased risk associated with being underweight. May experience nutritional deficiencies, decreased muscle strength, and compromised immune function."
    } else if bmi < 25.0 {
        if senior {
            "Healthy weight range. For older adults, maintaining this BMI is beneficial for mobility and independence."
        } else {
            "Healthy weight range with lowest risk of weight-related health issues. Maintain regular physical activity and balanced nutrition."
        }
    } else if bmi < 30.0 {
        if senior {
            "Slightly elevated health risk. For older adults, a slightly higher BMI may be protective against frailty."
        } else {
            "Moderately increased risk of heart disease, type 2 diabetes, high blood pressure, and certain cancers. Consider gradual weight reduction through lifestyle changes."
        }
    } else if bmi < 35.0 {
        "High risk of cardiovascular disease, metabolic syndrome, sleep apnea, and joint problems. Medical evaluation recommended."
    } else if bmi < 40.0 {
        "Very high risk of serious health conditions including heart disease, stroke, diabetes, and certain cancers. Medical supervision strongly advised."
    } else {
        "Extremely high risk of severe health complications. Immediate medical consultation is strongly recommended for a comprehensive health assessment and intervention plan."
    };

    format!("{} {}", base, body_fat_remark(sex, body_fat))
}

fn body_fat_remark(sex: Sex, body_fat: f64) -> &'static str {
    let m = model(sex);
    let [low, athletic, fitness, acceptable] = m.remark_bounds;

    if body_fat < low {
        m.low_remark
    } else if body_fat < athletic {
        "Body fat percentage is in the athletic range."
    } else if body_fat < fitness {
        "Body fat percentage is in the fitness range."
    } else if body_fat < acceptable {
        "Body fat percentage is in the acceptable range."
    } else {
        "Body fat percentage is elevated, which may increase metabolic health risks."
    }
}

/// Human-readable summary used as the API `result` string.
pub fn summary(result: &BiometricResult) -> String {
    format!(
        "BMI: {:.2}\nCategory: {}\nEstimated body fat: {:.1}%\nRisk: {}",
        result.bmi, result.category, result.body_fat, result.risk
    )
}
