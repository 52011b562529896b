//! Instruction templates for remote assessments

use crate::models::ProductCategory;

/// Feature a remote completion is issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    SymptomCheck,
    ProductAnalysis,
    ReportAnalysis,
}

impl Feature {
    /// Output token cap sent with the request.
    pub fn max_tokens(self) -> u32 {
        match self {
            Feature::SymptomCheck => 300,
            Feature::ProductAnalysis => 600,
            Feature::ReportAnalysis => 1500,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Feature::SymptomCheck => "symptom_check",
            Feature::ProductAnalysis => "product_analysis",
            Feature::ReportAnalysis => "report_analysis",
        }
    }
}

pub fn symptom_prompt(symptoms: &str) -> String {
    format!(
        r#"Based on the following symptoms, provide a brief assessment:

{}

Format your response with:
1. A summary of the symptoms
2. Urgency level (Mild, Moderate, or Severe)
3. A recommendation"#,
        symptoms.trim()
    )
}

pub fn product_prompt(product: &str, category: ProductCategory, region: &str) -> String {
    format!(
        r#"Please analyze the health aspects of the following {category} product available in {region}:

{product}

Format your response as follows:
1. A brief description of the product
2. Health Rating (Healthy, Moderate, or Less Healthy)
3. Potential health concerns or ingredients to be aware of
4. Healthier alternatives that are SPECIFICALLY AVAILABLE IN {region_upper}

IMPORTANT: When suggesting alternatives, ONLY recommend products that are commonly available in the {region} market.
Focus on brands from {region}, products sold in local supermarkets/stores, or traditional alternatives from {region}."#,
        category = category,
        region = region,
        product = product.trim(),
        region_upper = region.to_uppercase(),
    )
}

pub fn report_prompt(report_text: &str) -> String {
    format!(
        r#"Please review the following medical report text and explain it to a patient in plain language:

{}

Format your response as follows:
1. Key findings
2. Values outside their reference ranges, if any
3. A plain-language explanation of what the findings may mean
4. Questions the patient should ask their doctor

Do not provide a diagnosis. Remind the patient to discuss the report with a qualified healthcare professional."#,
        report_text.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_caps() {
        assert_eq!(Feature::SymptomCheck.max_tokens(), 300);
        assert_eq!(Feature::ProductAnalysis.max_tokens(), 600);
        assert_eq!(Feature::ReportAnalysis.max_tokens(), 1500);
    }

    #[test]
    fn test_product_prompt_mentions_region_and_category() {
        let prompt = product_prompt("  Maggi noodles ", ProductCategory::Food, "India");
        assert!(prompt.contains("following food product available in India"));
        assert!(prompt.contains("\nMaggi noodles\n"));
        assert!(prompt.contains("SPECIFICALLY AVAILABLE IN INDIA"));
    }

    #[test]
    fn test_symptom_prompt_embeds_input() {
        let prompt = symptom_prompt("sore throat");
        assert!(prompt.contains("sore throat"));
        assert!(prompt.contains("Urgency level (Mild, Moderate, or Severe)"));
    }
}
