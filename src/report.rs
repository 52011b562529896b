//! Report Renderer
//!
//! Plain-text reports with fixed headers and `- ` bullets. `parse` reads a
//! rendered report back into its tier, concern and alternative lists.

use crate::models::AssessmentReport;

pub const MEDICAL_DISCLAIMER: &str =
    "Note: This is an AI-generated assessment and should not replace professional medical advice.";

const BULLET: &str = "- ";

/// Section labels for one kind of report.
#[derive(Debug, Clone)]
pub struct ReportLayout {
    pub preamble: Option<String>,
    pub subject_label: String,
    pub tier_label: String,
    pub concerns_header: String,
    pub alternatives_header: String,
}

impl ReportLayout {
    pub fn symptoms() -> Self {
        Self {
            preamble: Some("Based on your symptoms:".to_string()),
            subject_label: "Reported".to_string(),
            tier_label: "Urgency level".to_string(),
            concerns_header: "Symptoms:".to_string(),
            alternatives_header: "Recommendations:".to_string(),
        }
    }

    pub fn product(region: &str) -> Self {
        Self {
            preamble: None,
            subject_label: "Product".to_string(),
            tier_label: "Health Rating".to_string(),
            concerns_header: "Potential Concerns:".to_string(),
            alternatives_header: format!("Healthier Alternatives (Available in {}):", region),
        }
    }
}

/// Tier and lists recovered from a rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReport {
    pub tier: String,
    pub concerns: Vec<String>,
    pub alternatives: Vec<String>,
}

/// Items are kept on one line each so the bullet format stays unambiguous.
fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn render(report: &AssessmentReport, layout: &ReportLayout) -> String {
    let mut sections: Vec<String> = Vec::with_capacity(6);

    if let Some(preamble) = &layout.preamble {
        sections.push(preamble.clone());
    }

    sections.push(format!(
        "{}: {}\n{}: {}",
        layout.subject_label,
        single_line(&report.subject),
        layout.tier_label,
        report.tier
    ));

    for (header, items) in [
        (&layout.concerns_header, &report.concerns),
        (&layout.alternatives_header, &report.alternatives),
    ] {
        let mut section = header.clone();
        for item in items {
            section.push('\n');
            section.push_str(BULLET);
            section.push_str(&single_line(item));
        }
        sections.push(section);
    }

    if let Some(disclaimer) = &report.disclaimer {
        sections.push(disclaimer.clone());
    }

    let mut out = sections.join("\n\n");
    out.push('\n');
    out
}

/// Recover tier, concerns and alternatives. `None` if a header is missing.
pub fn parse(text: &str, layout: &ReportLayout) -> Option<ParsedReport> {
    let tier_prefix = format!("{}: ", layout.tier_label);
    let tier = text
        .lines()
        .find_map(|line| line.strip_prefix(tier_prefix.as_str()))?
        .trim()
        .to_string();

    Some(ParsedReport {
        tier,
        concerns: bullets_under(text, &layout.concerns_header)?,
        alternatives: bullets_under(text, &layout.alternatives_header)?,
    })
}

fn bullets_under(text: &str, header: &str) -> Option<Vec<String>> {
    let mut lines = text.lines().skip_while(|line| line.trim_end() != header);
    lines.next()?;

    Some(
        lines
            .map_while(|line| line.strip_prefix(BULLET))
            .map(|item| item.to_string())
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AssessmentReport {
        AssessmentReport {
            subject: "Lay's Classic Chips".to_string(),
            tier: "Less Healthy".to_string(),
            concerns: vec!["High in processed ingredients".into(), "Low in essential nutrients".into()],
            alternatives: vec!["Thinnai (Fox Nuts/Makhana)".into(), "Slurrp Farm Millet Puffs".into()],
            disclaimer: None,
        }
    }

    #[test]
    fn test_product_layout_text() {
        let text = render(&sample(), &ReportLayout::product("India"));
        assert!(text.starts_with("Product: Lay's Classic Chips\nHealth Rating: Less Healthy\n\n"));
        assert!(text.contains("Healthier Alternatives (Available in India):\n- Thinnai (Fox Nuts/Makhana)\n"));
    }

    #[test]
    fn test_render_then_parse_recovers_lists() {
        let report = sample();
        let layout = ReportLayout::product("India");
        let parsed = parse(&render(&report, &layout), &layout).unwrap();
        assert_eq!(parsed.tier, report.tier);
        assert_eq!(parsed.concerns, report.concerns);
        assert_eq!(parsed.alternatives, report.alternatives);
    }

    #[test]
    fn test_symptom_report_carries_disclaimer() {
        let report = AssessmentReport {
            subject: "chest pain\nand dizziness".to_string(),
            tier: "Severe".to_string(),
            concerns: vec!["dizziness".into()],
            alternatives: vec!["Please seek immediate medical attention".into()],
            disclaimer: Some(MEDICAL_DISCLAIMER.to_string()),
        };
        let layout = ReportLayout::symptoms();
        let text = render(&report, &layout);

        assert!(text.starts_with("Based on your symptoms:\n\nReported: chest pain and dizziness\n"));
        assert!(text.trim_end().ends_with(MEDICAL_DISCLAIMER));

        let parsed = parse(&text, &layout).unwrap();
        assert_eq!(parsed.tier, "Severe");
        assert_eq!(parsed.concerns, vec!["dizziness"]);
        assert_eq!(parsed.alternatives, vec!["Please seek immediate medical attention"]);
    }

    #[test]
    fn test_parse_rejects_foreign_text() {
        assert!(parse("hello world", &ReportLayout::symptoms()).is_none());
    }
}
