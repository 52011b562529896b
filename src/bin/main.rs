//! One-shot local assessments from the command line.
//!
//! assess symptoms <text...>
//! assess product <food|personal-care> <name...>
//! assess bmi <weight-kg> <height-cm> <age> <male|female>

use health_assessment_service::{
    assessment::{product_report, symptom_report},
    biometrics,
    catalog::INDIA,
    report::{self, ReportLayout},
    ClassificationInput, ProductCategory,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "usage:
  assess symptoms <text...>
  assess product <food|personal-care> <name...>
  assess bmi <weight-kg> <height-cm> <age> <male|female>";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };

    let output = match command.as_str() {
        "symptoms" if !rest.is_empty() => {
            let input = ClassificationInput::new(rest.join(" "), None);
            report::render(&symptom_report(&input), &ReportLayout::symptoms())
        }
        "product" if rest.len() >= 2 => {
            let category: ProductCategory = rest[0].parse()?;
            let input = ClassificationInput::new(rest[1..].join(" "), Some(category));
            report::render(&product_report(&input, &INDIA), &ReportLayout::product(INDIA.region))
        }
        "bmi" if rest.len() == 4 => {
            let input = biometrics::parse_input(&rest[0], &rest[1], &rest[2], &rest[3])?;
            let result = biometrics::assess(&input)?;
            info!(bmi = result.bmi, "BMI calculated");
            biometrics::summary(&result)
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    println!("{}", output);
    Ok(())
}
