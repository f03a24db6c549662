//! Assess a child's nutritional status from a JSON measurement file.
//!
//! Usage: cargo run --features cli --bin assess_child -- [--json] [--cohort] [--config FILE] [PATH]
//!
//! Reads stdin when PATH is omitted or "-". With `--cohort` the input is a
//! JSON array of measurements and a prevalence summary is printed.
//! `--config` (or `NUTRITION_CONFIG`) may point at a cutoff configuration file.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use child_nutrition_rust::formatters::{JsonFormatter, MarkdownFormatter};
use child_nutrition_rust::guidance::FeedingBand;
use child_nutrition_rust::assessment::normalize_age_to_months;
use child_nutrition_rust::{
    screen_cohort, AssessmentConfig, Assessor, ChildMeasurement, Condition, NutritionalStatus,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "assess_child")]
#[command(about = "Classify child nutritional status from anthropometric measurements", long_about = None)]
struct Args {
    /// Print JSON instead of markdown
    #[arg(long)]
    json: bool,

    /// Input is a JSON array of measurements; print a prevalence summary
    #[arg(long)]
    cohort: bool,

    /// Cutoff configuration file
    #[arg(long, env = "NUTRITION_CONFIG")]
    config: Option<PathBuf>,

    /// Measurement JSON file ('-' or omitted for stdin)
    path: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "child_nutrition_rust=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            AssessmentConfig::load(path)?
        }
        None => AssessmentConfig::default(),
    };
    let assessor = Assessor::with_config(config)?;

    let input = read_input(args.path.as_deref())?;

    if args.cohort {
        let measurements: Vec<ChildMeasurement> =
            serde_json::from_str(&input).with_context(|| "Failed to parse cohort JSON array")?;
        run_cohort(&assessor, &measurements, args.json)
    } else {
        let measurement: ChildMeasurement =
            serde_json::from_str(&input).with_context(|| "Failed to parse measurement JSON")?;
        run_single(&assessor, &measurement, args.json)
    }
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        None => read_stdin(),
        Some(path) if path == Path::new("-") => read_stdin(),
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read measurement file: {}", path.display())),
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .with_context(|| "Failed to read measurement from stdin")?;
    Ok(buf)
}

fn run_single(assessor: &Assessor, measurement: &ChildMeasurement, as_json: bool) -> Result<()> {
    let result = assessor.assess(measurement)?;

    if as_json {
        println!("{}", JsonFormatter::format(&result)?);
        return Ok(());
    }

    println!("{}", MarkdownFormatter::format(&result));

    let age_in_months = normalize_age_to_months(measurement.age, measurement.age_unit);
    let band = FeedingBand::for_age(age_in_months);
    println!("## Feeding Guidance ({})\n", band.display_text());
    for line in band.guidance() {
        println!("- {}", line);
    }
    Ok(())
}

fn run_cohort(assessor: &Assessor, measurements: &[ChildMeasurement], as_json: bool) -> Result<()> {
    let report = screen_cohort(assessor, measurements);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report.summary)?);
        return Ok(());
    }

    let summary = &report.summary;
    println!("# Cohort Screening\n");
    println!("**Assessed:** {}  ", summary.assessed);
    println!("**Rejected:** {}\n", summary.rejected);

    println!("| Condition | Count | Prevalence |");
    println!("|-----------|-------|------------|");
    for condition in [
        Condition::SevereAcuteMalnutrition,
        Condition::ModerateAcuteMalnutrition,
        Condition::Stunted,
        Condition::SeverelyStunted,
        Condition::Underweight,
        Condition::OverweightObese,
        Condition::Normal,
    ] {
        println!(
            "| {} | {} | {:.1}% |",
            condition.label(),
            summary.count(condition),
            summary.prevalence(condition)
        );
    }

    println!("\n**Primary status**\n");
    for status in [
        NutritionalStatus::SevereAcuteMalnutrition,
        NutritionalStatus::ModerateAcuteMalnutrition,
        NutritionalStatus::OverweightObese,
        NutritionalStatus::Normal,
    ] {
        println!("- {}: {}", status, summary.status_count(status));
    }
    Ok(())
}
