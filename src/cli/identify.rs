use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_catalog, ConfigurationInput, OutputFormat};
use crate::core::configuration::Configuration;
use crate::matching::engine::{MatchResult, MatchingConfig, MatchingEngine, DEFAULT_MIN_SCORE};

#[derive(Args)]
pub struct IdentifyArgs {
    #[command(flatten)]
    pub input: ConfigurationInput,

    /// Number of matches to show
    #[arg(short = 'n', long, default_value = "5")]
    pub limit: usize,

    /// Only report creatures scoring above this value (scores top out at 1.5)
    #[arg(long, default_value_t = DEFAULT_MIN_SCORE)]
    pub min_score: f64,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Execute identify subcommand
///
/// # Errors
///
/// Returns an error if the input or the catalog cannot be read.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: IdentifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let text = args.input.read()?;
    let candidate = Configuration::parse(&text);

    if verbose {
        eprintln!(
            "Parsed {} unit(s) from input, main unit has {} element(s)",
            candidate.unit_count(),
            candidate.main_unit().map_or(0, |u| u.len())
        );
    }

    let catalog = load_catalog(args.catalog.as_deref(), verbose)?;

    if catalog.is_empty() {
        eprintln!("Warning: Catalog is empty, no creatures to match against.");
        return Ok(());
    }

    let config = MatchingConfig {
        min_score: args.min_score,
        limit: args.limit,
    };
    let engine = MatchingEngine::with_config(&catalog, config);
    let matches = engine.find_matches(&candidate);

    if matches.is_empty() && !matches!(format, OutputFormat::Json) {
        println!("No creature accepts this configuration (min score {}).", args.min_score);
        return Ok(());
    }

    match format {
        OutputFormat::Text => print_text_results(&matches, verbose),
        OutputFormat::Json => print_json_results(&candidate, &matches)?,
        OutputFormat::Tsv => print_tsv_results(&matches),
    }

    Ok(())
}

fn print_text_results(matches: &[MatchResult], verbose: bool) {
    for (i, result) in matches.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        println!("\n#{} {}", i + 1, result.creature.display_name);
        println!("   ID: {}", result.creature.id);
        println!("   Score: {:.4}", result.score.best);
        if let Some(unit) = result.score.best_unit {
            println!(
                "   Best look: unit {} of {}",
                unit,
                result.score.unit_scores.len()
            );
        }
        if !result.creature.tags.is_empty() {
            println!("   Tags: {}", result.creature.tags.join(", "));
        }

        if verbose {
            for (unit, score) in result.score.unit_scores.iter().enumerate() {
                println!("     unit {unit}: {score:.4}");
            }
        }
    }
}

fn print_json_results(candidate: &Configuration, matches: &[MatchResult]) -> anyhow::Result<()> {
    let results: Vec<serde_json::Value> = matches
        .iter()
        .map(|m| {
            serde_json::json!({
                "creature": {
                    "id": m.creature.id.0,
                    "display_name": m.creature.display_name,
                    "tags": m.creature.tags,
                },
                "score": m.score,
            })
        })
        .collect();

    let output = serde_json::json!({
        "candidate": candidate.to_string(),
        "matches": results,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(matches: &[MatchResult]) {
    println!("rank\tid\tdisplay_name\tscore\tbest_unit\tunit_count");
    for (i, m) in matches.iter().enumerate() {
        println!(
            "{}\t{}\t{}\t{:.4}\t{}\t{}",
            i + 1,
            m.creature.id,
            m.creature.display_name,
            m.score.best,
            m.score
                .best_unit
                .map_or_else(String::new, |unit| unit.to_string()),
            m.score.unit_scores.len(),
        );
    }
}
