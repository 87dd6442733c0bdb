use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_catalog, OutputFormat};
use crate::core::configuration::Configuration;
use crate::core::types::CreatureId;
use crate::matching::scoring::MatchScore;

#[derive(Args)]
pub struct CompareArgs {
    /// Judging configuration string
    #[arg(required = true)]
    pub input_a: String,

    /// Judged configuration string, or creature ID from catalog
    #[arg(required = true)]
    pub input_b: String,

    /// Treat second argument as a creature ID from the catalog
    #[arg(long)]
    pub reference: bool,

    /// Also report the comparison in the other direction
    #[arg(long)]
    pub symmetric: bool,

    /// Path to custom catalog file (creatures and compatibility table)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CompareArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = load_catalog(args.catalog.as_deref(), verbose)?;

    // Trimmed the same way as ConfigurationInput::read
    let input_a = args.input_a.trim();
    let input_b = args.input_b.trim();

    let config_a = Configuration::parse(input_a);

    let config_b = if args.reference {
        let id = CreatureId::new(input_b);
        let creature = catalog
            .get(&id)
            .ok_or_else(|| anyhow::anyhow!("Creature '{}' not found in catalog", input_b))?;
        creature.configuration.clone()
    } else {
        Configuration::parse(input_b)
    };

    if verbose {
        eprintln!("Input A: {} unit(s)", config_a.unit_count());
        eprintln!("Input B: {} unit(s)", config_b.unit_count());
    }

    let forward = config_a.compare_detailed(&config_b, &catalog.compatibility);
    let backward = args
        .symmetric
        .then(|| config_b.compare_detailed(&config_a, &catalog.compatibility));

    match format {
        OutputFormat::Text => print_text_comparison(&args, &forward, backward.as_ref()),
        OutputFormat::Json => print_json_comparison(&args, &forward, backward.as_ref())?,
        OutputFormat::Tsv => print_tsv_comparison(&forward, backward.as_ref()),
    }

    Ok(())
}

fn print_text_comparison(args: &CompareArgs, forward: &MatchScore, backward: Option<&MatchScore>) {
    println!("Comparison Results");
    println!("{}", "=".repeat(60));

    println!("\nInput A: {}", args.input_a);
    if args.reference {
        println!("Input B: creature '{}'", args.input_b);
    } else {
        println!("Input B: {}", args.input_b);
    }

    print_text_score("A judging B", forward);
    if let Some(score) = backward {
        print_text_score("B judging A", score);
    }
}

fn print_text_score(label: &str, score: &MatchScore) {
    println!("\n{label}:");
    if !score.candidate_has_main {
        println!("  Judged configuration has no main unit");
    }
    for (unit, value) in score.unit_scores.iter().enumerate() {
        println!("  Unit {unit}: {value:.4}");
    }
    println!("  Score: {:.4}", score.best);
}

fn print_json_comparison(
    args: &CompareArgs,
    forward: &MatchScore,
    backward: Option<&MatchScore>,
) -> anyhow::Result<()> {
    let mut output = serde_json::json!({
        "input_a": args.input_a,
        "input_b": args.input_b,
        "reference": args.reference,
        "score": forward,
    });
    if let Some(score) = backward {
        output["reverse_score"] = serde_json::to_value(score)?;
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_comparison(forward: &MatchScore, backward: Option<&MatchScore>) {
    println!("direction\tscore\tbest_unit\tunit_count\tcandidate_has_main");
    print_tsv_row("forward", forward);
    if let Some(score) = backward {
        print_tsv_row("reverse", score);
    }
}

fn print_tsv_row(direction: &str, score: &MatchScore) {
    println!(
        "{direction}\t{:.4}\t{}\t{}\t{}",
        score.best,
        score
            .best_unit
            .map_or_else(String::new, |unit| unit.to_string()),
        score.unit_scores.len(),
        score.candidate_has_main,
    );
}
