use clap::Args;

use crate::cli::{ConfigurationInput, OutputFormat};
use crate::core::configuration::Configuration;
use crate::core::element::Element;

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: ConfigurationInput,
}

#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: InspectArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let text = args.input.read()?;
    let config = Configuration::parse(&text);

    if verbose {
        eprintln!("Read {} byte(s) of configuration text", text.len());
    }

    match format {
        OutputFormat::Text => print_text_inspection(&config),
        OutputFormat::Json => print_json_inspection(&config)?,
        OutputFormat::Tsv => print_tsv_inspection(&config),
    }

    Ok(())
}

fn equivalences_label(element: &Element) -> String {
    let inner: Vec<String> = element.inner_equivalences().map(|v| v.to_string()).collect();
    if inner.is_empty() {
        "-".to_string()
    } else {
        inner.join(",")
    }
}

fn print_text_inspection(config: &Configuration) {
    println!("Configuration ({} units)", config.unit_count());
    println!("Normalized: {config}");

    for (index, unit) in config.units().iter().enumerate() {
        let marker = if config.main_index() == Some(index) {
            " (main)"
        } else {
            ""
        };
        println!("\nUnit {index}{marker}: {} element(s)", unit.len());
        println!(
            "  {:>8} {:>18} {:>12} {:>8} Equivalences",
            "Category", "Position", "Orientation", "Oriented"
        );
        println!("  {}", "-".repeat(70));
        for element in unit.elements() {
            println!(
                "  {:>8} {:>18} {:>12} {:>8} {}",
                element.category(),
                element.position().to_string(),
                element.orientation(),
                element.consider_orientation(),
                equivalences_label(element)
            );
        }
    }
}

fn print_json_inspection(config: &Configuration) -> anyhow::Result<()> {
    let units: Vec<serde_json::Value> = config
        .units()
        .iter()
        .enumerate()
        .map(|(index, unit)| {
            let elements: Vec<serde_json::Value> = unit
                .elements()
                .iter()
                .map(|e| {
                    serde_json::json!({
                        "category": e.category(),
                        "position": e.position(),
                        "orientation": e.orientation(),
                        "consider_orientation": e.consider_orientation(),
                        "orientation_equivalences": e.orientation_equivalences(),
                    })
                })
                .collect();
            serde_json::json!({
                "index": index,
                "main": config.main_index() == Some(index),
                "normalized": unit.to_string(),
                "elements": elements,
            })
        })
        .collect();

    let output = serde_json::json!({
        "normalized": config.to_string(),
        "main_unit": config.main_index(),
        "units": units,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_inspection(config: &Configuration) {
    println!("unit\tmain\tcategory\tx\ty\torientation\tconsider_orientation\tequivalences");
    for (index, unit) in config.units().iter().enumerate() {
        let main = config.main_index() == Some(index);
        for element in unit.elements() {
            let position = element.position();
            println!(
                "{index}\t{main}\t{}\t{}\t{}\t{}\t{}\t{}",
                element.category(),
                position.x,
                position.y,
                element.orientation(),
                element.consider_orientation(),
                equivalences_label(element)
            );
        }
    }
}
