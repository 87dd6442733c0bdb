use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::CreatureCatalog;
use crate::cli::{load_catalog, OutputFormat};
use crate::core::types::CreatureId;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all creatures in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Only list creatures carrying this tag
        #[arg(long)]
        tag: Option<String>,
    },

    /// Show details of a specific creature
    Show {
        /// Creature ID
        #[arg(required = true)]
        id: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog as JSON
    Export {
        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog, tag } => {
            let catalog = load_catalog(catalog.as_deref(), verbose)?;
            run_list(&catalog, tag.as_deref(), format, verbose)
        }
        CatalogCommands::Show { id, catalog } => {
            let catalog = load_catalog(catalog.as_deref(), verbose)?;
            run_show(&catalog, &id, format)
        }
        CatalogCommands::Export { output, catalog } => {
            let catalog = load_catalog(catalog.as_deref(), verbose)?;
            run_export(&catalog, output)
        }
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

fn run_list(
    catalog: &CreatureCatalog,
    tag_filter: Option<&str>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let filtered: Vec<_> = catalog
        .creatures
        .iter()
        .filter(|c| {
            tag_filter.map_or(true, |tag| {
                c.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
            })
        })
        .collect();

    match format {
        OutputFormat::Text => {
            let id_width = filtered
                .iter()
                .map(|c| c.id.0.len())
                .max()
                .unwrap_or(2)
                .max(2);
            let name_width = filtered
                .iter()
                .map(|c| c.display_name.len().min(30))
                .max()
                .unwrap_or(4)
                .max(4);

            println!("Creature Catalog ({} creatures)\n", filtered.len());
            println!(
                "{:<id_w$} {:<name_w$} {:>5} {:>8}",
                "ID",
                "Name",
                "Looks",
                "Elements",
                id_w = id_width,
                name_w = name_width,
            );
            println!("{}", "-".repeat(id_width + name_width + 16));

            for c in &filtered {
                println!(
                    "{:<id_w$} {:<name_w$} {:>5} {:>8}",
                    c.id.0,
                    truncate(&c.display_name, name_width),
                    c.configuration.unit_count(),
                    c.element_count(),
                    id_w = id_width,
                    name_w = name_width,
                );
                if verbose && !c.tags.is_empty() {
                    println!("  └─ tags: {}", c.tags.join(", "));
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = filtered
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "id": c.id.0,
                        "display_name": c.display_name,
                        "unit_count": c.configuration.unit_count(),
                        "element_count": c.element_count(),
                        "tags": c.tags,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("id\tdisplay_name\tunit_count\telement_count\ttags");
            for c in &filtered {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    c.id.0,
                    c.display_name,
                    c.configuration.unit_count(),
                    c.element_count(),
                    c.tags.join(",")
                );
            }
        }
    }

    Ok(())
}

fn run_show(catalog: &CreatureCatalog, id: &str, format: OutputFormat) -> anyhow::Result<()> {
    let creature = catalog
        .get(&CreatureId::new(id))
        .ok_or_else(|| anyhow::anyhow!("Creature '{}' not found", id))?;

    match format {
        OutputFormat::Text => {
            println!("Creature: {}\n", creature.display_name);
            println!("ID:       {}", creature.id);
            println!("Looks:    {}", creature.configuration.unit_count());
            println!("Elements: {}", creature.element_count());

            if let Some(desc) = &creature.description {
                println!("\nDescription: {desc}");
            }

            if !creature.tags.is_empty() {
                println!("\nTags: {}", creature.tags.join(", "));
            }

            println!("\nLooks:");
            for (index, unit) in creature.configuration.units().iter().enumerate() {
                println!("  {index}: {unit}");
                for element in unit.elements() {
                    let part = catalog
                        .part(element.category())
                        .map_or("?", |p| p.name.as_str());
                    println!(
                        "     {:<8} category {:<4} at {} facing {}",
                        part,
                        element.category(),
                        element.position(),
                        element.orientation()
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&creature)?);
        }
        OutputFormat::Tsv => {
            println!("unit\tconfiguration");
            for (index, unit) in creature.configuration.units().iter().enumerate() {
                println!("{index}\t{unit}");
            }
        }
    }

    Ok(())
}

fn run_export(catalog: &CreatureCatalog, output: Option<PathBuf>) -> anyhow::Result<()> {
    let json = catalog.to_json()?;

    if let Some(output) = output {
        std::fs::write(&output, json)?;
        println!(
            "Exported {} creatures to {}",
            catalog.len(),
            output.display()
        );
    } else {
        println!("{json}");
    }

    Ok(())
}
