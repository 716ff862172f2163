// Copyright 2025 Sushanth (https://github.com/sushanthpy)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Medatlas CLI
//!
//! Command-line access to the muscular, occupational medicine and safety
//! topic stores.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use medatlas_content::{Catalog, StoreKind, StoreView};
use medatlas_core::{ComplexityLevel, RecordSummary, StoreConfig, NO_EXPLANATION};
use medatlas_index::DanglingReference;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, Level};

#[derive(Parser)]
#[command(name = "medatlas")]
#[command(about = "Medatlas - anatomy and occupational health content", long_about = None)]
struct Cli {
    /// Store to query
    #[arg(short, long, global = true, default_value = "muscular")]
    store: StoreKind,

    /// Store configuration file (TOML)
    #[arg(short, long, global = true, env = "MEDATLAS_CONFIG")]
    config: Option<PathBuf>,

    /// Verbose mode
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output as JSON (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every record in the store
    List,

    /// Show a record by id
    Get {
        /// Record id
        id: String,
    },

    /// Case-insensitive substring search
    Search {
        /// Search text; empty matches everything
        query: String,

        /// Restrict to these categories
        #[arg(long = "category")]
        categories: Vec<String>,
    },

    /// Records in any of the given categories
    Filter {
        /// Category names, e.g. shoulder-girdle
        #[arg(required = true)]
        categories: Vec<String>,
    },

    /// Categories present in the store
    Categories,

    /// Record count per category
    Counts,

    /// Look up a record by name, alternate or localized name
    Name {
        /// Display, Latin or localized name (case-insensitive)
        name: String,
    },

    /// Records referenced by a record
    Related {
        /// Record id
        id: String,
    },

    /// Leveled explanation for a record
    Explain {
        /// Record id
        id: String,

        /// Complexity level (1-5)
        #[arg(short, long, default_value = "1")]
        level: u8,
    },

    /// Store statistics
    Stats,

    /// Report dangling cross-references in every store
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so JSON output stays parseable
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let config = StoreConfig::load(cli.config.clone()).context("Failed to load store config")?;
    let catalog = Catalog::load(&config).context("Failed to build content stores")?;
    debug!(store = %cli.store, "Running command");

    run(&cli, &catalog)
}

fn run(cli: &Cli, catalog: &Catalog) -> Result<()> {
    let view = catalog.view(cli.store);

    match &cli.command {
        Commands::List => {
            let records = view.find_summaries(None, None)?;
            print_summaries(&records, cli.json)?;
        }

        Commands::Get { id } => match view.get(id)? {
            Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
            None => bail!("No record '{}' in the {} store", id, view.name()),
        },

        Commands::Search { query, categories } => {
            let categories = (!categories.is_empty()).then_some(categories.as_slice());
            let records = view.find_summaries(Some(query.as_str()), categories)?;
            print_summaries(&records, cli.json)?;
        }

        Commands::Filter { categories } => {
            let records = view.find_summaries(None, Some(categories.as_slice()))?;
            print_summaries(&records, cli.json)?;
        }

        Commands::Categories => {
            let categories = view.categories();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
            } else {
                for category in categories {
                    println!("{}", category);
                }
            }
        }

        Commands::Counts => {
            let counts = view.counts();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&counts)?);
            } else {
                for count in counts {
                    println!("{:<24} {}", count.category, count.count);
                }
            }
        }

        Commands::Name { name } => match view.get_by_name(name)? {
            Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
            None => bail!("No record named '{}' in the {} store", name, view.name()),
        },

        Commands::Related { id } => {
            if !view.contains(id) {
                bail!("No record '{}' in the {} store", id, view.name());
            }
            print_summaries(&view.related(id), cli.json)?;
        }

        Commands::Explain { id, level } => {
            let level = ComplexityLevel::new(*level)?;
            let text = explain(view, id, level)?;
            if cli.json {
                let body = serde_json::json!({ "id": id, "level": level, "text": text });
                println!("{}", serde_json::to_string_pretty(&body)?);
            } else {
                println!("{}", text);
            }
        }

        Commands::Stats => {
            let stats = view.stats();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                println!("Store: {}", stats.store);
                println!("  Records: {}", stats.total);
                println!("  Indexed names: {}", stats.indexed_names);
                println!("  Dangling references: {}", stats.dangling_references);
                for (category, count) in &stats.by_category {
                    println!("  {:<22} {}", category, count);
                }
            }
        }

        Commands::Validate => {
            let reports: Vec<ValidationReport> = StoreKind::ALL
                .iter()
                .map(|kind| ValidationReport::new(catalog.view(*kind)))
                .collect();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&reports)?);
            } else {
                for report in &reports {
                    if !report.validated {
                        println!("{}: reference validation disabled", report.store);
                        continue;
                    }
                    println!("{}: {} dangling", report.store, report.dangling.len());
                    for reference in report.dangling {
                        println!("  {} -> {}", reference.source_id, reference.target_id);
                    }
                }
            }
        }
    }

    Ok(())
}

fn explain<'a>(view: &'a dyn StoreView, id: &str, level: ComplexityLevel) -> Result<&'a str> {
    if !view.contains(id) {
        bail!("No record '{}' in the {} store", id, view.name());
    }
    Ok(view.leveled_text(id, level).unwrap_or(NO_EXPLANATION))
}

#[derive(Serialize)]
struct ValidationReport<'a> {
    store: &'static str,
    validated: bool,
    dangling: &'a [DanglingReference],
}

impl<'a> ValidationReport<'a> {
    fn new(view: &'a dyn StoreView) -> Self {
        Self {
            store: view.name(),
            validated: view.config().validate_cross_references,
            dangling: view.dangling_references(),
        }
    }
}

fn print_summaries(records: &[RecordSummary], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
        return Ok(());
    }

    for record in records {
        println!("{:<36} {:<40} [{}]", record.id, record.name, record.category);
    }
    println!("{} record(s)", records.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_store_after_subcommand() {
        let cli = Cli::parse_from(["medatlas", "counts", "--store", "occupational", "--json"]);
        assert_eq!(cli.store, StoreKind::Occupational);
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::Counts));
    }

    #[test]
    fn test_unknown_store_rejected() {
        assert!(Cli::try_parse_from(["medatlas", "--store", "bones", "list"]).is_err());
    }

    #[test]
    fn test_explain_falls_back() {
        let catalog = Catalog::load(&StoreConfig::default()).unwrap();
        let level = ComplexityLevel::new(5).unwrap();

        let occupational = catalog.view(StoreKind::Occupational);
        assert_eq!(explain(occupational, "silicosis", level).unwrap(), NO_EXPLANATION);
        assert!(explain(occupational, "nonexistent-id", level).is_err());

        let muscular = catalog.view(StoreKind::Muscular);
        assert_ne!(explain(muscular, "diaphragm", level).unwrap(), NO_EXPLANATION);
    }

    #[test]
    fn test_validation_report_follows_config() {
        let catalog = Catalog::load(&StoreConfig::default()).unwrap();
        let report = ValidationReport::new(catalog.view(StoreKind::Topics));
        assert!(report.validated);
        assert!(!report.dangling.is_empty());

        let catalog = Catalog::load(&StoreConfig::permissive()).unwrap();
        let report = ValidationReport::new(catalog.view(StoreKind::Topics));
        assert!(!report.validated);
        assert!(report.dangling.is_empty());
    }

    #[test]
    fn test_related_unknown_id_fails() {
        let catalog = Catalog::load(&StoreConfig::default()).unwrap();
        let cli = Cli::parse_from(["medatlas", "related", "nonexistent-id"]);
        assert!(run(&cli, &catalog).is_err());
    }

    #[test]
    fn test_run_filter_with_unknown_category_fails() {
        let catalog = Catalog::load(&StoreConfig::default()).unwrap();
        let cli = Cli::parse_from(["medatlas", "filter", "cardiology"]);
        assert!(run(&cli, &catalog).is_err());
    }
}
