//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use fleksja_core::morph::Case;
use fleksja_core::LabelConfig;
use std::io::Write;
use std::path::PathBuf;

pub mod enrich;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Add case and gender to placeholders in an anonymized text
    Enrich(enrich::EnrichArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write the built-in label configuration to a file
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a label configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Enrich(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(&mut std::io::stdout().lock()),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List enriched placeholder labels and their policies
    Labels {
        /// Label configuration file (default: built-in Polish labels)
        #[arg(long, value_name = "FILE")]
        labels: Option<PathBuf>,
    },

    /// List grammatical cases with their tag codes and names
    Cases,
}

impl ListCommands {
    /// Print the listing to `out`
    pub fn execute(&self, out: &mut impl Write) -> Result<()> {
        match self {
            ListCommands::Labels { labels } => {
                let config = match labels {
                    Some(path) => LabelConfig::from_file(path)?,
                    None => LabelConfig::default(),
                };
                writeln!(
                    out,
                    "Labels ({}, {}):",
                    config.metadata.name, config.metadata.code
                )?;
                for rule in &config.labels {
                    writeln!(out, "  [{}]  {}", rule.name, rule.policy.as_str())?;
                }
            }
            ListCommands::Cases => {
                writeln!(out, "Cases (resolution order):")?;
                for case in Case::PRIORITY {
                    writeln!(
                        out,
                        "  {:<5} {:<13} {}",
                        case.code(),
                        case.english_name(),
                        case.polish_name()
                    )?;
                }
            }
        }
        Ok(())
    }
}
