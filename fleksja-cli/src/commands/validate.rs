//! Validate command implementation

use anyhow::Result;
use clap::Args;
use fleksja_core::LabelConfig;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to label configuration file to validate
    #[arg(short = 'c', long, value_name = "FILE", required = true)]
    pub label_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!(
            "Validating label configuration: {}",
            self.label_config.display()
        );

        match LabelConfig::from_file(&self.label_config) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Code: {}", config.metadata.code);
                println!("  Name: {}", config.metadata.name);
                println!("  Labels: {}", config.label_names().collect::<Vec<_>>().join(", "));
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
