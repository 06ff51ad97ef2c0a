//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use fleksja_core::config::EMBEDDED_POLISH;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Writing label configuration template...");
        println!("  Output file: {}", self.output.display());

        std::fs::write(&self.output, EMBEDDED_POLISH)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the labels and their policies");
        println!("2. Validate your configuration:");
        println!("   fleksja validate -c {}", self.output.display());
        println!("3. Use it for enrichment:");
        println!(
            "   fleksja enrich -s original.txt -a anonymized.txt -d dictionary.tsv --labels {}",
            self.output.display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleksja_core::LabelConfig;
    use tempfile::TempDir;

    #[test]
    fn test_generated_file_is_a_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("labels.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
        };
        args.execute().unwrap();

        let config = LabelConfig::from_file(&output_path).unwrap();
        assert_eq!(config.metadata.code, "pl");
        assert_eq!(config.labels.len(), 7);
    }

    #[test]
    fn test_unwritable_destination() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("/nonexistent/dir/labels.toml"),
        };
        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("Failed to write to"));
    }
}
