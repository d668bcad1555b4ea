pub mod cli;
pub mod toml_config;

use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_path, Validate};
use toml_config::TomlConfig;

pub const DEFAULT_VENDORS_FILE: &str = "vendor_data.csv";
pub const DEFAULT_OUTPUT_PATH: &str = "./output";

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "vendor-planner")]
#[command(about = "Rank event vendors and estimate event cost from a local CSV")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Vendor CSV (name, event_type, city, price, rating)
    #[arg(long, global = true)]
    pub vendors: Option<String>,

    /// Directory for CSV exports
    #[arg(long, global = true)]
    pub output_path: Option<String>,

    /// Output format: table or json
    #[arg(long, global = true)]
    pub format: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Recommend the top vendors for an event type, city and budget
    Recommend {
        #[arg(long)]
        event_type: String,

        #[arg(long)]
        city: String,

        #[arg(long, allow_hyphen_values = true)]
        budget: f64,

        /// Write the recommended rows to <output-path>/recommendations.csv
        #[arg(long)]
        export: bool,
    },

    /// Estimate event cost and optionally judge a vendor quote
    Estimate {
        /// Comma-separated service names, e.g. venue,catering
        #[arg(long, value_delimiter = ',', required = true)]
        services: Vec<String>,

        #[arg(long, allow_hyphen_values = true, default_value_t = 150)]
        guests: i64,

        /// Basic, Premium or Luxe
        #[arg(long, default_value = "Premium")]
        tier: String,

        /// Vendor's quoted total
        #[arg(long, allow_hyphen_values = true)]
        quote: Option<f64>,

        /// Write the breakdown to <output-path>/cost_breakdown.csv
        #[arg(long)]
        export: bool,
    },

    /// Show the planning checklist for an event type
    Checklist {
        #[arg(long)]
        event_type: String,
    },

    /// List event types and cities in the vendor file, plus services and tiers
    Catalog,
}

/// Settings after merging defaults, the TOML file and command-line flags (in that order).
#[derive(Debug, Clone, PartialEq)]
pub struct PlannerConfig {
    pub vendors_file: String,
    pub output_path: String,
    pub output_format: OutputFormat,
    pub log_level: Option<String>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            vendors_file: DEFAULT_VENDORS_FILE.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            output_format: OutputFormat::Table,
            log_level: None,
        }
    }
}

impl PlannerConfig {
    pub fn from_toml(file: &TomlConfig) -> Result<Self> {
        file.validate()?;
        let mut config = Self::default();
        config.apply(
            file.vendors_file(),
            file.output_path(),
            file.output_format(),
        )?;
        config.log_level = file.log_level().map(str::to_lowercase);
        Ok(config)
    }

    /// Overrides whichever values are present.
    pub fn apply(
        &mut self,
        vendors_file: Option<&str>,
        output_path: Option<&str>,
        output_format: Option<&str>,
    ) -> Result<()> {
        if let Some(path) = vendors_file {
            self.vendors_file = path.to_string();
        }
        if let Some(path) = output_path {
            self.output_path = path.to_string();
        }
        if let Some(format) = output_format {
            self.output_format = OutputFormat::from_name(format).ok_or_else(|| {
                PlannerError::config(
                    "format",
                    format!(
                        "Unsupported format '{}'. Valid formats: {}",
                        format,
                        OutputFormat::NAMES.join(", ")
                    ),
                )
            })?;
        }
        Ok(())
    }

    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                Self::from_toml(&TomlConfig::from_file(path)?)?
            }
            None => Self::default(),
        };

        config.apply(
            cli.vendors.as_deref(),
            cli.output_path.as_deref(),
            cli.format.as_deref(),
        )?;
        config.validate()?;
        Ok(config)
    }
}

impl ConfigProvider for PlannerConfig {
    fn vendors_file(&self) -> &str {
        &self.vendors_file
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }
}

impl Validate for PlannerConfig {
    fn validate(&self) -> Result<()> {
        validate_path("vendors_file", &self.vendors_file)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.vendors_file(), "vendor_data.csv");
        assert_eq!(config.output_path(), "./output");
        assert_eq!(config.output_format(), OutputFormat::Table);
    }

    #[test]
    fn test_toml_values_then_overrides() {
        let file = TomlConfig::from_toml_str(
            "[data]\nvendors_file = \"a.csv\"\n[output]\nformat = \"json\"\n[logging]\nlevel = \"WARN\"\n",
        )
        .unwrap();
        let mut config = PlannerConfig::from_toml(&file).unwrap();
        assert_eq!(config.vendors_file(), "a.csv");
        assert_eq!(config.output_format(), OutputFormat::Json);
        assert_eq!(config.log_level.as_deref(), Some("warn"));

        config.apply(Some("b.csv"), Some("/tmp/out"), Some("table")).unwrap();
        assert_eq!(config.vendors_file(), "b.csv");
        assert_eq!(config.output_path(), "/tmp/out");
        assert_eq!(config.output_format(), OutputFormat::Table);
    }

    #[test]
    fn test_unknown_format_is_config_error() {
        let mut config = PlannerConfig::default();
        let err = config.apply(None, None, Some("yaml")).unwrap_err();
        assert!(matches!(err, PlannerError::ConfigError { .. }));
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_cli_subcommands() {
        let cli = CliConfig::parse_from([
            "vendor-planner",
            "--format",
            "json",
            "estimate",
            "--services",
            "venue,catering",
            "--guests",
            "-4",
            "--quote",
            "12000",
        ]);

        assert_eq!(cli.format.as_deref(), Some("json"));
        match cli.command {
            Command::Estimate {
                services,
                guests,
                tier,
                quote,
                export,
            } => {
                assert_eq!(services, vec!["venue", "catering"]);
                assert_eq!(guests, -4);
                assert_eq!(tier, "Premium");
                assert_eq!(quote, Some(12000.0));
                assert!(!export);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
