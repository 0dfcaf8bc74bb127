use clap::ValueEnum;

use crate::error::ChartError;

/// Output format for the exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// Nested JSON in the chart schema.
    #[default]
    Json,
    /// One row per progress item.
    Csv,
    /// Indented text outline.
    Tree,
}

/// Runtime configuration for an export run.
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    /// Output format.
    pub format: ExportFormat,
    /// Pretty-print JSON output. Only meaningful for [`ExportFormat::Json`].
    pub pretty: bool,
    /// Include derived node ids in CSV and tree output.
    pub with_ids: bool,
}

impl ExportConfig {
    /// Reject flag combinations that have no effect for the chosen format.
    pub fn validate(&self) -> Result<(), ChartError> {
        if self.pretty && self.format != ExportFormat::Json {
            return Err(ChartError::Config(format!(
                "--pretty only applies to json output, not {:?}",
                self.format
            )));
        }
        if self.with_ids && self.format == ExportFormat::Json {
            return Err(ChartError::Config(
                "--ids only applies to csv and tree output".to_string(),
            ));
        }
        Ok(())
    }
}
