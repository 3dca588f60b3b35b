use crate::error::ScorecardError;
use serde::Deserialize;

pub const DEFAULT_DATASET: &str = "evaluation.json";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScorecardConfig {
    pub dataset: Option<DatasetConfig>,
    pub report: Option<ReportConfig>,
    pub pricing: Option<PricingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

fn default_dataset_path() -> String {
    DEFAULT_DATASET.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub show_all_tiers: bool,
}

impl ScorecardConfig {
    pub fn dataset_path(&self) -> &str {
        self.dataset
            .as_ref()
            .map(|dataset| dataset.path.as_str())
            .unwrap_or(DEFAULT_DATASET)
    }

    pub fn report_format(&self) -> Option<&str> {
        self.report
            .as_ref()
            .and_then(|report| report.format.as_deref())
    }

    pub fn show_all_tiers(&self) -> bool {
        self.pricing
            .as_ref()
            .map(|pricing| pricing.show_all_tiers)
            .unwrap_or(false)
    }

    pub fn validate(&self) -> Result<(), ScorecardError> {
        if self.dataset_path().trim().is_empty() {
            return Err(ScorecardError::ConfigParse(
                "dataset.path cannot be empty".to_string(),
            ));
        }

        if let Some(format) = self.report_format() {
            if !matches!(format, "md" | "json") {
                return Err(ScorecardError::ConfigParse(format!(
                    "unsupported report.format: {format}"
                )));
            }
        }

        Ok(())
    }
}
