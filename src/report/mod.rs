pub mod format;
pub mod json;
pub mod md;

use crate::error::ScorecardError;
use crate::types::report::{CriteriaReport, PricingReport, RankingReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Md,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "json" => Some(OutputFormat::Json),
            "md" => Some(OutputFormat::Md),
            _ => None,
        }
    }
}

pub fn render_ranking(
    report: &RankingReport<'_>,
    format: OutputFormat,
) -> Result<String, ScorecardError> {
    match format {
        OutputFormat::Json => json::ranking_to_json(report).map_err(ScorecardError::Json),
        OutputFormat::Md => Ok(md::ranking_to_markdown(report)),
    }
}

pub fn render_pricing(
    report: &PricingReport<'_, '_>,
    format: OutputFormat,
) -> Result<String, ScorecardError> {
    match format {
        OutputFormat::Json => json::pricing_to_json(report).map_err(ScorecardError::Json),
        OutputFormat::Md => Ok(md::pricing_to_markdown(report)),
    }
}

pub fn render_criteria(
    report: &CriteriaReport<'_>,
    format: OutputFormat,
) -> Result<String, ScorecardError> {
    match format {
        OutputFormat::Json => json::criteria_to_json(report).map_err(ScorecardError::Json),
        OutputFormat::Md => Ok(md::criteria_to_markdown(report)),
    }
}
