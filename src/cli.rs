use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "scorecard",
    version,
    about = "Weighted platform ranking and tiered pricing estimates"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding scorecard.toml (defaults to the current directory)
    #[arg(long, global = true)]
    pub config_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank platforms under the given criterion weights
    Rank(RankCommand),
    /// Estimate each platform's monthly cost for the given usage
    Price(PriceCommand),
    /// List criteria grouped by category
    Criteria(CriteriaCommand),
    /// Check one dataset file or every *.json file in a directory
    Validate(ValidateCommand),
}

#[derive(Args)]
pub struct RankCommand {
    /// Evaluation dataset (defaults to dataset.path from config)
    pub dataset: Option<PathBuf>,
    /// Override a criterion weight, as CRITERION_ID=WEIGHT
    #[arg(short, long = "weight", value_name = "ID=WEIGHT")]
    pub weights: Vec<String>,
    /// Show the per-criterion breakdown for a platform id
    #[arg(long, value_name = "PLATFORM")]
    pub explain: Option<String>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct PriceCommand {
    /// Evaluation dataset (defaults to dataset.path from config)
    pub dataset: Option<PathBuf>,
    #[arg(long)]
    pub users: Option<u32>,
    #[arg(long)]
    pub resources: Option<u32>,
    #[arg(long)]
    pub runs: Option<u32>,
    /// Force a tier for a platform, as PLATFORM=TIER
    #[arg(short, long = "tier", value_name = "PLATFORM=TIER")]
    pub tiers: Vec<String>,
    /// Show every tier with its cost breakdown
    #[arg(long)]
    pub all_tiers: bool,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct CriteriaCommand {
    pub dataset: Option<PathBuf>,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
}

#[derive(Args)]
pub struct ValidateCommand {
    pub path: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

/// Split `KEY=VALUE`, trimming both sides.
pub fn split_assignment(raw: &str) -> Option<(&str, &str)> {
    let (key, value) = raw.split_once('=')?;
    let (key, value) = (key.trim(), value.trim());
    (!key.is_empty() && !value.is_empty()).then_some((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_assignment_requires_both_sides() {
        assert_eq!(split_assignment("3=5"), Some(("3", "5")));
        assert_eq!(split_assignment(" alpha = Team Plus "), Some(("alpha", "Team Plus")));
        assert_eq!(split_assignment("alpha"), None);
        assert_eq!(split_assignment("=5"), None);
        assert_eq!(split_assignment("3="), None);
    }
}
