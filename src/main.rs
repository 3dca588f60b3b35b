mod cli;

use clap::Parser;
use scorecard::error::{Result, ScorecardError};
use scorecard::pricing::inputs::slider_violations;
use scorecard::pricing::overrides::{effective_quotes, TierOverrides};
use scorecard::report::OutputFormat;
use scorecard::types::config::ScorecardConfig;
use scorecard::types::dataset::EvalData;
use scorecard::types::pricing::PricingInputs;
use scorecard::types::ranking::Weights;
use scorecard::types::report::{
    CriteriaReport, DatasetMeta, Explanation, PricingReport, RankingReport, WeightChange,
};
use scorecard::{config, dataset, logging, pricing, rank, report};
use std::path::{Path, PathBuf};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const INVALID_DATASET: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    logging::init(cli.verbose, cli.quiet);
    tracing::info!("scorecard v{}", env!("CARGO_PKG_VERSION"));

    let root = match cli.config_root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };
    let cfg = config::load_config(&root)?.unwrap_or_default();

    match cli.command {
        cli::Commands::Rank(cmd) => {
            let path = dataset_path(&root, &cfg, cmd.dataset);
            let loaded = dataset::load(&path)?;
            let data = &loaded.data;
            let weights = parse_weights(data, &cmd.weights)?;

            let explanation = cmd
                .explain
                .as_deref()
                .map(|id| {
                    let platform = data
                        .platform(id)
                        .ok_or_else(|| ScorecardError::UnknownPlatform(id.to_string()))?;
                    Ok::<_, ScorecardError>(Explanation {
                        platform_id: &platform.id,
                        platform_name: &platform.name,
                        rows: rank::explain::explain(
                            platform,
                            &data.criteria,
                            &weights,
                            &data.score_labels,
                        ),
                    })
                })
                .transpose()?;

            let ranking_report = RankingReport {
                dataset: dataset_meta(&loaded),
                total_weight: weights.total(&data.criteria),
                default_total_weight: Weights::new().total(&data.criteria),
                changed_weights: weights
                    .changed(&data.criteria)
                    .into_iter()
                    .map(|(criterion, default_weight, weight)| WeightChange {
                        criterion_id: criterion.id,
                        short_label: &criterion.short_label,
                        default_weight,
                        weight,
                    })
                    .collect(),
                rankings: rank::rank(&data.platforms, &data.criteria, &weights),
                explanation,
            };

            let format = output_format(&cfg, cmd.format);
            println!("{}", report::render_ranking(&ranking_report, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Price(cmd) => {
            let path = dataset_path(&root, &cfg, cmd.dataset);
            let loaded = dataset::load(&path)?;
            let data = &loaded.data;

            let mut inputs = PricingInputs::from_sliders(&data.pricing.sliders);
            if let Some(users) = cmd.users {
                inputs.users = users;
            }
            if let Some(resources) = cmd.resources {
                inputs.resources = resources;
            }
            if let Some(runs) = cmd.runs {
                inputs.runs = runs;
            }
            let slider_warnings = slider_violations(&data.pricing.sliders, &inputs);
            for warning in &slider_warnings {
                tracing::warn!(
                    dimension = %warning.dimension,
                    value = warning.value,
                    "input outside slider range {}..={}",
                    warning.min,
                    warning.max
                );
            }

            let mut overrides = TierOverrides::new();
            for raw in &cmd.tiers {
                let (platform_id, tier_name) = cli::split_assignment(raw).ok_or_else(|| {
                    ScorecardError::InvalidArgument(format!("expected PLATFORM=TIER, got {raw}"))
                })?;
                overrides.insert_checked(&data.pricing, platform_id, tier_name)?;
            }

            let results = pricing::compute_all_results(&data.pricing, &data.platforms, &inputs);
            let pricing_report = PricingReport {
                dataset: dataset_meta(&loaded),
                inputs,
                show_all_tiers: cmd.all_tiers || cfg.show_all_tiers(),
                pricing: &data.pricing,
                quotes: effective_quotes(&results, &overrides),
                slider_warnings,
            };

            let format = output_format(&cfg, cmd.format);
            println!("{}", report::render_pricing(&pricing_report, format)?);

            if pricing_report.has_warnings() {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Criteria(cmd) => {
            let path = dataset_path(&root, &cfg, cmd.dataset);
            let loaded = dataset::load(&path)?;
            let criteria_report = CriteriaReport {
                groups: rank::category::group_by_category(&loaded.data.criteria),
                styles: &loaded.data.categories,
            };

            let format = output_format(&cfg, cmd.format);
            println!("{}", report::render_criteria(&criteria_report, format)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Validate(cmd) => {
            let files = dataset::discover(&cmd.path)?;
            if files.is_empty() {
                println!("validate: no dataset files found");
                return Ok(exit_code::WARNINGS);
            }

            let mut invalid = 0;
            for file in &files {
                match dataset::load(file) {
                    Ok(loaded) => println!(
                        "[OK] {} ({} criteria, {} platforms, sha256 {})",
                        file.display(),
                        loaded.data.criteria.len(),
                        loaded.data.platforms.len(),
                        loaded.fingerprint.get(..12).unwrap_or(&loaded.fingerprint)
                    ),
                    Err(e) => {
                        invalid += 1;
                        println!("[INVALID] {}: {}", file.display(), e);
                    }
                }
            }

            if invalid > 0 {
                Ok(exit_code::INVALID_DATASET)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn dataset_path(root: &Path, cfg: &ScorecardConfig, explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| root.join(cfg.dataset_path()))
}

fn output_format(cfg: &ScorecardConfig, explicit: Option<cli::ReportFormat>) -> OutputFormat {
    match explicit {
        Some(cli::ReportFormat::Json) => OutputFormat::Json,
        Some(cli::ReportFormat::Md) => OutputFormat::Md,
        None => cfg
            .report_format()
            .and_then(OutputFormat::parse)
            .unwrap_or(OutputFormat::Md),
    }
}

fn dataset_meta(loaded: &dataset::LoadedDataset) -> DatasetMeta<'_> {
    DatasetMeta {
        path: loaded.path.display().to_string(),
        fingerprint: &loaded.fingerprint,
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}

fn parse_weights(data: &EvalData, raw: &[String]) -> Result<Weights> {
    let mut weights = Weights::new();
    for assignment in raw {
        let (id, weight) = cli::split_assignment(assignment).ok_or_else(|| {
            ScorecardError::InvalidArgument(format!("expected ID=WEIGHT, got {assignment}"))
        })?;
        let id: u32 = id
            .parse()
            .map_err(|_| ScorecardError::InvalidArgument(format!("invalid criterion id {id}")))?;
        let weight: u32 = weight
            .parse()
            .map_err(|_| ScorecardError::InvalidArgument(format!("invalid weight {weight}")))?;
        let criterion = data
            .criterion(id)
            .ok_or(ScorecardError::UnknownCriterion(id))?;
        weights.set(criterion, weight)?;
    }
    Ok(weights)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
