use super::format::{format_cost, format_monthly, format_rank_delta, group_thousands};
use crate::pricing::breakdown::cost_breakdown;
use crate::pricing::overrides::cost_spread;
use crate::pricing::round_cost;
use crate::types::pricing::{Dimension, PricingInputs, PricingTier};
use crate::types::report::{CriteriaReport, DatasetMeta, PricingReport, RankingReport};

pub fn ranking_to_markdown(report: &RankingReport<'_>) -> String {
    let mut output = String::new();
    output.push_str("# Platform Ranking\n\n");
    push_dataset(&mut output, &report.dataset);
    output.push_str(&format!(
        "Total weight: {} (default {})\n\n",
        report.total_weight, report.default_total_weight
    ));

    output.push_str("## Adjusted Weights\n\n");
    if report.changed_weights.is_empty() {
        output.push_str("- none (default weights)\n\n");
    } else {
        for change in &report.changed_weights {
            output.push_str(&format!(
                "- {} (#{}): {} -> {}\n",
                change.short_label, change.criterion_id, change.default_weight, change.weight
            ));
        }
        output.push('\n');
    }

    output.push_str("## Rankings\n\n");
    output.push_str("| Rank | Move | Platform | Score | Max | Match |\n");
    output.push_str("|---:|:---:|---|---:|---:|---:|\n");
    for entry in &report.rankings {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {:.1}% |\n",
            entry.rank,
            format_rank_delta(entry.rank_delta),
            entry.platform.name,
            entry.weighted_score,
            entry.max_possible,
            entry.percentage
        ));
    }

    if let Some(explanation) = &report.explanation {
        output.push_str(&format!("\n## Breakdown: {}\n\n", explanation.platform_name));
        output.push_str("| Criterion | Score | Weight | Points | Rationale |\n");
        output.push_str("|---|---|---:|---:|---|\n");
        for row in &explanation.rows {
            output.push_str(&format!(
                "| {} | {} ({}) | {} | {}/{} | {} |\n",
                row.criterion.short_label,
                row.score,
                row.label,
                row.weight,
                row.contribution,
                row.max,
                row.rationale
            ));
        }
    }

    output
}

pub fn pricing_to_markdown(report: &PricingReport<'_, '_>) -> String {
    let mut output = String::new();
    output.push_str("# Pricing Estimate\n\n");
    push_dataset(&mut output, &report.dataset);
    output.push_str(&format!(
        "Usage: {} users, {} resources, {} runs/month\n\n",
        group_thousands(u64::from(report.inputs.users)),
        group_thousands(u64::from(report.inputs.resources)),
        group_thousands(u64::from(report.inputs.runs))
    ));

    for warning in &report.slider_warnings {
        output.push_str(&format!(
            "> warning: {} = {} is outside the expected range {}..={}\n",
            warning.dimension, warning.value, warning.min, warning.max
        ));
    }
    if !report.slider_warnings.is_empty() {
        output.push('\n');
    }

    if report.quotes.is_empty() {
        output.push_str("- no platforms have pricing data\n");
        return output;
    }

    output.push_str("| # | Platform | Model | Tier | Monthly | Flags |\n");
    output.push_str("|---:|---|---|---|---:|---|\n");
    for (index, quote) in report.quotes.iter().enumerate() {
        let mut flags = Vec::new();
        if quote.overridden {
            flags.push("manual");
        }
        if quote.tier.estimated {
            flags.push("estimated");
        }
        if quote.needs_sales_quote() {
            flags.push("contact sales");
        }
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} |\n",
            index + 1,
            quote.result.platform_name,
            quote.result.model,
            quote.tier.name,
            format_monthly(quote.monthly_cost),
            flags.join(", ")
        ));
    }

    if let Some((cheapest, priciest)) = cost_spread(&report.quotes) {
        output.push_str(&format!(
            "\nCheapest: {} ({}). Most expensive: {} ({}).\n",
            cheapest.result.platform_name,
            format_cost(cheapest.monthly_cost),
            priciest.result.platform_name,
            format_cost(priciest.monthly_cost)
        ));
    }

    if report.show_all_tiers {
        for quote in &report.quotes {
            output.push_str(&format!("\n## {}\n\n", quote.result.platform_name));
            if !quote.result.description.is_empty() {
                output.push_str(&format!("{}\n\n", quote.result.description));
            }
            for tier_quote in &quote.result.all_tiers {
                let marker = if tier_quote.tier.name == quote.tier.name {
                    "*"
                } else {
                    "-"
                };
                let cost = format_monthly(round_cost(tier_quote.cost));
                if tier_quote.can_handle {
                    output.push_str(&format!(
                        "{marker} {}: {}{}\n",
                        tier_quote.tier.name,
                        cost,
                        breakdown_line(tier_quote.tier, &report.inputs)
                    ));
                } else {
                    output.push_str(&format!(
                        "{marker} {}: {} (over limit)\n",
                        tier_quote.tier.name, cost
                    ));
                }
            }
            if !quote.tier.features.is_empty() {
                let features = quote
                    .tier
                    .features
                    .iter()
                    .map(|(key, available)| {
                        let label = report.pricing.feature_label(key);
                        format!("{} {}", if *available { "[x]" } else { "[ ]" }, label)
                    })
                    .collect::<Vec<_>>();
                output.push_str(&format!(
                    "\nFeatures on {}: {}\n",
                    quote.tier.name,
                    features.join(", ")
                ));
            }
            if !quote.tier.notes.is_empty() {
                output.push_str(&format!("Notes: {}\n", quote.tier.notes));
            }
        }
    }

    output
}

/// ` (base $50, users $30)`, omitting zero components.
fn breakdown_line(tier: &PricingTier, inputs: &PricingInputs) -> String {
    let breakdown = cost_breakdown(tier, inputs);
    let mut parts = Vec::new();
    if breakdown.base > 0.0 {
        parts.push(format!("base ${}", round_cost(breakdown.base)));
    }
    for dimension in Dimension::ALL {
        let amount = round_cost(breakdown.overage(dimension));
        if amount > 0 {
            parts.push(format!("{dimension} ${amount}"));
        }
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

pub fn criteria_to_markdown(report: &CriteriaReport<'_>) -> String {
    let mut output = String::new();
    output.push_str("# Criteria\n");
    for (category, criteria) in &report.groups {
        output.push_str(&format!("\n## {}\n\n", report.label(*category)));
        for criterion in criteria {
            output.push_str(&format!(
                "- #{} {} (weight {}, max {}): {}\n",
                criterion.id,
                criterion.name,
                criterion.default_weight,
                criterion.max_weight,
                criterion.description
            ));
        }
    }
    output
}

fn push_dataset(output: &mut String, dataset: &DatasetMeta<'_>) {
    let short = dataset.fingerprint.get(..12).unwrap_or(dataset.fingerprint);
    output.push_str(&format!(
        "Dataset: {} (sha256 {}), generated {}\n\n",
        dataset.path, short, dataset.generated_at
    ));
}
