use crate::types::report::{CriteriaReport, PricingReport, RankingReport};
use serde_json::json;

pub fn ranking_to_json(report: &RankingReport<'_>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn pricing_to_json(report: &PricingReport<'_, '_>) -> Result<String, serde_json::Error> {
    let results: Vec<_> = report
        .quotes
        .iter()
        .map(|quote| {
            let all_tiers = if report.show_all_tiers {
                serde_json::to_value(&quote.result.all_tiers)?
            } else {
                serde_json::Value::Null
            };
            Ok(json!({
                "platformId": quote.result.platform_id,
                "platformName": quote.result.platform_name,
                "model": quote.result.model,
                "autoTier": quote.result.selected_tier.name,
                "autoMonthlyCost": quote.result.monthly_cost,
                "tier": quote.tier.name,
                "monthlyCost": quote.monthly_cost,
                "overridden": quote.overridden,
                "exceeds": quote.result.exceeds,
                "estimated": quote.tier.estimated,
                "allTiers": all_tiers,
            }))
        })
        .collect::<Result<_, serde_json::Error>>()?;

    let warnings: Vec<_> = report
        .slider_warnings
        .iter()
        .map(|warning| {
            json!({
                "dimension": warning.dimension,
                "value": warning.value,
                "min": warning.min,
                "max": warning.max,
            })
        })
        .collect();

    let document = json!({
        "dataset": report.dataset,
        "inputs": report.inputs,
        "results": results,
        "warnings": warnings,
    });

    serde_json::to_string_pretty(&document)
}

pub fn criteria_to_json(report: &CriteriaReport<'_>) -> Result<String, serde_json::Error> {
    let groups: Vec<_> = report
        .groups
        .iter()
        .map(|(category, criteria)| {
            json!({
                "category": category,
                "label": report.label(*category),
                "criteria": criteria,
            })
        })
        .collect();

    serde_json::to_string_pretty(&groups)
}
