pub mod breakdown;
pub mod inputs;
pub mod overrides;

use crate::types::dataset::Platform;
use crate::types::pricing::{
    Dimension, PricingData, PricingInputs, PricingResult, PricingTier, TierQuote,
};
use breakdown::cost_breakdown;

/// Automatically chosen tier for a set of inputs.
#[derive(Debug, Clone, Copy)]
pub struct TierSelection<'a> {
    pub tier: &'a PricingTier,
    pub cost: f64,
    /// Usage is above every tier's ceiling; `tier` is the last tier and
    /// `cost` a best-effort estimate.
    pub exceeds: bool,
}

/// Monthly cost of `tier` at `inputs`. Never negative for a valid tier.
pub fn tier_cost(tier: &PricingTier, inputs: &PricingInputs) -> f64 {
    cost_breakdown(tier, inputs).total()
}

/// Whether `inputs` fit under every ceiling the tier declares.
pub fn tier_handles(tier: &PricingTier, inputs: &PricingInputs) -> bool {
    Dimension::ALL.iter().all(|&dimension| {
        tier.ceiling(dimension)
            .map_or(true, |max| inputs.get(dimension) <= max)
    })
}

/// Cheapest tier able to handle `inputs`; the earliest tier wins a tie.
/// Falls back to the last tier with `exceeds` set when none can.
/// Returns `None` only for an empty tier list.
pub fn select_best_tier<'a>(
    tiers: &'a [PricingTier],
    inputs: &PricingInputs,
) -> Option<TierSelection<'a>> {
    let best = tiers
        .iter()
        .filter(|tier| tier_handles(tier, inputs))
        .map(|tier| (tier, tier_cost(tier, inputs)))
        .fold(None, |best: Option<(&PricingTier, f64)>, (tier, cost)| match best {
            Some((_, best_cost)) if best_cost <= cost => best,
            _ => Some((tier, cost)),
        });

    match best {
        Some((tier, cost)) => Some(TierSelection {
            tier,
            cost,
            exceeds: false,
        }),
        None => {
            let last = tiers.last()?;
            tracing::debug!(tier = %last.name, "usage exceeds every tier, using last tier");
            Some(TierSelection {
                tier: last,
                cost: tier_cost(last, inputs),
                exceeds: true,
            })
        }
    }
}

/// Price every platform that has a pricing entry, cheapest first.
pub fn compute_all_results<'a>(
    pricing: &'a PricingData,
    platforms: &'a [Platform],
    inputs: &PricingInputs,
) -> Vec<PricingResult<'a>> {
    let mut results = platforms
        .iter()
        .filter_map(|platform| {
            let Some(entry) = pricing.platforms.get(&platform.id) else {
                tracing::debug!(platform = %platform.id, "no pricing entry, skipping");
                return None;
            };
            let Some(selection) = select_best_tier(&entry.tiers, inputs) else {
                tracing::warn!(platform = %platform.id, "pricing entry has no tiers, skipping");
                return None;
            };

            let all_tiers = entry
                .tiers
                .iter()
                .map(|tier| TierQuote {
                    tier,
                    cost: tier_cost(tier, inputs),
                    can_handle: tier_handles(tier, inputs),
                })
                .collect();

            Some(PricingResult {
                platform_id: &platform.id,
                platform_name: &platform.name,
                platform_color: &platform.color,
                platform_icon: &platform.icon_key,
                platform_url: &platform.url,
                model: &entry.model,
                description: &entry.description,
                selected_tier: selection.tier,
                monthly_cost: round_cost(selection.cost),
                exceeds: selection.exceeds,
                all_tiers,
            })
        })
        .collect::<Vec<_>>();

    results.sort_by_key(|result| result.monthly_cost);
    results
}

/// Whole-dollar monthly cost.
pub fn round_cost(cost: f64) -> u64 {
    cost.max(0.0).round() as u64
}
