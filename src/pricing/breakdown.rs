use crate::types::pricing::{Dimension, PricingInputs, PricingTier};
use serde::Serialize;

/// Monthly cost of a tier split into its base fee and per-dimension overage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub base: f64,
    pub users: f64,
    pub resources: f64,
    pub runs: f64,
}

impl CostBreakdown {
    pub fn total(&self) -> f64 {
        self.base + self.users + self.resources + self.runs
    }

    pub fn overage(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Users => self.users,
            Dimension::Resources => self.resources,
            Dimension::Runs => self.runs,
        }
    }
}

pub fn cost_breakdown(tier: &PricingTier, inputs: &PricingInputs) -> CostBreakdown {
    let charge = |dimension: Dimension, usage: u32| {
        f64::from(billable_units(tier, dimension, usage)) * tier.rate(dimension)
    };

    CostBreakdown {
        base: tier.base_price,
        users: charge(Dimension::Users, effective_users(tier, inputs)),
        resources: charge(Dimension::Resources, inputs.resources),
        runs: charge(Dimension::Runs, inputs.runs),
    }
}

/// Users billed for, after applying the tier's minimum seat count.
pub fn effective_users(tier: &PricingTier, inputs: &PricingInputs) -> u32 {
    tier.min_users
        .map_or(inputs.users, |floor| inputs.users.max(floor))
}

/// Units charged at the dimension's rate. Without an allowance every unit is
/// billed, unless the tier does not bill the dimension at all.
pub fn billable_units(tier: &PricingTier, dimension: Dimension, usage: u32) -> u32 {
    match tier.included(dimension) {
        Some(included) => usage.saturating_sub(included),
        None if tier.rate(dimension) > 0.0 => usage,
        None => 0,
    }
}
