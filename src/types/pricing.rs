use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A billable usage dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Users,
    Resources,
    Runs,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Users, Dimension::Resources, Dimension::Runs];
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Dimension::Users => "users",
            Dimension::Resources => "resources",
            Dimension::Runs => "runs",
        };
        f.write_str(name)
    }
}

/// A vendor pricing plan. `None` allowances bill every unit when the matching
/// rate is positive; `None` ceilings are unbounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingTier {
    pub name: String,
    pub base_price: f64,
    #[serde(default)]
    pub per_user: f64,
    #[serde(default)]
    pub per_resource: f64,
    #[serde(default)]
    pub per_run: f64,
    #[serde(default)]
    pub included_users: Option<u32>,
    #[serde(default)]
    pub included_resources: Option<u32>,
    #[serde(default)]
    pub included_runs: Option<u32>,
    #[serde(default)]
    pub max_users: Option<u32>,
    #[serde(default)]
    pub max_resources: Option<u32>,
    #[serde(default)]
    pub max_runs: Option<u32>,
    /// Billing floor: charged as if at least this many users.
    #[serde(default)]
    pub min_users: Option<u32>,
    #[serde(default)]
    pub estimated: bool,
    #[serde(default)]
    pub features: IndexMap<String, bool>,
    #[serde(default)]
    pub notes: String,
}

impl PricingTier {
    pub fn rate(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Users => self.per_user,
            Dimension::Resources => self.per_resource,
            Dimension::Runs => self.per_run,
        }
    }

    pub fn included(&self, dimension: Dimension) -> Option<u32> {
        match dimension {
            Dimension::Users => self.included_users,
            Dimension::Resources => self.included_resources,
            Dimension::Runs => self.included_runs,
        }
    }

    pub fn ceiling(&self, dimension: Dimension) -> Option<u32> {
        match dimension {
            Dimension::Users => self.max_users,
            Dimension::Resources => self.max_resources,
            Dimension::Runs => self.max_runs,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformPricing {
    pub model: String,
    #[serde(default)]
    pub description: String,
    pub tiers: Vec<PricingTier>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    pub min: u32,
    pub max: u32,
    pub default: u32,
    #[serde(default = "default_step")]
    pub step: u32,
    pub label: String,
    #[serde(default)]
    pub unit: String,
}

fn default_step() -> u32 {
    1
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingData {
    #[serde(default)]
    pub platforms: HashMap<String, PlatformPricing>,
    #[serde(default)]
    pub feature_labels: IndexMap<String, String>,
    #[serde(default)]
    pub sliders: IndexMap<Dimension, SliderConfig>,
}

impl PricingData {
    pub fn feature_label<'a>(&'a self, key: &'a str) -> &'a str {
        self.feature_labels
            .get(key)
            .map(String::as_str)
            .unwrap_or(key)
    }
}

/// Usage figures the estimate is computed for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingInputs {
    pub users: u32,
    pub resources: u32,
    pub runs: u32,
}

impl PricingInputs {
    pub fn new(users: u32, resources: u32, runs: u32) -> Self {
        Self {
            users,
            resources,
            runs,
        }
    }

    /// Inputs at each slider's default; dimensions without a slider start at 0.
    pub fn from_sliders(sliders: &IndexMap<Dimension, SliderConfig>) -> Self {
        let default_for = |dimension| sliders.get(&dimension).map_or(0, |slider| slider.default);
        Self {
            users: default_for(Dimension::Users),
            resources: default_for(Dimension::Resources),
            runs: default_for(Dimension::Runs),
        }
    }

    pub fn get(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Users => self.users,
            Dimension::Resources => self.resources,
            Dimension::Runs => self.runs,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: u32) {
        match dimension {
            Dimension::Users => self.users = value,
            Dimension::Resources => self.resources = value,
            Dimension::Runs => self.runs = value,
        }
    }
}

/// Cost of a single tier for the current inputs.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierQuote<'a> {
    pub tier: &'a PricingTier,
    pub cost: f64,
    pub can_handle: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingResult<'a> {
    pub platform_id: &'a str,
    pub platform_name: &'a str,
    pub platform_color: &'a str,
    pub platform_icon: &'a str,
    pub platform_url: &'a str,
    pub model: &'a str,
    pub description: &'a str,
    pub selected_tier: &'a PricingTier,
    pub monthly_cost: u64,
    pub exceeds: bool,
    pub all_tiers: Vec<TierQuote<'a>>,
}

impl<'a> PricingResult<'a> {
    pub fn quote(&self, tier_name: &str) -> Option<&TierQuote<'a>> {
        self.all_tiers
            .iter()
            .find(|quote| quote.tier.name == tier_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_parses_nullable_limits_and_missing_min_users() {
        let tier: PricingTier = serde_json::from_str(
            r#"{"name": "Free", "basePrice": 0, "includedUsers": 2, "includedResources": null,
                "includedRuns": null, "perUser": 0, "perResource": 0, "perRun": 0,
                "maxUsers": 2, "maxResources": null, "maxRuns": 500,
                "estimated": false, "features": {"sso": false, "policies": true},
                "notes": "Community tier"}"#,
        )
        .expect("tier should parse");

        assert_eq!(tier.included_users, Some(2));
        assert_eq!(tier.included_resources, None);
        assert_eq!(tier.max_runs, Some(500));
        assert_eq!(tier.min_users, None);
        assert_eq!(
            tier.features.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["sso", "policies"]
        );
    }

    #[test]
    fn inputs_default_to_slider_defaults() {
        let mut sliders = IndexMap::new();
        sliders.insert(
            Dimension::Users,
            SliderConfig {
                min: 1,
                max: 200,
                default: 10,
                step: 1,
                label: "Users".to_string(),
                unit: String::new(),
            },
        );

        let inputs = PricingInputs::from_sliders(&sliders);
        assert_eq!(inputs, PricingInputs::new(10, 0, 0));
    }
}
