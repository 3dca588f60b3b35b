use super::round_cost;
use crate::error::{Result, ScorecardError};
use crate::types::pricing::{PricingData, PricingResult, PricingTier};
use std::collections::HashMap;

/// Tiers picked manually per platform id, replacing the automatic choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TierOverrides(HashMap<String, String>);

impl TierOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an override after checking the platform and tier exist.
    pub fn insert_checked(
        &mut self,
        pricing: &PricingData,
        platform_id: &str,
        tier_name: &str,
    ) -> Result<()> {
        let entry = pricing
            .platforms
            .get(platform_id)
            .ok_or_else(|| ScorecardError::UnknownPlatform(platform_id.to_string()))?;
        if !entry.tiers.iter().any(|tier| tier.name == tier_name) {
            return Err(ScorecardError::UnknownTier {
                platform: platform_id.to_string(),
                tier: tier_name.to_string(),
            });
        }
        self.insert(platform_id, tier_name);
        Ok(())
    }

    pub fn insert(&mut self, platform_id: &str, tier_name: &str) {
        self.0
            .insert(platform_id.to_string(), tier_name.to_string());
    }

    pub fn get(&self, platform_id: &str) -> Option<&str> {
        self.0.get(platform_id).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A pricing result with any manual override applied.
#[derive(Debug, Clone)]
pub struct EffectiveQuote<'r, 'a> {
    pub result: &'r PricingResult<'a>,
    pub tier: &'a PricingTier,
    pub monthly_cost: u64,
    pub overridden: bool,
}

impl EffectiveQuote<'_, '_> {
    /// Usage tops every tier and the automatic fallback is still active.
    pub fn needs_sales_quote(&self) -> bool {
        self.result.exceeds && !self.overridden
    }
}

/// Apply `overrides` to `results` and re-sort by effective cost. An override
/// naming a tier the platform does not have leaves the automatic choice.
pub fn effective_quotes<'r, 'a>(
    results: &'r [PricingResult<'a>],
    overrides: &TierOverrides,
) -> Vec<EffectiveQuote<'r, 'a>> {
    let mut quotes = results
        .iter()
        .map(|result| {
            let manual = overrides
                .get(result.platform_id)
                .and_then(|name| result.quote(name));
            match manual {
                Some(quote) => EffectiveQuote {
                    result,
                    tier: quote.tier,
                    monthly_cost: round_cost(quote.cost),
                    overridden: quote.tier.name != result.selected_tier.name,
                },
                None => EffectiveQuote {
                    result,
                    tier: result.selected_tier,
                    monthly_cost: result.monthly_cost,
                    overridden: false,
                },
            }
        })
        .collect::<Vec<_>>();

    quotes.sort_by_key(|quote| quote.monthly_cost);
    quotes
}

/// Cheapest and most expensive quote.
pub fn cost_spread<'q, 'r, 'a>(
    quotes: &'q [EffectiveQuote<'r, 'a>],
) -> Option<(&'q EffectiveQuote<'r, 'a>, &'q EffectiveQuote<'r, 'a>)> {
    Some((quotes.first()?, quotes.last()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::compute_all_results;
    use crate::pricing::tests::tier;
    use crate::rank::tests::platform;
    use crate::types::dataset::Platform;
    use crate::types::pricing::{PlatformPricing, PricingInputs};

    fn fixture() -> (PricingData, Vec<Platform>) {
        let mut cheap = tier("Starter");
        cheap.base_price = 20.0;
        let mut premium = tier("Premium");
        premium.base_price = 400.0;

        let mut solo = tier("Solo");
        solo.base_price = 100.0;

        let mut pricing = PricingData::default();
        pricing.platforms.insert(
            "alpha".to_string(),
            PlatformPricing {
                model: "flat".to_string(),
                description: String::new(),
                tiers: vec![cheap, premium],
            },
        );
        pricing.platforms.insert(
            "beta".to_string(),
            PlatformPricing {
                model: "flat".to_string(),
                description: String::new(),
                tiers: vec![solo],
            },
        );
        (pricing, vec![platform("alpha", &[]), platform("beta", &[])])
    }

    #[test]
    fn override_changes_tier_cost_and_order() {
        let (pricing, platforms) = fixture();
        let results = compute_all_results(&pricing, &platforms, &PricingInputs::default());

        let mut overrides = TierOverrides::new();
        overrides
            .insert_checked(&pricing, "alpha", "Premium")
            .expect("override should be accepted");

        let quotes = effective_quotes(&results, &overrides);
        let order = quotes
            .iter()
            .map(|quote| (quote.result.platform_id, quote.monthly_cost, quote.overridden))
            .collect::<Vec<_>>();
        assert_eq!(order, vec![("beta", 100, false), ("alpha", 400, true)]);

        let (cheapest, priciest) = cost_spread(&quotes).expect("quotes are not empty");
        assert_eq!(cheapest.result.platform_id, "beta");
        assert_eq!(priciest.tier.name, "Premium");
    }

    #[test]
    fn override_matching_auto_tier_is_not_flagged() {
        let (pricing, platforms) = fixture();
        let results = compute_all_results(&pricing, &platforms, &PricingInputs::default());

        let mut overrides = TierOverrides::new();
        overrides.insert("alpha", "Starter");
        overrides.insert("beta", "Missing");

        let quotes = effective_quotes(&results, &overrides);
        assert!(quotes.iter().all(|quote| !quote.overridden));
        assert_eq!(quotes[0].tier.name, "Starter");
        assert_eq!(quotes[1].tier.name, "Solo");
    }

    #[test]
    fn insert_checked_rejects_unknown_names() {
        let (pricing, _) = fixture();
        let mut overrides = TierOverrides::new();

        assert!(matches!(
            overrides.insert_checked(&pricing, "gamma", "Starter"),
            Err(ScorecardError::UnknownPlatform(id)) if id == "gamma"
        ));
        assert!(matches!(
            overrides.insert_checked(&pricing, "alpha", "Gold"),
            Err(ScorecardError::UnknownTier { .. })
        ));
        assert!(overrides.is_empty());
    }
}
