use crate::types::pricing::{Dimension, PricingInputs, SliderConfig};
use indexmap::IndexMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderViolation {
    pub dimension: Dimension,
    pub value: u32,
    pub min: u32,
    pub max: u32,
}

/// Dimensions whose input lies outside the dataset's slider range.
/// Dimensions without a slider are unconstrained.
pub fn slider_violations(
    sliders: &IndexMap<Dimension, SliderConfig>,
    inputs: &PricingInputs,
) -> Vec<SliderViolation> {
    Dimension::ALL
        .iter()
        .filter_map(|&dimension| {
            let slider = sliders.get(&dimension)?;
            let value = inputs.get(dimension);
            (!(slider.min..=slider.max).contains(&value)).then_some(SliderViolation {
                dimension,
                value,
                min: slider.min,
                max: slider.max,
            })
        })
        .collect()
}
