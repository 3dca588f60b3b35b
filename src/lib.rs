//! Weighted multi-criteria ranking of competing platforms and tiered monthly
//! cost estimates for the same platforms.
//!
//! [`rank::rank`] and [`pricing::compute_all_results`] are pure functions of
//! their arguments; [`dataset::load`] produces the validated document both
//! consume.

pub mod config;
pub mod dataset;
pub mod error;
pub mod logging;
pub mod pricing;
pub mod rank;
pub mod report;
pub mod types;
