pub mod config;
pub mod dataset;
pub mod pricing;
pub mod ranking;
pub mod report;
