pub mod common;
pub mod config;
pub mod display;
pub mod domain;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod pipeline;
pub mod report;
pub mod sample;
pub mod simulate;

// Application use cases and the ports they depend on
pub mod app;
// Adapters for those ports
pub mod infra;
