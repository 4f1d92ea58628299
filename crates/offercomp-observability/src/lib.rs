//! # offercomp-observability
//!
//! Structured logging for OfferComp: subscriber setup driven by
//! [`ObservabilityConfig`](offercomp_core::config::ObservabilityConfig)
//! and span macros shared by the calculator and hosts.

pub mod tracing_setup;

pub use tracing_setup::{init_from_config, init_tracing, init_tracing_with_filter};
