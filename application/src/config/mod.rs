//! Application-level configuration.
//!
//! - [`DeliberationParams`]: prompt example sampling and phase-1 concurrency

pub mod deliberation_params;

pub use deliberation_params::DeliberationParams;
