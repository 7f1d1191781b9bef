//! Use cases (application services)

pub mod deliberate;
pub mod differential;
