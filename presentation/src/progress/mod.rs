//! Progress display during deliberation

pub mod reporter;
