//! Deliberation orchestration domain

pub mod entities;

pub use entities::Phase;
