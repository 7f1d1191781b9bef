//! Triage vocabulary: acuity levels and clinical roles.

pub mod esi;
pub mod role;

pub use esi::EsiLevel;
pub use role::Role;
