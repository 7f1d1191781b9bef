//! Consensus normalization: raw consensus answer to [`ConsensusResult`].

pub mod normalizer;
pub mod result;
pub mod symptoms;
pub mod templates;

pub use normalizer::{ConsensusNormalizer, normalize};
pub use result::ConsensusResult;
pub use symptoms::{SymptomLexicon, SymptomRule};
