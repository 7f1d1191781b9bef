//! Deliberation parameters: use case behavior that is not domain policy.

use serde::{Deserialize, Serialize};

/// Controls how a deliberation is run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliberationParams {
    /// Reference examples per ESI level embedded in each system prompt.
    pub examples_per_level: usize,
    /// Seed for reference example sampling.
    pub example_seed: u64,
    /// Issue the three initial assessments concurrently.
    pub parallel_assessments: bool,
}

impl Default for DeliberationParams {
    fn default() -> Self {
        Self {
            examples_per_level: 1,
            example_seed: 42,
            parallel_assessments: false,
        }
    }
}

impl DeliberationParams {
    pub fn with_examples_per_level(mut self, n: usize) -> Self {
        self.examples_per_level = n;
        self
    }

    pub fn with_example_seed(mut self, seed: u64) -> Self {
        self.example_seed = seed;
        self
    }

    pub fn with_parallel_assessments(mut self, parallel: bool) -> Self {
        self.parallel_assessments = parallel;
        self
    }
}
