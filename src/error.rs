//! Error types for painting runs

use thiserror::Error;

/// Errors that can occur when configuring or running a paint
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Agent count is nonpositive or exceeds the number of canvas cells
    #[error("Invalid agent count {agents}: expected between 1 and {limit}")]
    InvalidAgentCount {
        /// Requested number of agents, as given at the boundary.
        agents: i64,
        /// Number of cells on the canvas.
        limit: u64,
    },

    /// Step budget is negative
    #[error("Invalid step budget {steps}: expected 0 or more")]
    InvalidStepBudget {
        /// Requested per-agent budget, as given at the boundary.
        steps: i64,
    },

    /// An agent thread panicked before finishing its walk
    #[error("An agent thread panicked during the run")]
    AgentPanicked,
}

/// Result type for painting runs
pub type Result<T> = std::result::Result<T, Error>;
