pub type Result<T> = std::result::Result<T, RankingError>;

/// Everything that can stop a solve. Validation failures are reported before any
/// inference work begins; a solve that fails to meet its convergence tolerance is
/// not an error and is reported through `SolveStatus` instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RankingError {
    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Invalid observation #{observation}: {reason}")]
    InvalidObservation { observation: usize, reason: String },

    #[error("Numerical instability in {context}")]
    NumericalInstability { context: String },
}

impl RankingError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }

    pub(crate) fn observation(observation: usize, reason: impl Into<String>) -> Self {
        Self::InvalidObservation {
            observation,
            reason: reason.into(),
        }
    }

    pub(crate) fn unstable(context: impl Into<String>) -> Self {
        Self::NumericalInstability {
            context: context.into(),
        }
    }
}
