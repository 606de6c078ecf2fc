pub mod config;
pub mod error;
pub mod expectation_propagation;
pub mod numerical;
pub mod observation;
pub mod summary;

pub use config::SolverConfig;
pub use error::{RankingError, Result};
pub use expectation_propagation::{Solution, SolveReport, SolveStatus, solve};
pub use summary::RankedCompetitor;
