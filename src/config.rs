use crate::error::{RankingError, Result};
use serde::Deserialize;
use std::path::Path;

fn default_prior_mean() -> f64 {
    6.
}

fn default_prior_variance() -> f64 {
    9.
}

fn default_noise_variance() -> f64 {
    1.
}

fn default_iterations() -> usize {
    50
}

/// Hyperparameters of the skill model and the limits of its inference loop.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SolverConfig {
    /// Mean of every competitor's skill before any evidence.
    #[serde(default = "default_prior_mean")]
    pub prior_mean: f64,
    /// Variance of every competitor's skill before any evidence.
    #[serde(default = "default_prior_variance")]
    pub prior_variance: f64,
    /// Variance of the noise separating a single performance from the underlying skill.
    #[serde(default = "default_noise_variance")]
    pub performance_noise_variance: f64,
    /// Number of sweeps over all factors; an upper bound when a tolerance is set.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// When set, stop as soon as no mean or variance moves by this much in a sweep.
    #[serde(default)]
    pub convergence_tolerance: Option<f64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            prior_mean: default_prior_mean(),
            prior_variance: default_prior_variance(),
            performance_noise_variance: default_noise_variance(),
            iterations: default_iterations(),
            convergence_tolerance: None,
        }
    }
}

impl SolverConfig {
    pub fn from_file(source: impl AsRef<Path>) -> Result<Self> {
        let source = source.as_ref();
        // json5 rather than serde_json so that Infinity and comments are accepted
        let params_json = std::fs::read_to_string(source)
            .map_err(|e| RankingError::config(format!("failed to read {:?}: {}", source, e)))?;
        Self::from_json5(&params_json)
    }

    pub fn from_json5(params_json: &str) -> Result<Self> {
        let config: Self = json5::from_str(params_json)
            .map_err(|e| RankingError::config(format!("failed to parse parameters: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_prior(mut self, mean: f64, variance: f64) -> Self {
        self.prior_mean = mean;
        self.prior_variance = variance;
        self
    }

    pub fn with_noise_variance(mut self, variance: f64) -> Self {
        self.performance_noise_variance = variance;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_convergence_tolerance(mut self, tolerance: f64) -> Self {
        self.convergence_tolerance = Some(tolerance);
        self
    }

    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, value: f64) -> Result<()> {
            if value.is_finite() && value > 0. {
                Ok(())
            } else {
                Err(RankingError::config(format!(
                    "{} must be finite and positive, got {}",
                    name, value
                )))
            }
        }

        if !self.prior_mean.is_finite() {
            return Err(RankingError::config(format!(
                "prior_mean must be finite, got {}",
                self.prior_mean
            )));
        }
        positive("prior_variance", self.prior_variance)?;
        positive("performance_noise_variance", self.performance_noise_variance)?;
        if self.iterations == 0 {
            return Err(RankingError::config("iterations must be at least 1"));
        }
        if let Some(tolerance) = self.convergence_tolerance {
            positive("convergence_tolerance", tolerance)?;
        }
        Ok(())
    }
}
