use super::normal::Gaussian;
use crate::error::{RankingError, Result};
use crate::observation::Competitor;

/// One skill belief per competitor, addressed by competitor index.
#[derive(Clone, Debug)]
pub struct BeliefStore {
    beliefs: Vec<Gaussian>,
}

impl BeliefStore {
    pub fn initialize(
        competitors: &[Competitor],
        prior_mean: f64,
        prior_variance: f64,
    ) -> Result<Self> {
        if !(prior_variance.is_finite() && prior_variance > 0.) {
            return Err(RankingError::config(format!(
                "prior variance must be finite and positive, got {}",
                prior_variance
            )));
        }
        if !prior_mean.is_finite() {
            return Err(RankingError::config(format!(
                "prior mean must be finite, got {}",
                prior_mean
            )));
        }
        let prior = Gaussian::from_mean_variance(prior_mean, prior_variance);
        Ok(Self {
            beliefs: vec![prior; competitors.len()],
        })
    }

    pub fn len(&self) -> usize {
        self.beliefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.beliefs.is_empty()
    }

    pub fn get(&self, id: usize) -> Gaussian {
        self.beliefs[id]
    }

    pub fn set(&mut self, id: usize, belief: Gaussian) {
        self.beliefs[id] = belief;
    }

    pub fn as_slice(&self) -> &[Gaussian] {
        &self.beliefs
    }

    pub fn into_beliefs(self) -> Vec<Gaussian> {
        self.beliefs
    }

    /// Product of two densities, e.g. a cavity belief with a fresh factor message.
    pub fn combine(a: &Gaussian, b: &Gaussian) -> Result<Gaussian> {
        Self::checked(a * b, "belief combination")
    }

    /// Quotient of two densities, e.g. a belief with one factor message removed.
    pub fn exclude(a: &Gaussian, b: &Gaussian) -> Result<Gaussian> {
        Self::checked(a / b, "cavity computation")
    }

    fn checked(result: Gaussian, context: &str) -> Result<Gaussian> {
        if result.is_proper() {
            Ok(result)
        } else {
            Err(RankingError::unstable(format!(
                "{}: precision {} and precision-mean {}",
                context, result.pi, result.tau
            )))
        }
    }
}
