//! Gaussian expectation propagation over chains of pairwise ordering constraints,
//! in the style of TrueSkill: https://www.microsoft.com/en-us/research/publication/trueskilltm-a-bayesian-skill-rating-system/
//!
//! Every competitor has a Gaussian skill. Each observed finish order contributes one
//! factor per adjacent pair, stating that the ahead finisher's performance (skill plus
//! noise) exceeded the behind finisher's. Sweeps visit the factors in a fixed order and
//! replace each factor's messages by moment-matched Gaussians.

mod belief;
mod factors;
mod normal;

pub use belief::BeliefStore;
pub use factors::{GreaterThanFactor, build_factors};
pub use normal::{G_ONE, Gaussian};

use crate::config::SolverConfig;
use crate::error::{RankingError, Result};
use crate::numerical::{standard_normal_cdf, truncation_v, truncation_w};
use crate::observation::{Competitor, normalize};
use crate::summary::{RankedCompetitor, rank};

// A shrunken variance never drops below this fraction of the variance it came from
const MIN_VARIANCE_RATIO: f64 = 1e-12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolveStatus {
    /// The convergence tolerance was met before the iteration cap.
    Converged,
    /// Ran the configured number of sweeps; no tolerance was requested.
    IterationLimitReached,
    /// A tolerance was requested but never met; beliefs are the latest estimate.
    NonConvergence,
    /// At least one variance had to be clamped to stay positive.
    NumericallyDegraded,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SolveReport {
    pub status: SolveStatus,
    pub sweeps: usize,
    /// Largest change in any mean or variance during the last sweep.
    pub max_change: f64,
    pub degraded_updates: usize,
}

#[derive(Clone, Debug)]
pub struct Solution {
    /// Competitors by descending mean skill.
    pub ranking: Vec<RankedCompetitor>,
    /// Final skill beliefs, by competitor index.
    pub beliefs: Vec<Gaussian>,
    pub report: SolveReport,
    noise_variance: f64,
}

impl Solution {
    /// Probability that competitor `a` outperforms competitor `b` in a new encounter.
    pub fn win_probability(&self, a: usize, b: usize) -> f64 {
        let diff = self.beliefs[a].with_noise(self.noise_variance)
            - self.beliefs[b].with_noise(self.noise_variance);
        standard_normal_cdf(diff.mean() / diff.sigma())
    }
}

/// Infers skills from finish orders and ranks the competitors.
///
/// `observations` hold competitor indices into `competitor_names`, winner first.
/// Configuration and observations are validated before any inference work is done.
pub fn solve<S: AsRef<str>, O: AsRef<[usize]>>(
    competitor_names: &[S],
    observations: &[O],
    config: &SolverConfig,
) -> Result<Solution> {
    let solver = EpSolver::new(config.clone())?;
    let competitors = Competitor::roster(competitor_names);
    let observations = normalize(observations, competitors.len())?;

    let mut store =
        BeliefStore::initialize(&competitors, config.prior_mean, config.prior_variance)?;
    let mut factors = build_factors(&observations);
    let report = solver.run(&mut store, &mut factors)?;

    let beliefs = store.into_beliefs();
    Ok(Solution {
        ranking: rank(&competitors, &beliefs),
        beliefs,
        report,
        noise_variance: config.performance_noise_variance,
    })
}

#[derive(Debug)]
pub struct EpSolver {
    config: SolverConfig,
}

impl EpSolver {
    pub fn new(config: SolverConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Sweeps over `factors` in order, updating `store` in place, until the iteration cap
    /// or, if configured, the convergence tolerance is reached.
    pub fn run(
        &self,
        store: &mut BeliefStore,
        factors: &mut [GreaterThanFactor],
    ) -> Result<SolveReport> {
        let tolerance = self.config.convergence_tolerance;
        let mut sweeps = 0;
        let mut max_change = 0.;
        let mut degraded_updates = 0;
        let mut converged = false;

        while sweeps < self.config.iterations {
            let before = store.as_slice().to_vec();
            for factor in factors.iter_mut() {
                if self.update_factor(store, factor)? {
                    degraded_updates += 1;
                }
            }
            sweeps += 1;

            max_change = check_convergence(&before, store.as_slice());
            tracing::debug!("Sweep {:3}: max change {:e}", sweeps, max_change);

            if tolerance.is_some_and(|tol| max_change < tol) {
                converged = true;
                break;
            }
        }

        let status = if degraded_updates > 0 {
            tracing::warn!(
                "{} updates clamped a variance to stay positive",
                degraded_updates
            );
            SolveStatus::NumericallyDegraded
        } else if converged {
            SolveStatus::Converged
        } else if let Some(tol) = tolerance {
            tracing::warn!(
                "No convergence to {:e} within {} sweeps (last change {:e})",
                tol,
                sweeps,
                max_change
            );
            SolveStatus::NonConvergence
        } else {
            SolveStatus::IterationLimitReached
        };

        tracing::info!(
            "Solved {} competitors over {} factors: {:?} after {} sweeps",
            store.len(),
            factors.len(),
            status,
            sweeps
        );

        Ok(SolveReport {
            status,
            sweeps,
            max_change,
            degraded_updates,
        })
    }

    // Returns whether a variance had to be clamped.
    fn update_factor(
        &self,
        store: &mut BeliefStore,
        factor: &mut GreaterThanFactor,
    ) -> Result<bool> {
        let noise = self.config.performance_noise_variance;
        let cavity_w = BeliefStore::exclude(&store.get(factor.winner), &factor.to_winner)?;
        let cavity_l = BeliefStore::exclude(&store.get(factor.loser), &factor.to_loser)?;

        let diff = cavity_w.with_noise(noise) - cavity_l.with_noise(noise);
        let c = diff.sigma();
        let t = diff.mean() / c;
        let (v, w) = (truncation_v(t), truncation_w(t));

        let (marginal_w, clamped_w) = moment_match(&cavity_w, c, v, w, 1.);
        let (marginal_l, clamped_l) = moment_match(&cavity_l, c, v, w, -1.);

        factor.to_winner = message(&marginal_w, &cavity_w)?;
        factor.to_loser = message(&marginal_l, &cavity_l)?;
        store.set(
            factor.winner,
            BeliefStore::combine(&cavity_w, &factor.to_winner)?,
        );
        store.set(
            factor.loser,
            BeliefStore::combine(&cavity_l, &factor.to_loser)?,
        );

        Ok(clamped_w || clamped_l)
    }
}

// Skill posterior when the difference of performances, with standard deviation c, is
// truncated to be positive. `sign` is +1 for the winner and -1 for the loser.
fn moment_match(cavity: &Gaussian, c: f64, v: f64, w: f64, sign: f64) -> (Gaussian, bool) {
    let variance = cavity.variance();
    let ratio = variance / c;
    let mean = cavity.mean() + sign * ratio * v;
    let shrunk = variance * (1. - ratio / c * w);

    let floor = variance * MIN_VARIANCE_RATIO;
    if shrunk > floor {
        (Gaussian::from_mean_variance(mean, shrunk), false)
    } else {
        (Gaussian::from_mean_variance(mean, floor), true)
    }
}

// The factor's new message: whatever turns the cavity into the moment-matched marginal.
fn message(marginal: &Gaussian, cavity: &Gaussian) -> Result<Gaussian> {
    let msg = marginal / cavity;
    if msg.pi.is_finite() && msg.tau.is_finite() {
        Ok(msg)
    } else {
        Err(RankingError::unstable(format!(
            "factor message from marginal {:?} and cavity {:?}",
            marginal, cavity
        )))
    }
}

fn check_convergence(a: &[Gaussian], b: &[Gaussian]) -> f64 {
    a.iter()
        .zip(b.iter())
        .flat_map(|(ai, bi)| {
            [
                ai.mean() - bi.mean(),
                ai.variance() - bi.variance(),
            ]
        })
        .map(f64::abs)
        .fold(0., f64::max)
}
