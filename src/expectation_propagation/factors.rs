use super::normal::{G_ONE, Gaussian};
use crate::observation::Observation;

/// The constraint "performance of `winner` exceeds performance of `loser`" from one
/// observation. Also remembers the last message it sent to each skill, so that the
/// message can be divided back out of the belief before it is recomputed.
#[derive(Clone, Debug, PartialEq)]
pub struct GreaterThanFactor {
    pub observation: usize,
    pub winner: usize,
    pub loser: usize,
    pub(super) to_winner: Gaussian,
    pub(super) to_loser: Gaussian,
}

impl GreaterThanFactor {
    pub fn new(observation: usize, winner: usize, loser: usize) -> Self {
        Self {
            observation,
            winner,
            loser,
            to_winner: G_ONE,
            to_loser: G_ONE,
        }
    }
}

/// Expands every observation into its chain of pairwise constraints: observations in
/// the order given, then adjacent pairs from first place down. A k-way finish yields
/// k - 1 factors.
pub fn build_factors(observations: &[Observation]) -> Vec<GreaterThanFactor> {
    observations
        .iter()
        .enumerate()
        .flat_map(|(i, obs)| {
            obs.pairs()
                .iter()
                .map(move |&(winner, loser)| GreaterThanFactor::new(i, winner, loser))
        })
        .collect()
}
