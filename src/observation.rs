use crate::error::{RankingError, Result};

/// A named participant. The index is its position in the roster and never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Competitor {
    pub index: usize,
    pub name: String,
}

impl Competitor {
    /// Builds the roster from display names, in order.
    pub fn roster<S: AsRef<str>>(names: &[S]) -> Vec<Self> {
        names
            .iter()
            .enumerate()
            .map(|(index, name)| Self {
                index,
                name: name.as_ref().to_owned(),
            })
            .collect()
    }
}

/// A validated finish order, best first, together with its adjacent pairs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    order: Vec<usize>,
    pairs: Vec<(usize, usize)>,
}

impl Observation {
    /// Finish order, winner first.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Each (ahead, behind) pair of consecutive finishers.
    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    fn parse(position: usize, order: &[usize], num_competitors: usize) -> Result<Self> {
        if order.len() < 2 {
            return Err(RankingError::observation(
                position,
                format!("needs at least 2 finishers, got {}", order.len()),
            ));
        }
        for (place, &id) in order.iter().enumerate() {
            if id >= num_competitors {
                return Err(RankingError::observation(
                    position,
                    format!(
                        "competitor {} is out of range for {} competitors",
                        id, num_competitors
                    ),
                ));
            }
            if order[..place].contains(&id) {
                return Err(RankingError::observation(
                    position,
                    format!("competitor {} finishes more than once", id),
                ));
            }
        }

        let pairs = order.windows(2).map(|w| (w[0], w[1])).collect();
        Ok(Self {
            order: order.to_vec(),
            pairs,
        })
    }
}

/// Checks every raw finish order against the roster size. Fails on the first invalid
/// observation, so either everything is usable or nothing is returned.
pub fn normalize<O: AsRef<[usize]>>(
    raw_observations: &[O],
    num_competitors: usize,
) -> Result<Vec<Observation>> {
    raw_observations
        .iter()
        .enumerate()
        .map(|(position, order)| Observation::parse(position, order.as_ref(), num_competitors))
        .collect()
}
