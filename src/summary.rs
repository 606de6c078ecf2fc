use crate::expectation_propagation::Gaussian;
use crate::numerical::standard_normal_cdf_inv;
use crate::observation::Competitor;
use std::cmp::Ordering;

#[derive(Clone, Debug, PartialEq)]
pub struct RankedCompetitor {
    pub index: usize,
    pub name: String,
    pub mean_skill: f64,
    pub variance: f64,
}

impl RankedCompetitor {
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }

    /// A skill the competitor very likely exceeds: `num_stdevs` below the mean.
    pub fn conservative_skill(&self, num_stdevs: f64) -> f64 {
        self.mean_skill - num_stdevs * self.std_dev()
    }

    /// Central interval holding the skill with the given probability, e.g. 0.95.
    pub fn credible_interval(&self, level: f64) -> (f64, f64) {
        assert!(level > 0. && level < 1., "level must be in (0, 1)");
        let z = standard_normal_cdf_inv(0.5 + 0.5 * level);
        let half_width = z * self.std_dev();
        (self.mean_skill - half_width, self.mean_skill + half_width)
    }
}

/// Orders competitors by descending mean skill. Equal means go to the more certain
/// belief first, and then to the lower index, so the order is total.
pub fn rank(competitors: &[Competitor], beliefs: &[Gaussian]) -> Vec<RankedCompetitor> {
    let mut ranking: Vec<RankedCompetitor> = competitors
        .iter()
        .zip(beliefs.iter())
        .map(|(competitor, belief)| RankedCompetitor {
            index: competitor.index,
            name: competitor.name.clone(),
            mean_skill: belief.mean(),
            variance: belief.variance(),
        })
        .collect();
    ranking.sort_by(compare);
    ranking
}

fn compare(a: &RankedCompetitor, b: &RankedCompetitor) -> Ordering {
    b.mean_skill
        .total_cmp(&a.mean_skill)
        .then(a.variance.total_cmp(&b.variance))
        .then(a.index.cmp(&b.index))
}
