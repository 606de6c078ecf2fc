use overload::overload;
use std::ops;

/// A Gaussian density kept in natural parameters: precision `pi = 1 / sigma^2` and
/// precision-adjusted mean `tau = mu * pi`. Products and quotients of densities are
/// then plain sums and differences.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gaussian {
    pub pi: f64,
    pub tau: f64,
}

/// The improper flat density, identity of the product.
pub const G_ONE: Gaussian = Gaussian { pi: 0., tau: 0. };

// Product of densities
overload!((a: ?Gaussian) * (b: ?Gaussian) -> Gaussian {
    Gaussian {
        pi: a.pi + b.pi,
        tau: a.tau + b.tau,
    }
});

overload!((a: &mut Gaussian) *= (b: ?Gaussian) {
    a.pi += b.pi;
    a.tau += b.tau;
});

// Quotient of densities
overload!((a: ?Gaussian) / (b: ?Gaussian) -> Gaussian {
    Gaussian {
        pi: a.pi - b.pi,
        tau: a.tau - b.tau,
    }
});

overload!((a: &mut Gaussian) /= (b: ?Gaussian) {
    a.pi -= b.pi;
    a.tau -= b.tau;
});

// Distribution of the difference between two independent variables
overload!((a: ?Gaussian) - (b: ?Gaussian) -> Gaussian {
    if a.pi <= 0. || b.pi <= 0. {
        return G_ONE;
    }
    Gaussian::from_mean_variance(a.mean() - b.mean(), a.variance() + b.variance())
});

impl Gaussian {
    pub fn from_mean_variance(mu: f64, variance: f64) -> Self {
        let pi = variance.recip();
        Self { pi, tau: mu * pi }
    }

    pub fn mean(&self) -> f64 {
        self.tau / self.pi
    }

    pub fn variance(&self) -> f64 {
        self.pi.recip()
    }

    pub fn sigma(&self) -> f64 {
        self.variance().sqrt()
    }

    /// A normalizable density with finite parameters.
    pub fn is_proper(&self) -> bool {
        self.pi.is_finite() && self.pi > 0. && self.tau.is_finite()
    }

    /// Adds independent zero-mean noise with the given variance, e.g. to turn a skill
    /// belief into a performance belief.
    pub fn with_noise(self, noise_variance: f64) -> Self {
        if self.pi <= 0. {
            return self;
        }
        Self::from_mean_variance(self.mean(), self.variance() + noise_variance)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12 * (1. + a.abs().max(b.abs()))
    }

    #[test]
    fn test_moment_accessors() {
        let g = Gaussian::from_mean_variance(6., 9.);
        assert!(close(g.mean(), 6.));
        assert!(close(g.variance(), 9.));
        assert!(close(g.sigma(), 3.));
        assert!(g.is_proper());
        assert!(!G_ONE.is_proper());
    }

    #[test]
    fn test_product_then_quotient_recovers_factor() {
        let a = Gaussian::from_mean_variance(1., 4.);
        let b = Gaussian::from_mean_variance(-2., 0.5);
        let prod = a * b;
        // precisions add: 1/4 + 2
        assert!(close(prod.pi, 2.25));
        // precision-weighted mean
        assert!(close(prod.mean(), (0.25 * 1. - 2. * 2.) / 2.25));

        let back = prod / b;
        assert!(close(back.mean(), 1.));
        assert!(close(back.variance(), 4.));

        let mut acc = G_ONE;
        acc *= a;
        acc *= &b;
        acc /= b;
        assert!(close(acc.pi, a.pi) && close(acc.tau, a.tau));
    }

    #[test]
    fn test_difference_and_noise() {
        let a = Gaussian::from_mean_variance(7., 2.).with_noise(1.);
        let b = Gaussian::from_mean_variance(4., 5.).with_noise(1.);
        let d = a - b;
        assert!(close(d.mean(), 3.));
        assert!(close(d.variance(), 9.));
        assert_eq!(G_ONE.with_noise(1.), G_ONE);
        assert_eq!(a - G_ONE, G_ONE);
    }
}
