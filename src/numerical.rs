use statrs::function::erf::{erfc, erfc_inv};

// Below this z-score, the cdf loses too many digits and we switch to an asymptotic expansion
const TRUNCATION_CUTOFF: f64 = -30.;

pub fn standard_normal_pdf(z: f64) -> f64 {
    const NORMALIZE: f64 = 0.5 * std::f64::consts::FRAC_2_SQRT_PI / std::f64::consts::SQRT_2;
    NORMALIZE * (-0.5 * z * z).exp()
}

pub fn standard_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / std::f64::consts::SQRT_2)
    // Less numerically stable: 0.5 + 0.5 * erf(z / std::f64::consts::SQRT_2)
}

pub fn standard_normal_cdf_inv(prob: f64) -> f64 {
    -std::f64::consts::SQRT_2 * erfc_inv(2. * prob)
}

/// Additive mean correction for a standard normal truncated to `x > -t`,
/// i.e. pdf(t) / cdf(t).
pub fn truncation_v(t: f64) -> f64 {
    if t < TRUNCATION_CUTOFF {
        return inverse_mills_asymptotic(-t).0;
    }
    standard_normal_pdf(t) / standard_normal_cdf(t)
}

/// Multiplicative variance correction for a standard normal truncated to `x > -t`.
/// The truncated variance is `1 - truncation_w(t)`, so the result lies in [0, 1].
pub fn truncation_w(t: f64) -> f64 {
    let w = if t < TRUNCATION_CUTOFF {
        let (v, v_plus_t) = inverse_mills_asymptotic(-t);
        v * v_plus_t
    } else {
        let v = truncation_v(t);
        v * (v + t)
    };
    w.clamp(0., 1.)
}

// Returns (v, v - x) for v = pdf(-x) / cdf(-x) and large positive x, from the series
// cdf(-x) / pdf(x) ~ (1 - 1/x^2 + 3/x^4 - 15/x^6) / x. The second term is formed
// without subtracting two large numbers.
fn inverse_mills_asymptotic(x: f64) -> (f64, f64) {
    let inv_x2 = (x * x).recip();
    let tail = inv_x2 * (1. - inv_x2 * (3. - 15. * inv_x2));
    let series = 1. - tail;
    (x / series, x * tail / series)
}
