//! Forward simulation of seasonal ARIMA models.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::model::SarimaModel;

/// Simulates `length` observations of `model` driven by unit-variance
/// Gaussian innovations.
///
/// See [`simulate_with_sd()`].
pub fn simulate<R: Rng>(model: &SarimaModel, length: usize, rng: &mut R) -> Vec<f64> {
    simulate_with_sd(model, length, 1.0, rng)
}

/// Simulates `length` observations of `model` with innovations of standard
/// deviation `innovation_sd`.
///
/// All `length` innovations are drawn first, then the difference equation
///
/// ```text
/// y_t = -sum_i a_i y_(t-i) + e_t + sum_j m_j e_(t-j)
/// ```
///
/// is run with zero pre-sample values, where `a` and `m` are the expanded
/// AR (including differencing) and MA polynomials. There is no burn-in: the
/// output has exactly `length` values.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rnd_sarima::{SarimaModel, SarimaOrder, simulate};
///
/// let model = SarimaModel::default_for(SarimaOrder::new(1, 1, 1));
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
/// let y = simulate(&model, 120, &mut rng);
/// assert_eq!(y.len(), 120);
/// ```
pub fn simulate_with_sd<R: Rng>(
    model: &SarimaModel,
    length: usize,
    innovation_sd: f64,
    rng: &mut R,
) -> Vec<f64> {
    if length == 0 {
        return Vec::new();
    }

    let ar = model.expanded_ar();
    let ma = model.expanded_ma();

    let eps: Vec<f64> = (0..length)
        .map(|_| {
            let z: f64 = StandardNormal.sample(rng);
            innovation_sd * z
        })
        .collect();
    let mut y = vec![0.0; length];

    for t in 0..length {
        let mut val = eps[t];
        for (i, &a) in ar.iter().enumerate().take(t) {
            val -= a * y[t - 1 - i];
        }
        for (j, &m) in ma.iter().enumerate().take(t) {
            val += m * eps[t - 1 - j];
        }
        y[t] = val;
    }

    y
}
