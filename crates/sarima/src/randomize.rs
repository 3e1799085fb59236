//! Canonical model selection and coefficient randomization.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use tracing::warn;

use crate::model::SarimaModel;

/// Returns `model` if it is valid, otherwise the default model of the same
/// order.
///
/// The substitution is not an error: it is logged at `warn` level and the
/// caller simply receives the default model.
///
/// # Example
///
/// ```
/// use rnd_sarima::{SarimaModel, SarimaOrder, build_canonical};
///
/// let order = SarimaOrder::new(1, 0, 0);
/// let explosive = SarimaModel::from_parts(order, vec![-1.5], vec![], vec![], vec![]).unwrap();
/// assert_eq!(build_canonical(explosive), SarimaModel::default_for(order));
/// ```
pub fn build_canonical(model: SarimaModel) -> SarimaModel {
    if model.is_valid() {
        return model;
    }
    warn!(
        order = %model.order(),
        phi = ?model.phi(),
        bphi = ?model.bphi(),
        "base model is not stationary, using default model"
    );
    SarimaModel::default_for(model.order())
}

/// Perturbs every coefficient of `canonical` with an independent
/// `Normal(0, noise_scale)` draw.
///
/// Draws are taken in the order `phi`, `bphi`, `theta`, `btheta`. The result
/// is not re-validated and may be non-stationary.
pub fn randomize<R: Rng>(canonical: &SarimaModel, noise_scale: f64, rng: &mut R) -> SarimaModel {
    canonical.map_coefficients(|c| {
        let z: f64 = StandardNormal.sample(rng);
        c + noise_scale * z
    })
}
