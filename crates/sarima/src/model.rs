//! Seasonal ARIMA coefficient sets.

use crate::error::SarimaError;
use crate::order::SarimaOrder;
use crate::polynomial::{differencing_poly, is_stable, lag_poly, polymul};

/// AR coefficient used by [`SarimaModel::default_for()`].
pub const DEFAULT_AR: f64 = -0.1;

/// MA coefficient used by [`SarimaModel::default_for()`].
pub const DEFAULT_MA: f64 = -0.2;

/// A seasonal ARIMA model with concrete coefficients.
///
/// Coefficients follow the lag-polynomial convention
///
/// ```text
/// phi(B)    = 1 + phi_1 B + ... + phi_p B^p
/// bphi(B^s) = 1 + bphi_1 B^s + ... + bphi_bp B^(bp*s)
/// theta(B)  = 1 + theta_1 B + ... + theta_q B^q
/// btheta(B^s) = 1 + btheta_1 B^s + ...
/// ```
///
/// with `phi(B) bphi(B^s) (1-B)^d (1-B^s)^bd y_t = theta(B) btheta(B^s) e_t`.
#[derive(Clone, Debug, PartialEq)]
pub struct SarimaModel {
    order: SarimaOrder,
    phi: Vec<f64>,
    theta: Vec<f64>,
    bphi: Vec<f64>,
    btheta: Vec<f64>,
}

impl SarimaModel {
    /// Creates a model from explicit coefficients.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`SarimaError::CoefficientLength`] | a vector does not match its order |
    /// | [`SarimaError::NonFiniteCoefficient`] | a coefficient is NaN or infinite |
    pub fn from_parts(
        order: SarimaOrder,
        phi: Vec<f64>,
        theta: Vec<f64>,
        bphi: Vec<f64>,
        btheta: Vec<f64>,
    ) -> Result<Self, SarimaError> {
        check_part("phi", &phi, order.p())?;
        check_part("theta", &theta, order.q())?;
        check_part("bphi", &bphi, order.bp())?;
        check_part("btheta", &btheta, order.bq())?;
        Ok(Self {
            order,
            phi,
            theta,
            bphi,
            btheta,
        })
    }

    /// Creates a model of the given order with every coefficient at zero.
    pub fn zeros(order: SarimaOrder) -> Self {
        Self {
            order,
            phi: vec![0.0; order.p()],
            theta: vec![0.0; order.q()],
            bphi: vec![0.0; order.bp()],
            btheta: vec![0.0; order.bq()],
        }
    }

    /// Creates the fixed fallback model of the given order.
    ///
    /// Every AR and seasonal AR coefficient is [`DEFAULT_AR`], every MA and
    /// seasonal MA coefficient is [`DEFAULT_MA`].
    pub fn default_for(order: SarimaOrder) -> Self {
        Self {
            order,
            phi: vec![DEFAULT_AR; order.p()],
            theta: vec![DEFAULT_MA; order.q()],
            bphi: vec![DEFAULT_AR; order.bp()],
            btheta: vec![DEFAULT_MA; order.bq()],
        }
    }

    /// Returns the model orders.
    pub fn order(&self) -> SarimaOrder {
        self.order
    }

    /// Returns the regular AR coefficients.
    pub fn phi(&self) -> &[f64] {
        &self.phi
    }

    /// Returns the regular MA coefficients.
    pub fn theta(&self) -> &[f64] {
        &self.theta
    }

    /// Returns the seasonal AR coefficients.
    pub fn bphi(&self) -> &[f64] {
        &self.bphi
    }

    /// Returns the seasonal MA coefficients.
    pub fn btheta(&self) -> &[f64] {
        &self.btheta
    }

    /// Returns `true` when the regular and seasonal AR polynomials are
    /// stationary (all roots strictly outside the unit circle).
    ///
    /// MA polynomials are not checked: non-invertible MA parts still
    /// simulate to finite series.
    pub fn is_valid(&self) -> bool {
        is_stable(&self.phi) && is_stable(&self.bphi)
    }

    /// Applies `f` to every coefficient, in the order
    /// `phi`, `bphi`, `theta`, `btheta`.
    pub(crate) fn map_coefficients(&self, mut f: impl FnMut(f64) -> f64) -> Self {
        let phi = self.phi.iter().map(|&c| f(c)).collect();
        let bphi = self.bphi.iter().map(|&c| f(c)).collect();
        let theta = self.theta.iter().map(|&c| f(c)).collect();
        let btheta = self.btheta.iter().map(|&c| f(c)).collect();
        Self {
            order: self.order,
            phi,
            theta,
            bphi,
            btheta,
        }
    }

    /// Full AR polynomial including differencing, without the leading 1.
    pub(crate) fn expanded_ar(&self) -> Vec<f64> {
        let stationary = polymul(
            &lag_poly(&self.phi, 1),
            &lag_poly(&self.bphi, self.order.period()),
        );
        let diff = differencing_poly(self.order.d(), self.order.bd(), self.order.period());
        let mut full = polymul(&stationary, &diff);
        full.remove(0);
        full
    }

    /// Full MA polynomial, without the leading 1.
    pub(crate) fn expanded_ma(&self) -> Vec<f64> {
        let mut full = polymul(
            &lag_poly(&self.theta, 1),
            &lag_poly(&self.btheta, self.order.period()),
        );
        full.remove(0);
        full
    }
}

fn check_part(part: &'static str, coeffs: &[f64], expected: usize) -> Result<(), SarimaError> {
    if coeffs.len() != expected {
        return Err(SarimaError::CoefficientLength {
            part,
            expected,
            got: coeffs.len(),
        });
    }
    if coeffs.iter().any(|c| !c.is_finite()) {
        return Err(SarimaError::NonFiniteCoefficient { part });
    }
    Ok(())
}
