//! User-level configuration of a synthetic batch.

use std::fmt;

use rnd_calendar::Frequency;
use rnd_sarima::{SarimaModel, SarimaOrder, build_canonical};

use crate::error::ProviderError;

/// Largest accepted regular AR or MA order.
pub const MAX_REGULAR_ORDER: usize = 6;
/// Largest accepted seasonal AR or MA order.
pub const MAX_SEASONAL_ORDER: usize = 2;
/// Largest accepted regular differencing order.
pub const MAX_DIFFERENCING: usize = 2;
/// Largest accepted seasonal differencing order.
pub const MAX_SEASONAL_DIFFERENCING: usize = 1;
/// Largest accepted number of series per batch.
pub const MAX_COUNT: usize = 10_000;
/// Largest accepted series length.
pub const MAX_LENGTH: usize = 100_000;

/// Explicit base coefficients of the model, in the `1 + c1*B + ...`
/// convention used by [`SarimaModel`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Coefficients {
    /// Regular AR coefficients.
    pub phi: Vec<f64>,
    /// Regular MA coefficients.
    pub theta: Vec<f64>,
    /// Seasonal AR coefficients.
    pub bphi: Vec<f64>,
    /// Seasonal MA coefficients.
    pub btheta: Vec<f64>,
}

impl Coefficients {
    fn is_empty(&self) -> bool {
        self.phi.is_empty() && self.theta.is_empty() && self.bphi.is_empty() && self.btheta.is_empty()
    }

    fn normalized(mut self) -> Self {
        for v in [&mut self.phi, &mut self.theta, &mut self.bphi, &mut self.btheta] {
            v.iter_mut().for_each(|c| *c = normalize_zero(*c));
        }
        self
    }
}

/// Immutable description of one synthetic batch.
///
/// Only obtainable through [`ModelSpecification::builder()`], which
/// validates every field. Two specifications with equal fields always
/// generate identical batches.
#[derive(Clone, Debug, PartialEq)]
pub struct ModelSpecification {
    p: usize,
    d: usize,
    q: usize,
    bp: usize,
    bd: usize,
    bq: usize,
    frequency: Frequency,
    seed: u64,
    noise_scale: f64,
    count: usize,
    length: usize,
    coefficients: Option<Coefficients>,
    base: SarimaModel,
}

impl ModelSpecification {
    /// Starts a builder with the defaults listed on [`SpecBuilder`].
    pub fn builder() -> SpecBuilder {
        SpecBuilder::new()
    }

    /// Returns the regular `(p, d, q)` orders.
    pub fn regular_orders(&self) -> (usize, usize, usize) {
        (self.p, self.d, self.q)
    }

    /// Returns the seasonal `(bp, bd, bq)` orders.
    pub fn seasonal_orders(&self) -> (usize, usize, usize) {
        (self.bp, self.bd, self.bq)
    }

    /// Returns the sampling frequency.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the seasonal period, derived from the frequency.
    pub fn period(&self) -> usize {
        self.frequency.seasonal_period()
    }

    /// Returns the batch seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the standard deviation of the coefficient perturbation.
    pub fn noise_scale(&self) -> f64 {
        self.noise_scale
    }

    /// Returns the number of series in the batch.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the number of observations per series.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the explicit base coefficients, if any.
    pub fn coefficients(&self) -> Option<&Coefficients> {
        self.coefficients.as_ref()
    }

    /// Returns the model orders.
    pub fn order(&self) -> SarimaOrder {
        self.base.order()
    }

    /// Returns the base model: explicit coefficients, or all zeros.
    pub fn base_model(&self) -> SarimaModel {
        self.base.clone()
    }

    /// Returns the validated model all batch members are randomized from.
    ///
    /// Falls back to [`SarimaModel::default_for()`] when the base model is
    /// not stationary.
    pub fn canonical_model(&self) -> SarimaModel {
        build_canonical(self.base_model())
    }
}

impl fmt::Display for ModelSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{})({},{},{}){}",
            self.p,
            self.d,
            self.q,
            self.bp,
            self.bd,
            self.bq,
            self.period()
        )
    }
}

/// Builder for [`ModelSpecification`].
///
/// Defaults: airline orders `(0,1,1)(0,1,1)`, monthly frequency, seed 0,
/// noise scale 0.1, 100 series of 240 observations, no explicit
/// coefficients.
///
/// # Example
///
/// ```
/// use rnd_calendar::Frequency;
/// use rnd_provider::ModelSpecification;
///
/// let spec = ModelSpecification::builder()
///     .regular_orders(1, 0, 0)
///     .seasonal_orders(0, 0, 0)
///     .frequency(Frequency::Monthly)
///     .seed(42)
///     .noise_scale(0.1)
///     .count(3)
///     .length(24)
///     .build()
///     .unwrap();
/// assert_eq!(spec.to_string(), "(1,0,0)(0,0,0)12");
/// ```
#[derive(Clone, Debug)]
pub struct SpecBuilder {
    p: usize,
    d: usize,
    q: usize,
    bp: usize,
    bd: usize,
    bq: usize,
    frequency: Frequency,
    seed: u64,
    noise_scale: f64,
    count: usize,
    length: usize,
    coefficients: Option<Coefficients>,
}

impl SpecBuilder {
    /// Creates a builder with defaults.
    pub fn new() -> Self {
        Self {
            p: 0,
            d: 1,
            q: 1,
            bp: 0,
            bd: 1,
            bq: 1,
            frequency: Frequency::Monthly,
            seed: 0,
            noise_scale: 0.1,
            count: 100,
            length: 240,
            coefficients: None,
        }
    }

    /// Sets the regular `(p, d, q)` orders.
    pub fn regular_orders(mut self, p: usize, d: usize, q: usize) -> Self {
        self.p = p;
        self.d = d;
        self.q = q;
        self
    }

    /// Sets the seasonal `(bp, bd, bq)` orders.
    pub fn seasonal_orders(mut self, bp: usize, bd: usize, bq: usize) -> Self {
        self.bp = bp;
        self.bd = bd;
        self.bq = bq;
        self
    }

    /// Sets the sampling frequency.
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = frequency;
        self
    }

    /// Sets the batch seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the coefficient perturbation standard deviation.
    pub fn noise_scale(mut self, noise_scale: f64) -> Self {
        self.noise_scale = noise_scale;
        self
    }

    /// Sets the number of series.
    pub fn count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Sets the series length.
    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Sets explicit base coefficients.
    pub fn coefficients(mut self, coefficients: Coefficients) -> Self {
        self.coefficients = Some(coefficients);
        self
    }

    /// Validates the fields and builds the specification.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::InvalidSpecification`] if an order exceeds
    /// its bound, a yearly frequency has seasonal orders, `noise_scale` is
    /// negative or non-finite, `count` or `length` is zero or too large, or
    /// explicit coefficients do not match the orders.
    pub fn build(self) -> Result<ModelSpecification, ProviderError> {
        check_bound("p", self.p, MAX_REGULAR_ORDER)?;
        check_bound("q", self.q, MAX_REGULAR_ORDER)?;
        check_bound("d", self.d, MAX_DIFFERENCING)?;
        check_bound("bp", self.bp, MAX_SEASONAL_ORDER)?;
        check_bound("bq", self.bq, MAX_SEASONAL_ORDER)?;
        check_bound("bd", self.bd, MAX_SEASONAL_DIFFERENCING)?;

        if self.frequency == Frequency::Yearly && self.bp + self.bd + self.bq > 0 {
            return Err(invalid("yearly series cannot have seasonal orders".to_string()));
        }
        if !self.noise_scale.is_finite() || self.noise_scale < 0.0 {
            return Err(invalid(format!(
                "noise_scale must be finite and non-negative, got {}",
                self.noise_scale
            )));
        }
        if self.count == 0 || self.count > MAX_COUNT {
            return Err(invalid(format!(
                "count must be in 1..={MAX_COUNT}, got {}",
                self.count
            )));
        }
        if self.length == 0 || self.length > MAX_LENGTH {
            return Err(invalid(format!(
                "length must be in 1..={MAX_LENGTH}, got {}",
                self.length
            )));
        }

        let coefficients = self
            .coefficients
            .filter(|c| !c.is_empty())
            .map(Coefficients::normalized);

        let order = SarimaOrder::new(self.p, self.d, self.q).with_seasonal(
            self.bp,
            self.bd,
            self.bq,
            self.frequency.seasonal_period(),
        )?;
        let base = match &coefficients {
            Some(c) => SarimaModel::from_parts(
                order,
                c.phi.clone(),
                c.theta.clone(),
                c.bphi.clone(),
                c.btheta.clone(),
            )?,
            None => SarimaModel::zeros(order),
        };

        Ok(ModelSpecification {
            p: self.p,
            d: self.d,
            q: self.q,
            bp: self.bp,
            bd: self.bd,
            bq: self.bq,
            frequency: self.frequency,
            seed: self.seed,
            noise_scale: normalize_zero(self.noise_scale),
            count: self.count,
            length: self.length,
            coefficients,
            base,
        })
    }
}

impl Default for SpecBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn check_bound(name: &str, value: usize, max: usize) -> Result<(), ProviderError> {
    if value > max {
        return Err(invalid(format!("{name} must be at most {max}, got {value}")));
    }
    Ok(())
}

fn invalid(reason: String) -> ProviderError {
    ProviderError::InvalidSpecification { reason }
}

/// Maps `-0.0` to `0.0` so equal values share one textual key.
fn normalize_zero(x: f64) -> f64 {
    x + 0.0
}
