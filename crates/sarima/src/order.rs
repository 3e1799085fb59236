//! Seasonal ARIMA orders.

use std::fmt;

use crate::error::SarimaError;

/// Orders of a seasonal ARIMA `(p, d, q)(bp, bd, bq)s` model.
///
/// # Example
///
/// ```
/// use rnd_sarima::SarimaOrder;
///
/// let airline = SarimaOrder::new(0, 1, 1).with_seasonal(0, 1, 1, 12).unwrap();
/// assert_eq!(airline.to_string(), "(0,1,1)(0,1,1)12");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SarimaOrder {
    p: usize,
    d: usize,
    q: usize,
    bp: usize,
    bd: usize,
    bq: usize,
    period: usize,
}

impl SarimaOrder {
    /// Creates a non-seasonal `(p, d, q)` order with period 1.
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self {
            p,
            d,
            q,
            bp: 0,
            bd: 0,
            bq: 0,
            period: 1,
        }
    }

    /// Sets the seasonal orders and the seasonal period.
    ///
    /// # Errors
    ///
    /// Returns [`SarimaError::ZeroPeriod`] if `period` is zero.
    pub fn with_seasonal(
        mut self,
        bp: usize,
        bd: usize,
        bq: usize,
        period: usize,
    ) -> Result<Self, SarimaError> {
        if period == 0 {
            return Err(SarimaError::ZeroPeriod);
        }
        self.bp = bp;
        self.bd = bd;
        self.bq = bq;
        self.period = period;
        Ok(self)
    }

    /// Returns the regular AR order.
    pub fn p(&self) -> usize {
        self.p
    }

    /// Returns the regular differencing order.
    pub fn d(&self) -> usize {
        self.d
    }

    /// Returns the regular MA order.
    pub fn q(&self) -> usize {
        self.q
    }

    /// Returns the seasonal AR order.
    pub fn bp(&self) -> usize {
        self.bp
    }

    /// Returns the seasonal differencing order.
    pub fn bd(&self) -> usize {
        self.bd
    }

    /// Returns the seasonal MA order.
    pub fn bq(&self) -> usize {
        self.bq
    }

    /// Returns the seasonal period.
    pub fn period(&self) -> usize {
        self.period
    }

    /// Returns the total number of ARMA coefficients.
    pub fn n_coefficients(&self) -> usize {
        self.p + self.q + self.bp + self.bq
    }
}

impl fmt::Display for SarimaOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{})({},{},{}){}",
            self.p, self.d, self.q, self.bp, self.bd, self.bq, self.period
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_seasonal_defaults() {
        let o = SarimaOrder::new(2, 1, 1);
        assert_eq!((o.p(), o.d(), o.q()), (2, 1, 1));
        assert_eq!((o.bp(), o.bd(), o.bq(), o.period()), (0, 0, 0, 1));
        assert_eq!(o.n_coefficients(), 3);
    }

    #[test]
    fn seasonal_orders() {
        let o = SarimaOrder::new(1, 0, 1).with_seasonal(1, 1, 1, 4).unwrap();
        assert_eq!((o.bp(), o.bd(), o.bq(), o.period()), (1, 1, 1, 4));
        assert_eq!(o.n_coefficients(), 4);
    }

    #[test]
    fn zero_period_rejected() {
        let err = SarimaOrder::new(1, 0, 0).with_seasonal(0, 0, 0, 0).unwrap_err();
        assert_eq!(err, SarimaError::ZeroPeriod);
    }

    #[test]
    fn display() {
        let o = SarimaOrder::new(1, 0, 0).with_seasonal(0, 0, 0, 12).unwrap();
        assert_eq!(o.to_string(), "(1,0,0)(0,0,0)12");
    }
}
