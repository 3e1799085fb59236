//! Lag polynomials in the `1 + c1*B + c2*B^2 + ...` convention.

/// Polynomial multiplication (convolution): `r[k] = sum_i a[i] * b[k - i]`.
pub(crate) fn polymul(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let mut r = vec![0.0; a.len() + b.len() - 1];
    for (i, &ai) in a.iter().enumerate() {
        for (j, &bj) in b.iter().enumerate() {
            r[i + j] += ai * bj;
        }
    }
    r
}

/// Builds `1 + c1*B^lag + c2*B^(2*lag) + ...` from `coeffs = [c1, c2, ...]`.
pub(crate) fn lag_poly(coeffs: &[f64], lag: usize) -> Vec<f64> {
    let mut poly = vec![0.0; coeffs.len() * lag + 1];
    poly[0] = 1.0;
    for (i, &c) in coeffs.iter().enumerate() {
        poly[(i + 1) * lag] = c;
    }
    poly
}

/// Builds `(1 - B)^d * (1 - B^period)^bd`.
pub(crate) fn differencing_poly(d: usize, bd: usize, period: usize) -> Vec<f64> {
    let mut poly = vec![1.0];
    for _ in 0..d {
        poly = polymul(&poly, &[1.0, -1.0]);
    }
    let seasonal = lag_poly(&[-1.0], period);
    for _ in 0..bd {
        poly = polymul(&poly, &seasonal);
    }
    poly
}

/// Returns `true` when all roots of `1 + c1*z + ... + ck*z^k` lie strictly
/// outside the unit circle.
///
/// Schur-Cohn step-down: the polynomial is stable iff every reflection
/// coefficient produced by the backward Levinson-Durbin recursion has
/// modulus below one. Non-finite coefficients are never stable.
pub(crate) fn is_stable(coeffs: &[f64]) -> bool {
    let mut a = coeffs.to_vec();
    while let Some(&r) = a.last() {
        // `!(x < 1)` also rejects NaN.
        if !(r.abs() < 1.0) {
            return false;
        }
        let k = a.len();
        let denom = 1.0 - r * r;
        a = (0..k - 1)
            .map(|i| (a[i] - r * a[k - 2 - i]) / denom)
            .collect();
    }
    true
}
