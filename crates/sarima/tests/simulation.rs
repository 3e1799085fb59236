//! Statistical integration tests for rnd-sarima simulation.

use approx::assert_abs_diff_eq;
use rand::SeedableRng;
use rnd_sarima::{SarimaModel, SarimaOrder, generate_member, member_stream, simulate};

fn mean(x: &[f64]) -> f64 {
    x.iter().sum::<f64>() / x.len() as f64
}

fn acf(x: &[f64], lag: usize) -> f64 {
    let m = mean(x);
    let n = x.len() as f64;
    let var = x.iter().map(|v| (v - m).powi(2)).sum::<f64>() / n;
    let cov = x
        .iter()
        .skip(lag)
        .zip(x.iter())
        .map(|(a, b)| (a - m) * (b - m))
        .sum::<f64>()
        / n;
    cov / var
}

#[test]
fn ar1_lag1_autocorrelation() {
    // phi(B) = 1 - 0.7B, i.e. y_t = 0.7 y_(t-1) + e_t
    let order = SarimaOrder::new(1, 0, 0);
    let model = SarimaModel::from_parts(order, vec![-0.7], vec![], vec![], vec![]).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(456);
    let y = simulate(&model, 10_000, &mut rng);

    assert!(mean(&y).abs() < 0.2, "mean = {}", mean(&y));
    assert_abs_diff_eq!(acf(&y, 1), 0.7, epsilon = 0.05);
}

#[test]
fn seasonal_ar_shows_up_at_seasonal_lag() {
    let order = SarimaOrder::new(0, 0, 0).with_seasonal(1, 0, 0, 4).unwrap();
    let model = SarimaModel::from_parts(order, vec![], vec![], vec![-0.6], vec![]).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(99);
    let y = simulate(&model, 20_000, &mut rng);

    assert_abs_diff_eq!(acf(&y, 4), 0.6, epsilon = 0.05);
    assert!(acf(&y, 1).abs() < 0.05, "acf(1) = {}", acf(&y, 1));
}

#[test]
fn ma1_variance() {
    let theta = 0.6;
    let order = SarimaOrder::new(0, 0, 1);
    let model = SarimaModel::from_parts(order, vec![], vec![theta], vec![], vec![]).unwrap();
    let mut rng = rand::rngs::StdRng::seed_from_u64(789);
    let y = simulate(&model, 20_000, &mut rng);
    let m = mean(&y);
    let var = y.iter().map(|v| (v - m).powi(2)).sum::<f64>() / y.len() as f64;
    assert_abs_diff_eq!(var, 1.0 + theta * theta, epsilon = 0.1);
    assert_abs_diff_eq!(acf(&y, 1), theta / (1.0 + theta * theta), epsilon = 0.05);
}

#[test]
fn member_generation_is_order_independent() {
    let order = SarimaOrder::new(1, 0, 0).with_seasonal(0, 0, 0, 12).unwrap();
    let canonical = SarimaModel::zeros(order);

    let forward: Vec<Vec<f64>> = (0..5)
        .map(|i| generate_member(&canonical, 0.1, 24, 42, i))
        .collect();
    let backward: Vec<Vec<f64>> = (0..5)
        .rev()
        .map(|i| generate_member(&canonical, 0.1, 24, 42, i))
        .collect();

    for (i, series) in forward.iter().enumerate() {
        assert_eq!(series, &backward[4 - i]);
    }
}

#[test]
fn member_matches_manual_pipeline() {
    let order = SarimaOrder::new(1, 1, 1).with_seasonal(0, 1, 1, 12).unwrap();
    let canonical = SarimaModel::default_for(order);

    let mut rng = member_stream(7, 3);
    let model = rnd_sarima::randomize(&canonical, 0.25, &mut rng);
    let manual = simulate(&model, 48, &mut rng);

    assert_eq!(generate_member(&canonical, 0.25, 48, 7, 3), manual);
}
