//! Per-member random streams.
//!
//! Every batch member draws from its own ChaCha8 stream, selected by the
//! member index on top of the batch seed. A member's values therefore do not
//! depend on how many other members were generated, or in which order.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::model::SarimaModel;
use crate::randomize::randomize;
use crate::simulate::simulate;

/// Returns the random stream of batch member `index` for `seed`.
///
/// # Example
///
/// ```
/// use rand::Rng;
/// use rnd_sarima::member_stream;
///
/// let a: u64 = member_stream(42, 3).random();
/// let b: u64 = member_stream(42, 3).random();
/// assert_eq!(a, b);
/// ```
pub fn member_stream(seed: u64, index: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(index);
    rng
}

/// Generates batch member `index` in isolation.
///
/// The member's stream first randomizes `canonical` with `noise_scale`, then
/// drives the simulation of `length` observations.
pub fn generate_member(
    canonical: &SarimaModel,
    noise_scale: f64,
    length: usize,
    seed: u64,
    index: u64,
) -> Vec<f64> {
    let mut rng = member_stream(seed, index);
    let model = randomize(canonical, noise_scale, &mut rng);
    simulate(&model, length, &mut rng)
}
