//! # rnd-provider
//!
//! Addressable, cached batches of synthetic seasonal ARIMA series.
//!
//! A [`ModelSpecification`] describes one batch: model orders, frequency,
//! seed, noise scale, number and length of series. Its [`ConfigKey`] is the
//! canonical text identity used both for addressing and for caching. Each
//! series of the batch is a child, addressed by [`ChildRef`].
//!
//! ## Architecture
//!
//! ```mermaid
//! graph TD
//!     S["ModelSpecification"] -->|"ConfigKey::encode()"| K["ConfigKey"]
//!     K -->|"RandomProvider::child_refs()"| C["ChildRef 0..count"]
//!     C -->|"RandomProvider::resolve()"| R["ResolvedSeries"]
//!     R -.->|"miss"| B["compute_batch()"]
//!     B --> X["BatchCache"]
//!     X -.->|"hit"| R
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `spec` | Validated batch specification and its builder |
//! | `key` | Key encoding and child monikers |
//! | `cache` | Compute-once keyed cache |
//! | `batch` | Parallel batch generation |
//! | `provider` | Catalog operations |
//! | `error` | Error types |

mod batch;
mod cache;
mod error;
mod key;
mod provider;
mod spec;

pub use batch::{Batch, compute_batch};
pub use cache::{BatchCache, CacheStats};
pub use error::{AddressingError, ProviderError};
pub use key::{ChildRef, ConfigKey, KEY_PREFIX};
pub use provider::{ANCHOR_YEAR, RandomProvider, ResolvedSeries, SOURCE, VERSION};
pub use spec::{
    Coefficients, MAX_COUNT, MAX_DIFFERENCING, MAX_LENGTH, MAX_REGULAR_ORDER,
    MAX_SEASONAL_DIFFERENCING, MAX_SEASONAL_ORDER, ModelSpecification, SpecBuilder,
};
