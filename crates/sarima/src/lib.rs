//! # rnd-sarima
//!
//! Seasonal ARIMA models for synthetic data generation: validity checking,
//! fallback to a default model, coefficient randomization and forward
//! simulation.
//!
//! ## Workflow
//!
//! ```mermaid
//! graph LR
//!     A["SarimaModel::from_parts(..)?"] -->|"build_canonical()"| B["canonical model"]
//!     B -->|"randomize(&m, stde, &mut rng)"| C["randomized model"]
//!     C -->|"simulate(&m, n, &mut rng)"| D["Vec of f64"]
//!     E["member_stream(seed, i)"] -.-> C
//!     E -.-> D
//! ```
//!
//! ## Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | phi | [`SarimaModel::phi()`] | regular AR coefficients |
//! | theta | [`SarimaModel::theta()`] | regular MA coefficients |
//! | bphi | [`SarimaModel::bphi()`] | seasonal AR coefficients |
//! | btheta | [`SarimaModel::btheta()`] | seasonal MA coefficients |
//! | s | [`SarimaOrder::period()`] | seasonal period |

mod error;
mod model;
mod order;
mod randomize;
mod simulate;
mod stream;

pub(crate) mod polynomial;

pub use error::SarimaError;
pub use model::{DEFAULT_AR, DEFAULT_MA, SarimaModel};
pub use order::SarimaOrder;
pub use randomize::{build_canonical, randomize};
pub use simulate::{simulate, simulate_with_sd};
pub use stream::{generate_member, member_stream};
