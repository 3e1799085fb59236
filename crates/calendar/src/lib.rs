//! # rnd-calendar
//!
//! Regular-frequency calendar arithmetic for synthetic time series.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["u16 periods per year"] -->|"Frequency::from_periods_per_year()"| B["Frequency"]
//!     B -->|"Period::start_of_year()"| C["Period"]
//!     C -->|".next() / .plus(n)"| C
//!     C -->|"period_sequence()"| D["Vec of Period"]
//!     C -->|".start_date()"| E["chrono::NaiveDate"]
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `frequency` | Supported sampling frequencies |
//! | `period` | A period within a year |
//! | `sequence` | Consecutive period generation |
//! | `error` | Error types |

mod error;
mod frequency;
mod period;
mod sequence;

pub use error::CalendarError;
pub use frequency::Frequency;
pub use period::Period;
pub use sequence::period_sequence;

pub use chrono::NaiveDate;
