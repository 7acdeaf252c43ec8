//! The portfolio and signal engine.
//!
//! Pure, synchronous functions only. Every call is independent and
//! idempotent; identical inputs yield bit-identical outputs.

pub mod allocation;
pub mod performance;
pub mod plan;
pub mod signal;

pub use allocation::{base_template, resolve};
pub use performance::estimate;
pub use plan::{build_portfolio, dca_tranches, investment_amounts};
pub use signal::{action_for, score, score_with_variant};
