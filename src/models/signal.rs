//! Signal scoring input and interpretation types.

use serde::{Deserialize, Serialize};

/// Per-instrument technical readings at evaluation time.
///
/// Momentum values are the percentage deviation of the current price
/// from a trailing moving average (20-period short, 60-period long).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TechnicalReading {
    pub rsi: f64,
    pub short_term_momentum_pct: f64,
    pub long_term_momentum_pct: f64,
}

impl TechnicalReading {
    pub fn new(rsi: f64, short_term_momentum_pct: f64, long_term_momentum_pct: f64) -> Self {
        Self {
            rsi,
            short_term_momentum_pct,
            long_term_momentum_pct,
        }
    }
}

/// Which scoring table to apply.
///
/// The dashboards shipped two weighted tables: the general
/// momentum/RSI signal (zero base) and the entry-timing score
/// (50-point neutral base with a shallower RSI ladder). `General` is
/// the canonical default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum SignalVariant {
    #[default]
    General,
    Entry,
}

/// Caller-facing interpretation band for a 0-100 signal score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum SignalAction {
    /// Score 70 and above.
    StrongBuy,
    /// Score in 40..70.
    ModerateBuy,
    /// Score below 40.
    HoldOrSell,
}
