//! Portfolio plan output types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::allocation::AllocationResult;
use crate::models::profile::SessionProfile;

/// Annualized expectations derived from the final stock/bond mix.
///
/// `sharpe_like_ratio` is expected return over expected volatility, a
/// simplified risk-adjusted efficiency measure, not a Sharpe ratio
/// against a risk-free rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceEstimate {
    pub expected_return: f64,
    pub expected_volatility: f64,
    pub sharpe_like_ratio: f64,
}

/// One staged-entry installment, gated on an RSI level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tranche {
    /// Share of the full amount committed in this installment.
    pub fraction: f64,
    /// Amount in whole currency units, truncated.
    pub amount: i64,
    /// Enter when RSI is at or below this level.
    pub rsi_gate: f64,
}

/// The composed end-of-journey deliverable: allocation, expectations,
/// and per-asset invested amounts for the user's total assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioPlan {
    pub profile: SessionProfile,
    pub allocation: AllocationResult,
    pub estimate: PerformanceEstimate,
    /// Whole currency units per asset class, in `AssetClass::ALL` order.
    pub amounts: AssetAmounts,
    pub total_assets: f64,
    pub generated_at: DateTime<Utc>,
}

/// Invested amount per asset class, truncated to whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssetAmounts {
    pub bond: i64,
    pub equity: i64,
    pub cash: i64,
    pub gold: i64,
}

impl AssetAmounts {
    pub fn total(&self) -> i64 {
        self.bond + self.equity + self.cash + self.gold
    }
}
