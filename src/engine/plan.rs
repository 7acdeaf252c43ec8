//! Portfolio plan builder.
//!
//! Thin orchestration over the pure pieces: resolve the allocation,
//! estimate expectations, split the user's assets into per-class
//! amounts and staged-entry tranches.

use chrono::Utc;

use crate::engine::{allocation, performance};
use crate::models::allocation::AllocationResult;
use crate::models::portfolio::{AssetAmounts, PortfolioPlan, Tranche};
use crate::models::profile::SessionProfile;

/// Staged-entry schedule: percent of the amount committed at each
/// progressively deeper RSI level.
const TRANCHE_SCHEDULE: [(i64, f64); 4] = [(40, 50.0), (30, 40.0), (20, 30.0), (10, 20.0)];

/// Build the end-of-journey portfolio for one session.
pub fn build_portfolio(profile: &SessionProfile, total_assets: f64) -> PortfolioPlan {
    let allocation = allocation::resolve(profile.strategy, profile.macro_stance, profile.risk);
    let estimate = performance::estimate(&allocation, profile.risk, profile.macro_stance);
    let amounts = investment_amounts(&allocation, total_assets);

    PortfolioPlan {
        profile: *profile,
        allocation,
        estimate,
        amounts,
        total_assets,
        generated_at: Utc::now(),
    }
}

/// Split total assets across the allocation, truncated to whole
/// currency units per class.
pub fn investment_amounts(allocation: &AllocationResult, total_assets: f64) -> AssetAmounts {
    let amount = |weight: f64| (total_assets * weight / 100.0) as i64;

    AssetAmounts {
        bond: amount(allocation.bond),
        equity: amount(allocation.equity),
        cash: amount(allocation.cash),
        gold: amount(allocation.gold),
    }
}

/// Split one invested amount into RSI-gated installments.
///
/// Fractions sum to 1.0; each installment amount truncates
/// independently, so the tranche total can undershoot the input by a
/// few units but never exceeds it.
pub fn dca_tranches(amount: i64) -> Vec<Tranche> {
    TRANCHE_SCHEDULE
        .iter()
        .map(|&(percent, rsi_gate)| Tranche {
            fraction: percent as f64 / 100.0,
            amount: amount * percent / 100,
            rsi_gate,
        })
        .collect()
}
