//! Allocation resolver.
//!
//! Merges a strategy-tier base template with the macro-stance shift and
//! the risk-profile fine shift, then renormalizes to 100%.

use crate::models::allocation::AllocationResult;
use crate::models::profile::{AllocationStrategy, MacroStance, RiskProfile};

const BOND_MACRO_CEILING: f64 = 60.0;
const BOND_FINE_CEILING: f64 = 50.0;
const BOND_FLOOR: f64 = 10.0;
const BOND_FINE_FLOOR: f64 = 15.0;
const EQUITY_MACRO_CEILING: f64 = 80.0;
const EQUITY_FINE_CEILING: f64 = 75.0;
const EQUITY_FLOOR: f64 = 20.0;
const EQUITY_FINE_FLOOR: f64 = 30.0;
const CASH_CEILING: f64 = 25.0;
const CASH_FLOOR: f64 = 5.0;

/// Fixed base template for a strategy tier. Weights sum to 100.
pub fn base_template(strategy: AllocationStrategy) -> AllocationResult {
    match strategy {
        AllocationStrategy::Defensive => AllocationResult::new(45.0, 35.0, 15.0, 5.0),
        AllocationStrategy::Balanced => AllocationResult::new(30.0, 55.0, 10.0, 5.0),
        AllocationStrategy::Aggressive => AllocationResult::new(15.0, 75.0, 5.0, 5.0),
    }
}

/// Resolve the final allocation for a journey's selections.
///
/// Clamps apply independently per asset class, in listed order; a later
/// clamp never re-triggers an earlier one. Gold is never shifted, it
/// only participates in the renormalization divisor. Total over all
/// enum combinations.
pub fn resolve(
    strategy: AllocationStrategy,
    macro_stance: MacroStance,
    risk: RiskProfile,
) -> AllocationResult {
    let mut weights = base_template(strategy);

    apply_macro_shift(&mut weights, macro_stance);
    apply_risk_shift(&mut weights, risk, macro_stance);

    renormalize(weights)
}

fn apply_macro_shift(weights: &mut AllocationResult, macro_stance: MacroStance) {
    match macro_stance {
        MacroStance::Conservative => {
            weights.bond = (weights.bond + 10.0).min(BOND_MACRO_CEILING);
            weights.equity = (weights.equity - 8.0).max(EQUITY_FLOOR);
            weights.cash = (weights.cash + 8.0).min(CASH_CEILING);
        }
        MacroStance::Aggressive => {
            weights.equity = (weights.equity + 10.0).min(EQUITY_MACRO_CEILING);
            weights.bond = (weights.bond - 8.0).max(BOND_FLOOR);
            weights.cash = (weights.cash - 2.0).max(CASH_FLOOR);
        }
        MacroStance::Neutral => {}
    }
}

/// Fine adjustment from the risk profile, skipped when the macro shift
/// already pushed the same direction so the tilt is not stacked twice.
fn apply_risk_shift(weights: &mut AllocationResult, risk: RiskProfile, macro_stance: MacroStance) {
    match risk {
        RiskProfile::Conservative if macro_stance != MacroStance::Conservative => {
            weights.bond = (weights.bond + 5.0).min(BOND_FINE_CEILING);
            weights.equity = (weights.equity - 5.0).max(EQUITY_FINE_FLOOR);
        }
        RiskProfile::Aggressive if macro_stance != MacroStance::Aggressive => {
            weights.equity = (weights.equity + 5.0).min(EQUITY_FINE_CEILING);
            weights.bond = (weights.bond - 5.0).max(BOND_FINE_FLOOR);
        }
        _ => {}
    }
}

/// Scale every weight so the set sums to 100, rounded to one decimal.
/// This restores the invariant no matter how many clamps fired.
fn renormalize(weights: AllocationResult) -> AllocationResult {
    let total = weights.total();
    let scale = |w: f64| (w / total * 1000.0).round() / 10.0;

    AllocationResult::new(
        scale(weights.bond),
        scale(weights.equity),
        scale(weights.cash),
        scale(weights.gold),
    )
}
