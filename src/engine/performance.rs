//! Expected performance estimator.

use crate::models::allocation::AllocationResult;
use crate::models::portfolio::PerformanceEstimate;
use crate::models::profile::{MacroStance, RiskProfile};

const EQUITY_RETURN: f64 = 0.12;
const NON_EQUITY_RETURN: f64 = 0.04;
const EQUITY_VOLATILITY: f64 = 0.25;
const NON_EQUITY_VOLATILITY: f64 = 0.05;

/// Derive annualized return/volatility expectations and a risk-adjusted
/// efficiency ratio from the final equity weight.
///
/// The risk multiplier shifts by ±0.2 for the risk profile and ±0.1 for
/// the macro stance; both shifts are additive and can apply together.
pub fn estimate(
    allocation: &AllocationResult,
    risk: RiskProfile,
    macro_stance: MacroStance,
) -> PerformanceEstimate {
    let equity_weight = allocation.equity / 100.0;
    let multiplier = risk_multiplier(risk, macro_stance);

    let expected_return =
        equity_weight * EQUITY_RETURN * multiplier + (1.0 - equity_weight) * NON_EQUITY_RETURN;
    let expected_volatility = equity_weight * EQUITY_VOLATILITY * multiplier
        + (1.0 - equity_weight) * NON_EQUITY_VOLATILITY;

    let sharpe_like_ratio = if expected_volatility > 0.0 {
        expected_return / expected_volatility
    } else {
        0.0
    };

    PerformanceEstimate {
        expected_return,
        expected_volatility,
        sharpe_like_ratio,
    }
}

fn risk_multiplier(risk: RiskProfile, macro_stance: MacroStance) -> f64 {
    let mut multiplier = 1.0;

    match risk {
        RiskProfile::Aggressive => multiplier += 0.2,
        RiskProfile::Conservative => multiplier -= 0.2,
        RiskProfile::Neutral => {}
    }
    match macro_stance {
        MacroStance::Aggressive => multiplier += 0.1,
        MacroStance::Conservative => multiplier -= 0.1,
        MacroStance::Neutral => {}
    }

    multiplier
}
