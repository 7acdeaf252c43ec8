//! Momentum + RSI signal scorer.
//!
//! Three weighted bracket tables (RSI dominant, then short- and
//! long-term momentum) summed and clamped to 0-100. The most extreme
//! matching bracket always wins, so overlapping ranges never stack.

use crate::models::signal::{SignalAction, SignalVariant, TechnicalReading};

const STRONG_BUY_MIN: i32 = 70;
const MODERATE_BUY_MIN: i32 = 40;

/// Neutral starting score for the entry-timing variant.
const ENTRY_BASE: i32 = 50;

/// Score a reading with the canonical general table.
pub fn score(reading: &TechnicalReading) -> u8 {
    score_with_variant(reading, SignalVariant::General)
}

/// Score a reading with an explicit table variant.
///
/// Total over all real-valued inputs; an RSI outside [0,100] simply
/// lands in the nearest extreme bracket.
pub fn score_with_variant(reading: &TechnicalReading, variant: SignalVariant) -> u8 {
    let raw = match variant {
        SignalVariant::General => {
            rsi_contribution(reading.rsi)
                + short_momentum_contribution(reading.short_term_momentum_pct)
                + long_momentum_contribution(reading.long_term_momentum_pct)
        }
        SignalVariant::Entry => {
            ENTRY_BASE
                + entry_rsi_contribution(reading.rsi)
                + entry_short_momentum_contribution(reading.short_term_momentum_pct)
                + long_momentum_contribution(reading.long_term_momentum_pct)
        }
    };

    raw.clamp(0, 100) as u8
}

/// Interpretation band for a clamped score.
pub fn action_for(score: u8) -> SignalAction {
    if i32::from(score) >= STRONG_BUY_MIN {
        SignalAction::StrongBuy
    } else if i32::from(score) >= MODERATE_BUY_MIN {
        SignalAction::ModerateBuy
    } else {
        SignalAction::HoldOrSell
    }
}

fn rsi_contribution(rsi: f64) -> i32 {
    if rsi < 30.0 {
        50
    } else if rsi < 40.0 {
        30
    } else if rsi < 50.0 {
        10
    } else if rsi > 80.0 {
        -50
    } else if rsi > 70.0 {
        -30
    } else {
        0
    }
}

fn short_momentum_contribution(pct: f64) -> i32 {
    if pct > 5.0 {
        30
    } else if pct > 0.0 {
        15
    } else if pct < -10.0 {
        -30
    } else if pct < -5.0 {
        -20
    } else {
        0
    }
}

fn long_momentum_contribution(pct: f64) -> i32 {
    if pct > 10.0 {
        20
    } else if pct > 0.0 {
        10
    } else if pct < -20.0 {
        -25
    } else if pct < -10.0 {
        -15
    } else {
        0
    }
}

/// Entry variant RSI ladder: shallower buy side, same sell side.
fn entry_rsi_contribution(rsi: f64) -> i32 {
    if rsi < 30.0 {
        40
    } else if rsi < 40.0 {
        25
    } else if rsi < 50.0 {
        10
    } else if rsi > 80.0 {
        -50
    } else if rsi > 70.0 {
        -30
    } else {
        0
    }
}

fn entry_short_momentum_contribution(pct: f64) -> i32 {
    if pct > 5.0 {
        20
    } else if pct > 0.0 {
        10
    } else if pct < -10.0 {
        -25
    } else if pct < -5.0 {
        -15
    } else {
        0
    }
}
