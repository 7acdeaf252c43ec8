//! User profile and journey selection types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Risk appetite chosen once at the start of the journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum RiskProfile {
    Conservative,
    Neutral,
    Aggressive,
}

/// The user's read of the macro environment.
///
/// Independent from [`RiskProfile`]; a cautious investor can still take
/// an aggressive macro view, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum MacroStance {
    Conservative,
    Neutral,
    Aggressive,
}

/// Base allocation template selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum AllocationStrategy {
    Defensive,
    Balanced,
    Aggressive,
}

impl FromStr for RiskProfile {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Conservative" => Ok(Self::Conservative),
            "Neutral" => Ok(Self::Neutral),
            "Aggressive" => Ok(Self::Aggressive),
            other => Err(EngineError::InvalidInput(format!(
                "unrecognized risk profile: {other}"
            ))),
        }
    }
}

impl FromStr for MacroStance {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Conservative" => Ok(Self::Conservative),
            "Neutral" => Ok(Self::Neutral),
            "Aggressive" => Ok(Self::Aggressive),
            other => Err(EngineError::InvalidInput(format!(
                "unrecognized macro stance: {other}"
            ))),
        }
    }
}

impl FromStr for AllocationStrategy {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Defensive" => Ok(Self::Defensive),
            "Balanced" => Ok(Self::Balanced),
            "Aggressive" => Ok(Self::Aggressive),
            other => Err(EngineError::InvalidInput(format!(
                "unrecognized allocation strategy: {other}"
            ))),
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conservative => write!(f, "Conservative"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Aggressive => write!(f, "Aggressive"),
        }
    }
}

impl fmt::Display for MacroStance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conservative => write!(f, "Conservative"),
            Self::Neutral => write!(f, "Neutral"),
            Self::Aggressive => write!(f, "Aggressive"),
        }
    }
}

impl fmt::Display for AllocationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defensive => write!(f, "Defensive"),
            Self::Balanced => write!(f, "Balanced"),
            Self::Aggressive => write!(f, "Aggressive"),
        }
    }
}

/// The journey's accumulated selections as one immutable value.
///
/// The presentation layer owns the single mutable copy of the wizard
/// state and passes this snapshot into the engine; the engine itself
/// never holds session state between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionProfile {
    pub risk: RiskProfile,
    #[serde(rename = "macro")]
    pub macro_stance: MacroStance,
    pub strategy: AllocationStrategy,
}

impl SessionProfile {
    pub fn new(risk: RiskProfile, macro_stance: MacroStance, strategy: AllocationStrategy) -> Self {
        Self {
            risk,
            macro_stance,
            strategy,
        }
    }
}
