//! Asset allocation value types.

use serde::{Deserialize, Serialize};

/// The four asset classes every allocation is expressed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum AssetClass {
    Bond,
    Equity,
    Cash,
    Gold,
}

impl AssetClass {
    pub const ALL: [AssetClass; 4] = [
        AssetClass::Bond,
        AssetClass::Equity,
        AssetClass::Cash,
        AssetClass::Gold,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bond => "Bond",
            Self::Equity => "Equity",
            Self::Cash => "Cash",
            Self::Gold => "Gold",
        }
    }
}

/// A percentage split across the four asset classes.
///
/// Values are percentages; a freshly resolved allocation sums to 100.0
/// within one-decimal rounding. This is a computed snapshot, never
/// mutated after resolution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AllocationResult {
    pub bond: f64,
    pub equity: f64,
    pub cash: f64,
    pub gold: f64,
}

impl AllocationResult {
    pub fn new(bond: f64, equity: f64, cash: f64, gold: f64) -> Self {
        Self {
            bond,
            equity,
            cash,
            gold,
        }
    }

    pub fn get(&self, asset: AssetClass) -> f64 {
        match asset {
            AssetClass::Bond => self.bond,
            AssetClass::Equity => self.equity,
            AssetClass::Cash => self.cash,
            AssetClass::Gold => self.gold,
        }
    }

    pub fn total(&self) -> f64 {
        self.bond + self.equity + self.cash + self.gold
    }

    /// Weights in fixed asset-class order.
    pub fn iter(&self) -> impl Iterator<Item = (AssetClass, f64)> + '_ {
        AssetClass::ALL.iter().map(move |&asset| (asset, self.get(asset)))
    }
}
