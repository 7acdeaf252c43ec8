//! Market data provider interface for future data source integration.
//!
//! The engine only consumes already-resolved readings; missing lookups
//! are an error, never filler data.

use async_trait::async_trait;

use crate::error::EngineError;
use crate::models::signal::TechnicalReading;

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Latest technical readings for a symbol.
    async fn technical_reading(&self, symbol: &str) -> Result<TechnicalReading, EngineError>;
}

/// Static readings for the demo instruments, used by the demo driver,
/// the default API state, and tests.
pub struct FixtureMarketDataProvider {
    readings: Vec<(&'static str, TechnicalReading)>,
}

impl FixtureMarketDataProvider {
    pub fn new() -> Self {
        Self {
            readings: vec![
                ("005930", TechnicalReading::new(35.0, 8.5, 3.2)),
                ("000660", TechnicalReading::new(28.0, 12.3, 6.8)),
                ("373220", TechnicalReading::new(65.0, -3.2, -1.5)),
            ],
        }
    }

    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.readings.iter().map(|(symbol, _)| *symbol)
    }
}

impl Default for FixtureMarketDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataProvider for FixtureMarketDataProvider {
    async fn technical_reading(&self, symbol: &str) -> Result<TechnicalReading, EngineError> {
        self.readings
            .iter()
            .find(|(known, _)| *known == symbol)
            .map(|(_, reading)| *reading)
            .ok_or_else(|| EngineError::UnknownSymbol(symbol.to_string()))
    }
}
