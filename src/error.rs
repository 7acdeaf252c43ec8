//! Engine error taxonomy.

use thiserror::Error;

/// Errors surfaced by the engine and its data boundary.
///
/// The core functions are total over valid enum inputs, so the only
/// engine-originated kind is `InvalidInput` from parsing an enum name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// An enum argument outside its declared set, e.g. an unrecognized
    /// strategy name. A programming error on the caller's side, not a
    /// condition to retry.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The market data provider has no reading for the requested symbol.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),
}
