// ==========================================
// Salon Color Engine - Error Types
// ==========================================
// InvalidDomainValue is the only error an in-range caller can hit:
// a value outside an enumerated/ranged domain is a caller bug.
// Incompatible combinations and patch-test blocks are ordinary
// return values (is_compatible=false / can_proceed=false), never
// errors. Malformed ratio strings default to 1:1, never error.
// ==========================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid domain value for {field}: got {value}, expected {expected}")]
    InvalidDomainValue {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias used across the engine.
pub type EngineResult<T> = Result<T, EngineError>;
