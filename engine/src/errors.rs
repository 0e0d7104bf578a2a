//! Error types for the point generation engine.

use thiserror::Error;

/// Errors reported by the point generation engine.
///
/// Locally recoverable conditions (near-zero denominators, negative
/// radicands) are absorbed by epsilon guards and sentinel values inside the
/// samplers and never surface here. Everything in this enum is terminal for
/// the request that triggered it; the calling layer decides the external
/// representation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The requested curve family or form is not one of the supported
    /// variants. Produced only at the wire boundary; internally the variants
    /// are a closed enum.
    #[error("unknown curve type: {0}")]
    UnknownCurveType(String),

    /// The sample domain is unusable: zero resolution, an empty or
    /// non-finite window, or a modulus below 2.
    #[error("invalid sample domain: {0}")]
    InvalidDomain(String),

    /// A modular arithmetic routine was called outside its domain.
    #[error("arithmetic domain error: {0}")]
    ArithmeticDomain(String),

    /// The computation was abandoned through its cancel token.
    #[error("computation cancelled")]
    Cancelled,
}
