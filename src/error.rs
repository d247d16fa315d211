//! Error taxonomy for share decoding and polynomial reconstruction.
//!
//! Every failure in the core is a deterministic input-validation error scoped
//! to a single record. Nothing here is transient, so there is no retry or
//! recovery machinery; callers report the error and move on to the next
//! record.

/// Errors produced while decoding shares and reconstructing the polynomial.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReconstructError {
    /// A character outside the `[0-9a-zA-Z]` digit alphabet.
    #[error("invalid digit: {0}")]
    InvalidDigit(char),

    /// A digit whose value is not representable in the stated base.
    #[error("digit {digit} invalid for base {base}")]
    DigitOutOfRange { digit: char, base: u32 },

    /// A base outside the supported range `[2, 36]`.
    #[error("unsupported base: {0}")]
    InvalidBase(u32),

    /// A decoded share value that does not fit the solver's exact integer
    /// range of `f64` (magnitude above 2^53 - 1).
    #[error("value too large for safe number conversion: x={x}, value={value}, base={base}")]
    ValueOutOfRange { x: u64, value: String, base: u32 },

    /// Fewer qualifying shares than the reconstruction threshold.
    #[error("insufficient points: {required} required, {available} available")]
    InsufficientPoints { required: usize, available: usize },

    /// The Vandermonde system has no unique solution. This happens when two
    /// points share an x coordinate, or when the system is empty.
    #[error("singular linear system")]
    SingularSystem,
}
