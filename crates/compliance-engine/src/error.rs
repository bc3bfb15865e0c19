use thiserror::Error;

/// Errors surfaced by the compliance engine
///
/// Every variant is recoverable by the caller. Expected outcomes are
/// never errors: a reverse search that matches nothing returns an empty
/// result, and an unparseable quick designation returns `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// The selection omitted a field its family requires. The caller
    /// should re-prompt rather than retry.
    #[error("device selection is missing required field: {0}")]
    IncompleteDescriptor(&'static str),

    /// Well-formed device with no tabulated maximum Zs, e.g. an
    /// unsupported rating or a fuse standard absent from the 5 s table.
    #[error("no tabulated maximum Zs for {0}")]
    UnknownDevice(String),

    /// Measured Zs values must be positive and finite; rejected before
    /// any table is consulted.
    #[error("measured Zs must be positive and finite, got {0}")]
    InvalidMeasurement(f64),
}
