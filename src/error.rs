use alloc::string::String;
use enough::StopReason;

use crate::pnm::PnmFormat;

/// Errors from PNM decoding, encoding and file I/O.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum PnmError {
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    #[error("unsupported format variant: {0:?}")]
    UnsupportedVariant(PnmFormat),

    #[error("unsupported max sample value {0:?} (only 255 is supported)")]
    UnsupportedDepth(String),

    #[error("truncated pixel data: expected {expected} samples, got {actual}")]
    TruncatedData { expected: usize, actual: usize },

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[cfg(feature = "std")]
    #[error("{}: {source}", .path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for PnmError {
    fn from(r: StopReason) -> Self {
        PnmError::Cancelled(r)
    }
}
