use alloc::vec::Vec;
use enough::Stop;

use crate::error::PnmError;
use crate::pixel::PixelBuffer;
use crate::pnm::{self, PnmFormat};

/// Encode request builder.
///
/// ```
/// use zenwavelet::{EncodeRequest, PixelBuffer, PnmFormat, Unstoppable};
///
/// let buffer = PixelBuffer::from_fn(2, 1, |x, _| [x as u8; 3]);
/// let bytes = EncodeRequest::new(PnmFormat::PlainGraymap).encode(&buffer, Unstoppable)?;
/// assert_eq!(bytes, b"P2\n2 1\n255\n0\n1\n");
/// # Ok::<(), zenwavelet::PnmError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EncodeRequest {
    format: PnmFormat,
}

impl EncodeRequest {
    pub fn new(format: PnmFormat) -> Self {
        Self { format }
    }

    /// Encode `buffer` as the requested format.
    pub fn encode(&self, buffer: &PixelBuffer, stop: impl Stop) -> Result<Vec<u8>, PnmError> {
        pnm::encode(buffer, self.format, &stop)
    }
}
