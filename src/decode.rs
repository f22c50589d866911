use enough::Stop;

use crate::error::PnmError;
use crate::limits::Limits;
use crate::pixel::PixelBuffer;
use crate::pnm::{self, PnmFormat};

/// A decoded image: the sample buffer plus the format it was stored in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOutput {
    pub buffer: PixelBuffer,
    pub format: PnmFormat,
}

impl DecodeOutput {
    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    /// Split into the buffer and its source format.
    pub fn into_parts(self) -> (PixelBuffer, PnmFormat) {
        (self.buffer, self.format)
    }
}

/// Decode request builder.
///
/// ```
/// use zenwavelet::{DecodeRequest, Limits, Unstoppable};
///
/// let data = b"P5\n2 1\n255\n\x00\xff";
/// let limits = Limits { max_pixels: Some(16), ..Default::default() };
/// let decoded = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .decode(Unstoppable)?;
/// assert_eq!(decoded.buffer.pixel(1, 0), [255, 255, 255]);
/// # Ok::<(), zenwavelet::PnmError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, PnmError> {
        let header = pnm::decode::parse_header(self.data)?;

        if let Some(limits) = self.limits {
            limits.check(header.width, header.height)?;
        }

        stop.check()?;

        let buffer = pnm::decode::decode_pixels(self.data, &header, &stop)?;
        Ok(DecodeOutput {
            buffer,
            format: header.format,
        })
    }
}
