//! PNM family: P2/P3 (plain) and P5/P6 (raw) graymaps and pixmaps, 8-bit only.
//!
//! Bitmap variants (P1, P4) are recognized but rejected with
//! [`PnmError::UnsupportedVariant`].

pub(crate) mod decode;
mod encode;

use crate::error::PnmError;
use crate::pixel::PixelBuffer;
use alloc::vec::Vec;
use enough::Stop;

/// The only supported maximum sample value.
pub const MAXVAL: u32 = 255;

/// Which PNM sub-format a file uses. The discriminant is the digit after `P`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PnmFormat {
    /// P1 — plain bitmap (unsupported).
    PlainBitmap = 1,
    /// P2 — plain graymap (PGM).
    PlainGraymap = 2,
    /// P3 — plain pixmap (PPM).
    PlainPixmap = 3,
    /// P4 — raw bitmap (unsupported).
    RawBitmap = 4,
    /// P5 — raw graymap (PGM).
    RawGraymap = 5,
    /// P6 — raw pixmap (PPM).
    RawPixmap = 6,
}

impl PnmFormat {
    /// The digit written after `P` in the magic line.
    pub fn magic(self) -> u8 {
        self as u8
    }

    /// Parse a magic token such as `b"P5"`.
    pub fn from_magic(token: &[u8]) -> Option<Self> {
        match token {
            b"P1" => Some(Self::PlainBitmap),
            b"P2" => Some(Self::PlainGraymap),
            b"P3" => Some(Self::PlainPixmap),
            b"P4" => Some(Self::RawBitmap),
            b"P5" => Some(Self::RawGraymap),
            b"P6" => Some(Self::RawPixmap),
            _ => None,
        }
    }

    /// Binary raster (P4/P5/P6) rather than decimal text.
    pub fn is_raw(self) -> bool {
        matches!(self, Self::RawBitmap | Self::RawGraymap | Self::RawPixmap)
    }

    /// Stored values per pixel: 1 for bitmaps and graymaps, 3 for pixmaps.
    pub fn channels(self) -> usize {
        match self {
            Self::PlainPixmap | Self::RawPixmap => 3,
            _ => 1,
        }
    }

    /// Whether this crate can read and write the variant.
    pub fn is_supported(self) -> bool {
        !matches!(self, Self::PlainBitmap | Self::RawBitmap)
    }

    pub(crate) fn require_supported(self) -> Result<Self, PnmError> {
        if self.is_supported() {
            Ok(self)
        } else {
            Err(PnmError::UnsupportedVariant(self))
        }
    }
}

/// Parsed PNM header (internal).
#[derive(Debug)]
pub(crate) struct PnmHeader {
    pub format: PnmFormat,
    pub width: u32,
    pub height: u32,
    pub data_offset: usize,
}

/// Dimensions and format read from a header, without touching pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: PnmFormat,
}

impl ImageInfo {
    /// Probe the header of `data`.
    pub fn from_bytes(data: &[u8]) -> Result<Self, PnmError> {
        let header = decode::parse_header(data)?;
        Ok(ImageInfo {
            width: header.width,
            height: header.height,
            format: header.format,
        })
    }
}

/// Encode `buffer` as `format` (called from EncodeRequest).
pub(crate) fn encode(
    buffer: &PixelBuffer,
    format: PnmFormat,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PnmError> {
    encode::encode_pnm(buffer, format, stop)
}
