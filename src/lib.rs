//! # zenwavelet
//!
//! Multi-level Haar wavelet decomposition and reconstruction of PNM images.
//!
//! Reads a graymap or pixmap, splits it into approximation and detail bands
//! (or recombines such bands into pixels), and writes the result in the same
//! PNM variant it came from.
//!
//! ## Supported Formats
//!
//! - **P2** (PGM plain) and **P5** (PGM raw) — grayscale, widened to three equal channels
//! - **P3** (PPM plain) and **P6** (PPM raw) — RGB
//!
//! Samples are 8-bit; the max value line must read `255`.
//!
//! ## Non-Goals
//!
//! - Bitmaps (P1, P4), PAM, PFM, 16-bit samples
//! - Wavelets other than Haar
//! - Threaded or SIMD transforms
//!
//! ## Usage
//!
//! ```
//! use zenwavelet::{decode, encode, haar, Unstoppable};
//!
//! let data = b"P5\n4 4\n255\n\x00\xff\x00\xff\xff\x00\xff\x00\x00\xff\x00\xff\xff\x00\xff\x00";
//! let decoded = decode(data, Unstoppable)?;
//! let (mut buffer, format) = decoded.into_parts();
//!
//! haar::decompose(&mut buffer, 1, Unstoppable)?;
//! assert_eq!(buffer.pixel(0, 0), [127; 3]);
//!
//! let bytes = encode(&buffer, format, Unstoppable)?;
//! assert!(bytes.starts_with(b"P5\n4 4\n255\n"));
//! # Ok::<(), zenwavelet::PnmError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod decode;
mod encode;
mod error;
mod limits;
mod pixel;

pub mod haar;
pub mod pnm;

#[cfg(feature = "std")]
mod fs;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports
pub use decode::{DecodeOutput, DecodeRequest};
pub use encode::EncodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::PnmError;
pub use limits::Limits;
pub use pixel::{CHANNELS, PixelBuffer, Sample};
pub use pnm::{ImageInfo, PnmFormat};

#[cfg(feature = "std")]
pub use fs::{read_file, write_file};

/// Decode PNM bytes with no limits.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, PnmError> {
    DecodeRequest::new(data).decode(stop)
}

/// Encode `buffer` as `format`.
pub fn encode(
    buffer: &PixelBuffer,
    format: PnmFormat,
    stop: impl Stop,
) -> Result<alloc::vec::Vec<u8>, PnmError> {
    EncodeRequest::new(format).encode(buffer, stop)
}
