//! PNM encoder: P2, P3, P5, P6.

use super::{MAXVAL, PnmFormat};
use crate::error::PnmError;
use crate::pixel::PixelBuffer;
use alloc::format;
use alloc::vec::Vec;
use enough::Stop;

/// Encode `buffer` as `fmt`: three header lines, then the raster.
pub(crate) fn encode_pnm(
    buffer: &PixelBuffer,
    fmt: PnmFormat,
    stop: &dyn Stop,
) -> Result<Vec<u8>, PnmError> {
    let fmt = fmt.require_supported()?;
    let (width, height) = (buffer.width(), buffer.height());
    stop.check()?;

    let header = format!("P{}\n{width} {height}\n{MAXVAL}\n", fmt.magic());
    let channels = fmt.channels();
    // Raw: one byte per value. Plain: at most "255\n".
    let per_value = if fmt.is_raw() { 1 } else { 4 };
    let mut out = Vec::with_capacity(header.len() + buffer.samples().len() * channels * per_value);
    out.extend_from_slice(header.as_bytes());

    if fmt.is_raw() {
        encode_raw(buffer, channels, &mut out, stop)?;
    } else {
        encode_plain(buffer, channels, &mut out, stop)?;
    }
    Ok(out)
}

/// P5/P6: graymaps emit channel 0 only.
fn encode_raw(
    buffer: &PixelBuffer,
    channels: usize,
    out: &mut Vec<u8>,
    stop: &dyn Stop,
) -> Result<(), PnmError> {
    for y in 0..buffer.height() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for sample in buffer.row(y) {
            out.extend_from_slice(&sample[..channels]);
        }
    }
    Ok(())
}

/// P2/P3: every value on its own line.
fn encode_plain(
    buffer: &PixelBuffer,
    channels: usize,
    out: &mut Vec<u8>,
    stop: &dyn Stop,
) -> Result<(), PnmError> {
    for y in 0..buffer.height() {
        if y % 16 == 0 {
            stop.check()?;
        }
        for sample in buffer.row(y) {
            for value in &sample[..channels] {
                out.extend_from_slice(format!("{value}\n").as_bytes());
            }
        }
    }
    Ok(())
}
