//! Separable 2D Haar wavelet over a [`PixelBuffer`], in place.
//!
//! One forward level splits the active region into four quadrants: the
//! top-left holds pair averages, the other three hold pair half-differences
//! offset by [`BIAS`] so they fit in a byte. Each pass runs along X first,
//! then along Y, through a zeroed scratch buffer the size of the region.
//!
//! Integer division truncates toward zero, so a level is only exactly
//! invertible when every pair sum it sees is even. [`inverse`] clamps each
//! reconstructed value to `0..=255`; that clamp is lossy.
//!
//! Odd region sizes drop the unpaired sample. For an odd width the last
//! region column ends up holding the Y pass of zeros (0 in the top half,
//! `BIAS` in the bottom half); for an odd height the last region row is
//! left as it was.

use enough::Stop;

use crate::error::PnmError;
use crate::pixel::{CHANNELS, PixelBuffer};

/// Offset added to detail coefficients.
pub const BIAS: i32 = 128;

fn bias(v: i32) -> i32 {
    v + BIAS
}

fn unbias(v: u8) -> i32 {
    i32::from(v) - BIAS
}

/// Saturate to a byte.
fn limit_byte(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Average and biased half-difference of a pair. `/` truncates toward zero.
fn analyze(p: i32, p2: i32) -> (u8, u8) {
    (limit_byte((p + p2) / 2), limit_byte(bias((p - p2) / 2)))
}

/// Inverse of [`analyze`] given the average and the unbiased detail.
fn synthesize(p: i32, p2: i32) -> (u8, u8) {
    (limit_byte(p + p2), limit_byte(p - p2))
}

fn check_region(buffer: &PixelBuffer, width: u32, height: u32) {
    assert!(
        width <= buffer.width() && height <= buffer.height(),
        "active region {width}x{height} exceeds {}x{} buffer",
        buffer.width(),
        buffer.height()
    );
}

/// One decomposition level over the top-left `width × height` region.
///
/// # Panics
/// If the region does not fit inside `buffer`.
pub fn forward(buffer: &mut PixelBuffer, width: u32, height: u32) {
    check_region(buffer, width, height);
    log::trace!("haar forward: scratch {width}x{height}");
    let mut scratch = PixelBuffer::new(width, height);

    let half = width / 2;
    for y in 0..height {
        for c in 0..CHANNELS {
            for x in 0..half {
                let p = i32::from(buffer.channel(2 * x, y, c));
                let p2 = if 2 * x + 1 < width {
                    i32::from(buffer.channel(2 * x + 1, y, c))
                } else {
                    0
                };
                let (low, high) = analyze(p, p2);
                scratch.set_channel(x, y, c, low);
                scratch.set_channel(x + half, y, c, high);
            }
        }
    }

    let half = height / 2;
    for x in 0..width {
        for c in 0..CHANNELS {
            for y in 0..half {
                let p = i32::from(scratch.channel(x, 2 * y, c));
                let p2 = if 2 * y + 1 < height {
                    i32::from(scratch.channel(x, 2 * y + 1, c))
                } else {
                    0
                };
                let (low, high) = analyze(p, p2);
                buffer.set_channel(x, y, c, low);
                buffer.set_channel(x, y + half, c, high);
            }
        }
    }
}

/// One reconstruction level over the top-left `width × height` region.
///
/// Runs the X pass first and then the Y pass, the same order as
/// [`forward`].
///
/// # Panics
/// If the region does not fit inside `buffer`.
pub fn inverse(buffer: &mut PixelBuffer, width: u32, height: u32) {
    check_region(buffer, width, height);
    log::trace!("haar inverse: scratch {width}x{height}");
    let mut scratch = PixelBuffer::new(width, height);

    let half = width / 2;
    for y in 0..height {
        for c in 0..CHANNELS {
            for x in 0..half {
                let p = i32::from(buffer.channel(x, y, c));
                let p2 = unbias(buffer.channel(x + half, y, c));
                let (even, odd) = synthesize(p, p2);
                scratch.set_channel(2 * x, y, c, even);
                scratch.set_channel(2 * x + 1, y, c, odd);
            }
        }
    }

    let half = height / 2;
    for x in 0..width {
        for c in 0..CHANNELS {
            for y in 0..half {
                let p = i32::from(scratch.channel(x, y, c));
                let p2 = unbias(scratch.channel(x, y + half, c));
                let (even, odd) = synthesize(p, p2);
                buffer.set_channel(x, 2 * y, c, even);
                buffer.set_channel(x, 2 * y + 1, c, odd);
            }
        }
    }
}

/// Active region of `level` (0 is the finest): `width >> level` by
/// `height >> level`.
pub fn level_region(width: u32, height: u32, level: u32) -> (u32, u32) {
    (
        width.checked_shr(level).unwrap_or(0),
        height.checked_shr(level).unwrap_or(0),
    )
}

/// Number of levels whose active region is non-empty: the bit length of
/// the smaller dimension.
pub fn max_levels(width: u32, height: u32) -> u32 {
    u32::BITS - width.min(height).leading_zeros()
}

/// Clamp `levels` to what the buffer can hold.
fn usable_levels(op: &str, buffer: &PixelBuffer, levels: u32) -> u32 {
    let (width, height) = (buffer.width(), buffer.height());
    let usable = levels.min(max_levels(width, height));
    if usable < levels {
        log::warn!(
            "{op}: {levels} levels requested but a {width}x{height} image empties after {usable}, running {usable}"
        );
    }
    usable
}

fn announce_level(op: &str, level: u32, width: u32, height: u32) {
    if width % 2 == 1 || height % 2 == 1 {
        log::warn!("{op} level {level}: odd active region {width}x{height}, unpaired samples dropped");
    }
    log::debug!("{op} level {level}: active region {width}x{height}");
}

/// Run `levels` forward levels, finest first, each on half the previous
/// region. Levels past [`max_levels`] are skipped.
pub fn decompose(buffer: &mut PixelBuffer, levels: u32, stop: impl Stop) -> Result<(), PnmError> {
    let (width, height) = (buffer.width(), buffer.height());
    for level in 0..usable_levels("decompose", buffer, levels) {
        stop.check()?;
        let (w, h) = level_region(width, height, level);
        announce_level("decompose", level, w, h);
        forward(buffer, w, h);
    }
    Ok(())
}

/// Undo [`decompose`]: levels run from `levels - 1` down to 0, so the
/// smallest region is rebuilt first and the finest level last. Levels past
/// [`max_levels`] are skipped.
pub fn recompose(buffer: &mut PixelBuffer, levels: u32, stop: impl Stop) -> Result<(), PnmError> {
    let (width, height) = (buffer.width(), buffer.height());
    for level in (0..usable_levels("recompose", buffer, levels)).rev() {
        stop.check()?;
        let (w, h) = level_region(width, height, level);
        announce_level("recompose", level, w, h);
        inverse(buffer, w, h);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_truncates_toward_zero() {
        assert_eq!(analyze(0, 255), (127, 1));
        assert_eq!(analyze(255, 0), (127, 255));
        assert_eq!(analyze(3, 0), (1, 129));
        assert_eq!(analyze(0, 3), (1, 127));
    }

    #[test]
    fn synthesize_clamps() {
        assert_eq!(synthesize(250, 20), (255, 230));
        assert_eq!(synthesize(5, -20), (0, 25));
    }

    #[test]
    fn two_by_two_level() {
        let values = [[10u8, 20], [30, 40]];
        let mut buf = PixelBuffer::from_fn(2, 2, |x, y| [values[y as usize][x as usize]; 3]);
        forward(&mut buf, 2, 2);
        let gray: alloc::vec::Vec<u8> = buf.samples().iter().map(|s| s[0]).collect();
        assert_eq!(gray, [25, 123, 118, 128]);
    }

    #[test]
    fn regions_halve() {
        assert_eq!(level_region(640, 480, 0), (640, 480));
        assert_eq!(level_region(640, 480, 3), (80, 60));
        assert_eq!(level_region(5, 5, 1), (2, 2));
        assert_eq!(level_region(5, 5, 40), (0, 0));
    }

    #[test]
    fn level_count_follows_smaller_side() {
        assert_eq!(max_levels(4, 4), 3);
        assert_eq!(max_levels(640, 3), 2);
        assert_eq!(max_levels(1, 1), 1);
        assert_eq!(max_levels(u32::MAX, u32::MAX), 32);
        for (w, h) in [(4, 4), (640, 480), (5, 9)] {
            let n = max_levels(w, h);
            let (lw, lh) = level_region(w, h, n - 1);
            assert!(lw > 0 && lh > 0);
            let (lw, lh) = level_region(w, h, n);
            assert!(lw == 0 || lh == 0);
        }
    }

    #[test]
    #[should_panic(expected = "exceeds")]
    fn region_must_fit() {
        let mut buf = PixelBuffer::new(4, 4);
        forward(&mut buf, 8, 4);
    }
}
