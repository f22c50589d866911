use alloc::format;

use crate::error::PnmError;
use crate::pixel::CHANNELS;

/// Caps on what a decode may commit the process to.
///
/// Everything is `None` (unchecked) by default. The memory cap covers the
/// whole working set of a transform run: the decoded buffer plus the
/// full-size scratch buffer that [`crate::haar::forward`] and
/// [`crate::haar::inverse`] allocate for a level.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum `width * height`.
    pub max_pixels: Option<u64>,
    /// Maximum peak working set in bytes, see [`Limits::working_set`].
    pub max_memory_bytes: Option<u64>,
}

fn over(what: &str, value: u64, limit: Option<u64>) -> Result<(), PnmError> {
    match limit {
        Some(max) if value > max => Err(PnmError::LimitExceeded(format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}

impl Limits {
    /// Bytes held at the peak of a transform level on a `width × height`
    /// image: the sample buffer and one scratch buffer of the same size.
    pub fn working_set(width: u32, height: u32) -> u64 {
        u64::from(width)
            .saturating_mul(u64::from(height))
            .saturating_mul(CHANNELS as u64)
            .saturating_mul(2)
    }

    /// Check header dimensions before anything is allocated.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), PnmError> {
        over("width", u64::from(width), self.max_width)?;
        over("height", u64::from(height), self.max_height)?;
        over(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )?;
        over(
            "working set (bytes)",
            Self::working_set(width, height),
            self.max_memory_bytes,
        )
    }
}
