//! File boundary: read and write PNM files, attaching the path to I/O errors.

use std::path::Path;

use enough::Stop;

use crate::decode::{DecodeOutput, DecodeRequest};
use crate::encode::EncodeRequest;
use crate::error::PnmError;
use crate::limits::Limits;
use crate::pixel::PixelBuffer;
use crate::pnm::PnmFormat;

fn io_error(path: &Path, source: std::io::Error) -> PnmError {
    PnmError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Read and decode the PNM file at `path`.
pub fn read_file(
    path: impl AsRef<Path>,
    limits: Option<&Limits>,
    stop: impl Stop,
) -> Result<DecodeOutput, PnmError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| io_error(path, e))?;
    log::info!("read {} ({} bytes)", path.display(), data.len());
    let mut request = DecodeRequest::new(&data);
    if let Some(limits) = limits {
        request = request.with_limits(limits);
    }
    request.decode(stop)
}

/// Encode `buffer` as `format` and write it to `path`, replacing any
/// existing file.
pub fn write_file(
    path: impl AsRef<Path>,
    buffer: &PixelBuffer,
    format: PnmFormat,
    stop: impl Stop,
) -> Result<(), PnmError> {
    let path = path.as_ref();
    let bytes = EncodeRequest::new(format).encode(buffer, stop)?;
    std::fs::write(path, &bytes).map_err(|e| io_error(path, e))?;
    log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}
