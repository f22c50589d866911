//! PNM decoder: header grammar plus P2, P3, P5 and P6 rasters.

use super::{MAXVAL, PnmFormat, PnmHeader};
use crate::error::PnmError;
use crate::pixel::{CHANNELS, PixelBuffer, Sample};
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use enough::Stop;

/// Line cursor over the header. Lines starting with `#` are comments.
struct HeaderLines<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> HeaderLines<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Next raw line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> Option<&'a [u8]> {
        let rest = self.data.get(self.pos..)?;
        if rest.is_empty() {
            return None;
        }
        match rest.iter().position(|&b| b == b'\n') {
            Some(nl) => {
                self.pos += nl + 1;
                Some(&rest[..nl])
            }
            None => {
                self.pos = self.data.len();
                Some(rest)
            }
        }
    }

    /// Next line that is neither a comment nor blank, with trailing
    /// whitespace (including `\r`) stripped.
    fn next_token_line(&mut self) -> Option<&'a [u8]> {
        loop {
            let line = self.next_line()?;
            if line.first() == Some(&b'#') {
                continue;
            }
            let line = line.trim_ascii_end();
            if line.is_empty() {
                continue;
            }
            return Some(line);
        }
    }
}

fn lossy(line: &[u8]) -> String {
    String::from_utf8_lossy(line).into_owned()
}

/// Parse the three header lines: magic, `width height`, max value.
pub(crate) fn parse_header(data: &[u8]) -> Result<PnmHeader, PnmError> {
    let mut lines = HeaderLines::new(data);

    let magic = lines
        .next_token_line()
        .ok_or_else(|| PnmError::MalformedHeader("missing magic line".into()))?;
    let format = PnmFormat::from_magic(magic).ok_or_else(|| {
        PnmError::MalformedHeader(format!("unrecognized magic {:?}", lossy(magic)))
    })?;
    let format = format.require_supported()?;

    let size_line = lines
        .next_token_line()
        .ok_or_else(|| PnmError::MalformedHeader("missing dimensions".into()))?;
    let (width, height) = parse_dimensions(size_line)?;

    let depth_line = lines
        .next_token_line()
        .ok_or_else(|| PnmError::MalformedHeader("missing max value".into()))?;
    let depth = depth_line.trim_ascii_start();
    if depth != b"255" {
        return Err(PnmError::UnsupportedDepth(lossy(depth)));
    }

    log::debug!(
        "PNM header: P{} {width}x{height} maxval {MAXVAL}, raster at byte {}",
        format.magic(),
        lines.pos
    );

    Ok(PnmHeader {
        format,
        width,
        height,
        data_offset: lines.pos,
    })
}

/// `<width> <height>` as two positive decimal integers.
fn parse_dimensions(line: &[u8]) -> Result<(u32, u32), PnmError> {
    let mut fields = line
        .split(|b| b.is_ascii_whitespace())
        .filter(|f| !f.is_empty());
    let mut next_dim = |name: &str| -> Result<u32, PnmError> {
        let field = fields
            .next()
            .ok_or_else(|| PnmError::MalformedHeader(format!("missing {name}")))?;
        let value = parse_decimal(field)
            .ok_or_else(|| PnmError::MalformedHeader(format!("bad {name} {:?}", lossy(field))))?;
        if value == 0 {
            return Err(PnmError::MalformedHeader(format!("{name} is zero")));
        }
        Ok(value)
    };
    let width = next_dim("width")?;
    let height = next_dim("height")?;
    Ok((width, height))
}

fn parse_decimal(field: &[u8]) -> Option<u32> {
    core::str::from_utf8(field).ok()?.parse().ok()
}

/// Total stored values (not pixels) the raster must contain.
pub(crate) fn value_count(header: &PnmHeader) -> Result<usize, PnmError> {
    (header.width as usize)
        .checked_mul(header.height as usize)
        .and_then(|px| px.checked_mul(header.format.channels()))
        .ok_or(PnmError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        })
}

/// Decode the raster that follows `header` in `data`.
pub(crate) fn decode_pixels(
    data: &[u8],
    header: &PnmHeader,
    stop: &dyn Stop,
) -> Result<PixelBuffer, PnmError> {
    let expected = value_count(header)?;
    let raster = data.get(header.data_offset..).unwrap_or(&[]);

    let samples = if header.format.is_raw() {
        decode_raw(raster, header, expected, stop)?
    } else {
        decode_plain(raster, header, expected, stop)?
    };

    PixelBuffer::from_samples(header.width, header.height, samples).ok_or(
        PnmError::DimensionsTooLarge {
            width: header.width,
            height: header.height,
        },
    )
}

/// Widen stored values for one pixel to an RGB sample.
fn widen(values: &[u8]) -> Sample {
    match *values {
        [v] => [v; CHANNELS],
        [r, g, b] => [r, g, b],
        _ => unreachable!("PNM pixels carry 1 or 3 values"),
    }
}

/// P5/P6: one byte per value, no separators.
fn decode_raw(
    raster: &[u8],
    header: &PnmHeader,
    expected: usize,
    stop: &dyn Stop,
) -> Result<Vec<Sample>, PnmError> {
    if raster.len() < expected {
        return Err(PnmError::TruncatedData {
            expected,
            actual: raster.len(),
        });
    }
    let channels = header.format.channels();
    let row_values = header.width as usize * channels;
    let mut samples = Vec::with_capacity(expected / channels);
    for (y, row) in raster[..expected].chunks_exact(row_values).enumerate() {
        if y % 16 == 0 {
            stop.check()?;
        }
        samples.extend(row.chunks_exact(channels).map(widen));
    }
    Ok(samples)
}

/// P2/P3: whitespace-separated decimal values.
fn decode_plain(
    raster: &[u8],
    header: &PnmHeader,
    expected: usize,
    stop: &dyn Stop,
) -> Result<Vec<Sample>, PnmError> {
    let channels = header.format.channels();
    let mut tokens = raster
        .split(|b| b.is_ascii_whitespace())
        .filter(|t| !t.is_empty());
    let mut read = 0usize;
    let mut next_value = || -> Result<u8, PnmError> {
        let token = tokens.next().ok_or(PnmError::TruncatedData {
            expected,
            actual: read,
        })?;
        let value = parse_decimal(token)
            .filter(|&v| v <= MAXVAL)
            .ok_or_else(|| {
                PnmError::InvalidData(format!("sample {read}: {:?}", lossy(token)))
            })?;
        read += 1;
        Ok(value as u8)
    };

    // A plain value occupies at least two bytes.
    let mut samples = Vec::with_capacity((expected / channels).min(raster.len() / 2 + 1));
    let mut values = [0u8; CHANNELS];
    for y in 0..header.height {
        if y % 16 == 0 {
            stop.check()?;
        }
        for _ in 0..header.width {
            for v in values.iter_mut().take(channels) {
                *v = next_value()?;
            }
            samples.push(widen(&values[..channels]));
        }
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_before_every_header_line() {
        let data = b"# lead\nP2\n# size next\n2 1\n#depth\n255\n1 2\n";
        let header = parse_header(data).unwrap();
        assert_eq!(header.format, PnmFormat::PlainGraymap);
        assert_eq!((header.width, header.height), (2, 1));
        assert_eq!(&data[header.data_offset..], b"1 2\n");
    }

    #[test]
    fn crlf_header() {
        let header = parse_header(b"P6\r\n3 4\r\n255\r\n").unwrap();
        assert_eq!((header.width, header.height), (3, 4));
        assert_eq!(header.data_offset, 14);
    }

    #[test]
    fn dimension_errors() {
        assert!(matches!(
            parse_header(b"P5\n12\n255\n"),
            Err(PnmError::MalformedHeader(_))
        ));
        assert!(matches!(
            parse_header(b"P5\n0 3\n255\n"),
            Err(PnmError::MalformedHeader(_))
        ));
        assert!(matches!(
            parse_header(b"P5\nx 3\n255\n"),
            Err(PnmError::MalformedHeader(_))
        ));
    }

    #[test]
    fn raw_rows_widen_graymap() {
        let data = b"P5\n2 1\n255\n\x10\x20";
        let header = parse_header(data).unwrap();
        let buf = decode_pixels(data, &header, &enough::Unstoppable).unwrap();
        assert_eq!(buf.samples(), &[[0x10; 3], [0x20; 3]]);
    }
}
