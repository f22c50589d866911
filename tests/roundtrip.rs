use enough::Unstoppable;
use zenwavelet::*;

fn noise(w: u32, h: u32, seed: u32) -> PixelBuffer {
    let mut state = seed;
    PixelBuffer::from_fn(w, h, |_, _| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        [state as u8, (state >> 8) as u8, (state >> 16) as u8]
    })
}

fn gray(buffer: &PixelBuffer) -> PixelBuffer {
    let samples = buffer.samples().iter().map(|s| [s[0]; 3]).collect();
    PixelBuffer::from_samples(buffer.width(), buffer.height(), samples).unwrap()
}

#[test]
fn raw_pixmap_is_byte_identical() {
    let buffer = noise(7, 5, 0xDEAD_BEEF);
    let encoded = encode(&buffer, PnmFormat::RawPixmap, Unstoppable).unwrap();
    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.format, PnmFormat::RawPixmap);
    assert_eq!(decoded.buffer, buffer);

    let reencoded = encode(&decoded.buffer, decoded.format, Unstoppable).unwrap();
    assert_eq!(reencoded, encoded);
}

#[test]
fn raw_graymap_is_byte_identical() {
    let data = b"P5\n3 2\n255\n\x00\x40\x80\xc0\xff\x64";
    let decoded = decode(data, Unstoppable).unwrap();
    assert_eq!(decoded.format, PnmFormat::RawGraymap);
    assert_eq!(decoded.buffer.pixel(2, 1), [0x64; 3]);

    let reencoded = encode(&decoded.buffer, decoded.format, Unstoppable).unwrap();
    assert_eq!(reencoded, data);
}

#[test]
fn plain_pixmap_is_value_identical() {
    // Several values per line, extra spaces, CRLF.
    let data = b"P3\n2 2\n255\n255 0 0   0 255 0\r\n0 0 255\n128 64 32";
    let decoded = decode(data, Unstoppable).unwrap();
    assert_eq!(decoded.format, PnmFormat::PlainPixmap);
    assert_eq!(
        decoded.buffer.samples(),
        &[[255, 0, 0], [0, 255, 0], [0, 0, 255], [128, 64, 32]]
    );

    let reencoded = encode(&decoded.buffer, decoded.format, Unstoppable).unwrap();
    assert_eq!(
        reencoded,
        b"P3\n2 2\n255\n255\n0\n0\n0\n255\n0\n0\n0\n255\n128\n64\n32\n"
    );
    assert_eq!(decode(&reencoded, Unstoppable).unwrap(), decoded);
}

#[test]
fn plain_graymap_is_value_identical() {
    let buffer = gray(&noise(9, 4, 0xCAFE_BABE));
    let encoded = encode(&buffer, PnmFormat::PlainGraymap, Unstoppable).unwrap();
    assert!(encoded.starts_with(b"P2\n9 4\n255\n"));
    let decoded = decode(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.buffer, buffer);
}

#[test]
fn graymap_encode_keeps_channel_zero() {
    let buffer = PixelBuffer::from_fn(2, 1, |x, _| [10 + x as u8, 200, 201]);
    let encoded = encode(&buffer, PnmFormat::RawGraymap, Unstoppable).unwrap();
    assert_eq!(encoded, b"P5\n2 1\n255\n\x0a\x0b");
}

#[test]
fn convert_between_variants() {
    let buffer = noise(4, 3, 0x1234_5678);
    let plain = encode(&buffer, PnmFormat::PlainPixmap, Unstoppable).unwrap();
    let decoded = decode(&plain, Unstoppable).unwrap();
    let raw = encode(&decoded.buffer, PnmFormat::RawPixmap, Unstoppable).unwrap();
    assert_eq!(decode(&raw, Unstoppable).unwrap().buffer, buffer);
}

#[test]
fn image_info_probe() {
    let buffer = PixelBuffer::new(1, 2);
    let encoded = encode(&buffer, PnmFormat::RawPixmap, Unstoppable).unwrap();
    let info = ImageInfo::from_bytes(&encoded).unwrap();
    assert_eq!(info.width, 1);
    assert_eq!(info.height, 2);
    assert_eq!(info.format, PnmFormat::RawPixmap);
}

#[test]
fn limits_reject_large() {
    let buffer = PixelBuffer::new(1, 2);
    let encoded = encode(&buffer, PnmFormat::RawPixmap, Unstoppable).unwrap();

    let limits = Limits {
        max_pixels: Some(1),
        ..Default::default()
    };
    let result = DecodeRequest::new(&encoded)
        .with_limits(&limits)
        .decode(Unstoppable);
    match result.unwrap_err() {
        PnmError::LimitExceeded(_) => {}
        other => panic!("expected LimitExceeded, got {other:?}"),
    }

    // 6 bytes of samples plus 6 of transform scratch.
    let limits = Limits {
        max_memory_bytes: Some(12),
        ..Default::default()
    };
    assert!(DecodeRequest::new(&encoded).with_limits(&limits).decode(Unstoppable).is_ok());
    let limits = Limits {
        max_memory_bytes: Some(11),
        ..Default::default()
    };
    assert!(matches!(
        DecodeRequest::new(&encoded).with_limits(&limits).decode(Unstoppable),
        Err(PnmError::LimitExceeded(_))
    ));
}

#[cfg(feature = "imgref")]
#[test]
fn imgref_view() {
    let buffer = noise(3, 2, 0xBADF00D);
    let img = buffer.as_imgref();
    assert_eq!(img.width(), 3);
    assert_eq!(img.height(), 2);
    let px = img[(2usize, 1usize)];
    assert_eq!([px.r, px.g, px.b], buffer.pixel(2, 1));
}
