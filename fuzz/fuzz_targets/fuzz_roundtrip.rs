#![no_main]
use libfuzzer_sys::fuzz_target;
use zenwavelet::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding and decoding again must produce identical pixels
    let limits = Limits {
        max_pixels: Some(1 << 20),
        ..Default::default()
    };
    let Ok(decoded) = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    let reencoded = encode(&decoded.buffer, decoded.format, enough::Unstoppable)
        .expect("decoded image failed to re-encode");
    let Ok(decoded2) = decode(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.format, decoded2.format);
    assert_eq!(decoded.buffer, decoded2.buffer, "roundtrip pixel mismatch");

    // Raw variants are byte-stable after one pass
    if decoded.format.is_raw() {
        let again = encode(&decoded2.buffer, decoded2.format, enough::Unstoppable).unwrap();
        assert_eq!(again, reencoded);
    }
});
