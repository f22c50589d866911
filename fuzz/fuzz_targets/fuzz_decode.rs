#![no_main]
use libfuzzer_sys::fuzz_target;
use zenwavelet::{DecodeRequest, ImageInfo, Limits};

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_pixels: Some(1 << 20),
        ..Default::default()
    };

    // Probe and decode must never panic
    let _ = ImageInfo::from_bytes(data);
    let Ok(decoded) = DecodeRequest::new(data)
        .with_limits(&limits)
        .decode(enough::Unstoppable)
    else {
        return;
    };

    // Any decoded buffer can go through the transform and back
    let (mut buffer, _) = decoded.into_parts();
    zenwavelet::haar::decompose(&mut buffer, 3, enough::Unstoppable).unwrap();
    zenwavelet::haar::recompose(&mut buffer, 3, enough::Unstoppable).unwrap();
});
