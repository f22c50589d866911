#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    // P6 2x2
    let ppm = b"P6\n2 2\n255\n\xff\x00\x00\x00\xff\x00\x00\x00\xff\x80\x80\x80";
    fs::write(format!("{dir}/p6_2x2.ppm"), ppm).unwrap();

    // P5 4x4 checkerboard
    let pgm = b"P5\n4 4\n255\n\x00\xff\x00\xff\xff\x00\xff\x00\x00\xff\x00\xff\xff\x00\xff\x00";
    fs::write(format!("{dir}/p5_4x4.pgm"), pgm).unwrap();

    // P3 2x1 with comments
    let ppm = b"P3\n# comment\n2 1\n# depth\n255\n255 0 0\n0 0 255\n";
    fs::write(format!("{dir}/p3_2x1.ppm"), ppm).unwrap();

    // P2 3x1, CRLF
    let pgm = b"P2\r\n3 1\r\n255\r\n0 128 255\r\n";
    fs::write(format!("{dir}/p2_3x1.pgm"), pgm).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_p6.bin"), b"P6").unwrap();
    fs::write(format!("{dir}/p5_short.bin"), b"P5\n3 3\n255\n\x00\x00").unwrap();
    fs::write(format!("{dir}/p5_depth16.bin"), b"P5\n1 1\n65535\n\x00\x00").unwrap();
    fs::write(format!("{dir}/p1_bitmap.bin"), b"P1\n2 1\n1 0\n").unwrap();

    println!("Generated seed corpus in {dir}/");
}
