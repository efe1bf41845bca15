#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn farbfeld(width: u32, height: u32, records: &[[u16; 4]]) -> Vec<u8> {
    let mut out = b"farbfeld".to_vec();
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&height.to_be_bytes());
    for rec in records {
        for c in rec {
            out.extend_from_slice(&c.to_be_bytes());
        }
    }
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/ff_1x1.ff"), farbfeld(1, 1, &[[1, 2, 3, 4]])).unwrap();
    fs::write(format!("{dir}/ff_0x0.ff"), farbfeld(0, 0, &[])).unwrap();

    let rgbw = [
        [0xffff, 0, 0, 0xffff],
        [0, 0xffff, 0, 0xffff],
        [0, 0, 0xffff, 0xffff],
        [0xffff, 0xffff, 0xffff, 0x8000],
    ];
    fs::write(format!("{dir}/ff_2x2.ff"), farbfeld(2, 2, &rgbw)).unwrap();
    fs::write(format!("{dir}/ff_4x1.ff"), farbfeld(4, 1, &rgbw)).unwrap();
    fs::write(format!("{dir}/ff_1x4.ff"), farbfeld(1, 4, &rgbw)).unwrap();

    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/just_magic.bin"), b"farbfeld").unwrap();
    fs::write(format!("{dir}/bad_magic.bin"), b"farbfelD\0\0\0\x01\0\0\0\x01").unwrap();
    fs::write(format!("{dir}/header_only.bin"), farbfeld(3, 3, &[])).unwrap();
    fs::write(format!("{dir}/huge_dims.bin"), farbfeld(u32::MAX, u32::MAX, &[])).unwrap();

    println!("Generated seed corpus in {dir}/");
}
