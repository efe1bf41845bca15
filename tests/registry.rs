use std::io::{Cursor, Read};

use zenfarbfeld::*;

fn tiny_ff() -> Vec<u8> {
    let mut data = b"farbfeld".to_vec();
    data.extend_from_slice(&2u32.to_be_bytes());
    data.extend_from_slice(&1u32.to_be_bytes());
    data.extend_from_slice(&[0, 1, 0, 2, 0, 3, 0, 4]);
    data.extend_from_slice(&[0xFF, 0xFF, 0, 0, 0, 0, 0xFF, 0xFF]);
    data
}

fn farbfeld_registry() -> FormatRegistry {
    let mut registry = FormatRegistry::new();
    register(&mut registry);
    registry
}

#[test]
fn register_exposes_signature() {
    let registry = farbfeld_registry();
    assert_eq!(registry.formats().len(), 1);
    let spec = &registry.formats()[0];
    assert_eq!(spec.name, FORMAT_NAME);
    assert_eq!(spec.signature, b"farbfeld");

    // Registering twice keeps a single entry.
    let mut registry = registry;
    register(&mut registry);
    assert_eq!(registry.formats().len(), 1);
}

#[test]
fn sniff_by_leading_bytes() {
    let registry = farbfeld_registry();
    assert_eq!(
        registry.sniff(&tiny_ff()).map(|f| f.name),
        Some("farbfeld")
    );
    assert!(registry.sniff(b"\x89PNG\r\n\x1a\n").is_none());
    assert!(registry.sniff(b"farb").is_none());
}

#[test]
fn dispatch_decode_sees_whole_stream() {
    let registry = farbfeld_registry();
    let (spec, image) = registry.decode(Cursor::new(tiny_ff())).unwrap();
    assert_eq!(spec.name, "farbfeld");
    assert_eq!(image.dimensions(), (2, 1));
    assert_eq!(image.get_pixel(0, 0), Some(Rgba64::new(1, 2, 3, 4)));
    assert_eq!(image.get_pixel(1, 0), Some(Rgba64::new(0xFFFF, 0, 0, 0xFFFF)));
}

#[test]
fn dispatch_decode_config_stops_after_header() {
    let registry = farbfeld_registry();
    let data = tiny_ff();
    let mut cursor = Cursor::new(&data);
    let (_, info) = registry.decode_config(&mut cursor).unwrap();
    assert_eq!((info.width, info.height), (2, 1));
    assert_eq!(cursor.position(), HEADER_LEN as u64);

    let mut rest = Vec::new();
    cursor.read_to_end(&mut rest).unwrap();
    assert_eq!(rest, &data[HEADER_LEN..]);
}

#[test]
fn dispatch_unknown_format() {
    let registry = farbfeld_registry();
    assert!(matches!(
        registry.decode(&b"GIF89a and then some"[..]),
        Err(FarbfeldError::UnrecognizedFormat)
    ));
    // Too short to hold the signature.
    assert!(matches!(
        registry.decode_config(&b"farb"[..]),
        Err(FarbfeldError::UnrecognizedFormat)
    ));
}

#[test]
fn dispatch_truncated_pixels_fail() {
    let registry = farbfeld_registry();
    let data = tiny_ff();
    let err = registry.decode(&data[..data.len() - 1]).unwrap_err();
    assert!(matches!(
        err,
        FarbfeldError::UnexpectedEof {
            field: Field::Pixel(1),
            consumed: 7,
            needed: 8
        }
    ));
}

fn always_gray(_: &mut dyn Read) -> Result<Rgba64Image, FarbfeldError> {
    Ok(Rgba64Image::from_pixels(1, 1, vec![Rgba64::new(0x8000, 0x8000, 0x8000, 0xFFFF)]).unwrap())
}

fn always_gray_config(_: &mut dyn Read) -> Result<ImageInfo, FarbfeldError> {
    Ok(ImageInfo {
        width: 1,
        height: 1,
        color_model: ColorModel::Rgba64,
    })
}

#[test]
fn host_formats_coexist() {
    let mut registry = FormatRegistry::new();
    registry.register(FormatSpec {
        name: "gray",
        signature: b"GRAY",
        decode: always_gray,
        decode_config: always_gray_config,
    });
    register(&mut registry);

    let (spec, image) = registry.decode(&b"GRAYxxxxxxxxxxxxxxxxx"[..]).unwrap();
    assert_eq!(spec.name, "gray");
    assert_eq!(image.pixels()[0].r, 0x8000);

    let (spec, _) = registry.decode(&tiny_ff()[..]).unwrap();
    assert_eq!(spec.name, "farbfeld");
}
