#![no_main]
use libfuzzer_sys::fuzz_target;
use zenfarbfeld::{DecodeRequest, Limits, Traversal};

fuzz_target!(|data: &[u8]| {
    // Cap allocations; declared dimensions are untrusted.
    let limits = Limits {
        max_memory_bytes: Some(64 << 20),
        ..Default::default()
    };

    // Must never panic, and slice and stream decoding must agree.
    let request = DecodeRequest::new().with_limits(&limits);
    let from_slice = request.decode(data, enough::Unstoppable);
    let from_reader = request.decode_reader(data, enough::Unstoppable);
    match (&from_slice, &from_reader) {
        (Ok(a), Ok(b)) => assert_eq!(a, b, "slice and reader decode differ"),
        (Err(_), Err(_)) => {}
        _ => panic!("slice and reader disagree: {from_slice:?} vs {from_reader:?}"),
    }

    let _ = request
        .with_traversal(Traversal::Transposed)
        .decode(data, enough::Unstoppable);

    // Header-only decode must agree with full decode on dimensions.
    if let (Ok(info), Ok(image)) = (zenfarbfeld::decode_config(data), &from_slice) {
        assert_eq!((info.width, info.height), image.dimensions());
    }
});
