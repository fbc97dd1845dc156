#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let x = numeral::parse_bytes::<f64>(data);
    if let Ok(text) = std::str::from_utf8(data) {
        assert!(numeral::valid_prefix_len(text) <= text.len());
    }
    let text = numeral::general(x);
    let back = numeral::parse_f64(&text);
    assert!(back.to_bits() == x.to_bits() || (x.is_nan() && back.is_nan()));
});
