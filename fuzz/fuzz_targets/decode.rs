#![no_main]
use libfuzzer_sys::fuzz_target;
use numeral::{Buffer, PREDEFINED};

fuzz_target!(|data: &[u8]| {
    let mut buffer = Buffer::new();
    for alphabet in PREDEFINED {
        let value = alphabet.decode_bytes::<i64>(data);
        let text = alphabet.encode_signed(&mut buffer, value);
        assert_eq!(alphabet.decode::<i64>(text), value);
        let _ = alphabet.decode_bytes::<u8>(data);
    }
});
