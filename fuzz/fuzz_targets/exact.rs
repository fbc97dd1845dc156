#![no_main]
use libfuzzer_sys::fuzz_target;
use numeral::{Buffer, BASE10, BASE90};

fuzz_target!(|bits: u64| {
    let x = f64::from_bits(bits);
    let mut buffer = Buffer::new();
    for alphabet in [&BASE10, &BASE90] {
        let text = alphabet.encode_exact_signed(&mut buffer, x);
        assert_eq!(alphabet.decode_exact::<f64>(text).to_bits(), bits);
        let text = alphabet.encode_exact_unsigned(&mut buffer, x);
        assert_eq!(alphabet.decode_exact::<f64>(text).to_bits(), bits);
    }
});
