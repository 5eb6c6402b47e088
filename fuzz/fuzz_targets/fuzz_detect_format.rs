#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz document loading and version detection without normalization.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = oas_delta::parsers::detect(s);
    }
});
