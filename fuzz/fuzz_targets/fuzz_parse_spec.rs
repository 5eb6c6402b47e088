#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the main parsing entry point.
///
/// Feeds arbitrary UTF-8 strings to `parse_spec_str`, which runs syntax and
/// format detection, reference resolution and normalization.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = oas_delta::parsers::parse_spec_str(s);
    }
});
