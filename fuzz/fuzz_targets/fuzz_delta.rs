#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the diff engine and scorer with two documents.
///
/// The input is split at the first NUL byte into a base and a revision.
/// Whenever both parse, the score must stay within `[0, 1]` in both modes.
fuzz_target!(|data: &[u8]| {
    let Some(split) = data.iter().position(|&b| b == 0) else {
        return;
    };
    let (Ok(base), Ok(revision)) = (
        std::str::from_utf8(&data[..split]),
        std::str::from_utf8(&data[split + 1..]),
    ) else {
        return;
    };
    let (Ok(base), Ok(revision)) = (
        oas_delta::parsers::parse_spec_str(base),
        oas_delta::parsers::parse_spec_str(revision),
    ) else {
        return;
    };

    let Ok(diff) = oas_delta::DiffEngine::new().diff(&base, &revision) else {
        return;
    };
    for asymmetric in [false, true] {
        let score = oas_delta::delta::get(asymmetric, &diff);
        assert!((0.0..=1.0).contains(&score), "score {score} out of range");
    }
});
