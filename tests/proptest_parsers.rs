//! Property-based tests for the document parser.
//!
//! Ensures the parser doesn't panic on arbitrary input, including random
//! strings, JSON-like fragments, and partial API documents.

use oas_delta::parsers::{detect_syntax, load_document, parse_spec_str};
use proptest::prelude::*;

proptest! {
    // 500 cases balances coverage vs speed for parser fuzz tests.
    // Parser tests intentionally only assert no-panic (not result correctness)
    // since random input is expected to produce Err in almost all cases.
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn parse_spec_str_doesnt_panic(s in "\\PC{0,2000}") {
        let _ = parse_spec_str(&s);
    }

    #[test]
    fn detect_syntax_doesnt_panic(s in "\\PC{0,2000}") {
        let _ = detect_syntax(&s);
        let _ = load_document(&s);
    }

    #[test]
    fn json_like_input_doesnt_panic(
        s in prop::string::string_regex(r#"\{[^\}]{0,500}\}"#).unwrap()
    ) {
        let _ = parse_spec_str(&s);
    }

    #[test]
    fn yaml_mapping_like_doesnt_panic(
        key in "[A-Za-z]{1,20}",
        value in "\\PC{0,100}",
    ) {
        let input = format!("{key}: {value}");
        let _ = parse_spec_str(&input);
    }

    #[test]
    fn empty_and_whitespace_is_rejected(s in "\\s{0,100}") {
        prop_assert!(parse_spec_str(&s).is_err());
    }

    #[test]
    fn openapi_partial_json_doesnt_panic(
        version in "3\\.[0-9]\\.[0-9]",
        extra in "\\PC{0,200}",
    ) {
        let input = format!(r#"{{"openapi": "{version}", "paths": {{{extra}}}}}"#);
        let _ = parse_spec_str(&input);
    }

    #[test]
    fn swagger_partial_yaml_doesnt_panic(
        path in "/[a-z{}]{0,20}",
        method in "(get|put|post|delete|trace|bogus)",
        extra in "\\PC{0,100}",
    ) {
        let input = format!("swagger: '2.0'\npaths:\n  {path}:\n    {method}:\n      {extra}\n");
        let _ = parse_spec_str(&input);
    }
}
