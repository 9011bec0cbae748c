use cetable_core::services::evaluate_address;
use cetable_core::TableError;

#[test]
fn single_term_is_normalized_to_uppercase_hex() {
    assert_eq!(evaluate_address(Some("1A")).unwrap(), "0x1A");
    assert_eq!(evaluate_address(Some("ff")).unwrap(), "0xFF");
    assert_eq!(evaluate_address(Some("0001")).unwrap(), "0x1");
}

#[test]
fn single_term_drops_leading_sign() {
    assert_eq!(evaluate_address(Some("-1A")).unwrap(), "0x1A");
    assert_eq!(evaluate_address(Some("+1A")).unwrap(), "0x1A");
}

#[test]
fn multi_term_sums_signed_terms() {
    assert_eq!(evaluate_address(Some("10+5")).unwrap(), "0x15");
    assert_eq!(evaluate_address(Some("20-5")).unwrap(), "0x1B");
    assert_eq!(evaluate_address(Some("14000000+1F0-10")).unwrap(), "0x140001E0");
}

#[test]
fn negative_total_uses_signed_prefix() {
    assert_eq!(evaluate_address(Some("5-10")).unwrap(), "-0xB");
    assert_eq!(evaluate_address(Some("-10-5")).unwrap(), "-0x15");
}

#[test]
fn whitespace_around_terms_is_ignored() {
    assert_eq!(evaluate_address(Some(" 10 + 5 ")).unwrap(), "0x15");
}

#[test]
fn totals_beyond_64_bits_do_not_wrap() {
    assert_eq!(evaluate_address(Some("FFFFFFFFFFFFFFFF+1")).unwrap(), "0x10000000000000000");
}

#[test]
fn absent_or_empty_address_yields_na() {
    assert_eq!(evaluate_address(None).unwrap(), "N/A");
    assert_eq!(evaluate_address(Some("")).unwrap(), "N/A");
}

#[test]
fn invalid_single_term_is_rejected() {
    match evaluate_address(Some("XYZ")) {
        Err(TableError::InvalidHexTerm { term, expr }) => {
            assert_eq!(term, "XYZ");
            assert_eq!(expr, "XYZ");
        }
        other => panic!("expected InvalidHexTerm, got {other:?}"),
    }
}

#[test]
fn invalid_multi_term_names_offending_term() {
    match evaluate_address(Some("game.exe+10")) {
        Err(TableError::InvalidHexTerm { term, .. }) => assert_eq!(term, "game.exe"),
        other => panic!("expected InvalidHexTerm, got {other:?}"),
    }
    match evaluate_address(Some("10+G1")) {
        Err(TableError::InvalidHexTerm { term, .. }) => assert_eq!(term, "G1"),
        other => panic!("expected InvalidHexTerm, got {other:?}"),
    }
}

#[test]
fn dangling_operator_is_rejected() {
    let err = evaluate_address(Some("10+")).unwrap_err();
    assert!(matches!(err, TableError::InvalidHexTerm { ref term, .. } if term.is_empty()));
}

#[test]
fn oversized_term_reports_overflow() {
    let huge = format!("1{}", "0".repeat(32));
    let err = evaluate_address(Some(huge.as_str())).unwrap_err();
    assert!(matches!(err, TableError::AddressOverflow { .. }), "unexpected error: {err}");
}
