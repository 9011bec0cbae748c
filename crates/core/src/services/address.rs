//! Address expression evaluation.
//!
//! An expression is one or more hexadecimal terms joined by `+`/`-`, e.g.
//! `7FF6A000+1C-8`. The result is rendered as `0x` + uppercase hex digits.

use crate::error::{TableError, TableResult};
use crate::model::NOT_AVAILABLE;

/// Evaluate an address expression into a normalized hex string.
///
/// - Absent or empty input yields `N/A`.
/// - A lone term drops any leading sign: `-1A` renders as `0x1A`.
/// - Multiple terms are summed with their signs; negative totals render as `-0x..`.
pub fn evaluate_address(expr: Option<&str>) -> TableResult<String> {
    let expr = match expr {
        Some(e) if !e.is_empty() => e,
        _ => return Ok(NOT_AVAILABLE.to_string()),
    };

    let terms = split_terms(expr);

    if let [single] = terms.as_slice() {
        let trimmed = single.trim();
        let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed).trim();
        let value = parse_hex_term(digits, expr)?;
        return Ok(format!("0x{value:X}"));
    }

    let mut total: i128 = 0;
    for term in terms {
        let trimmed = term.trim();
        let (negative, digits) = match trimmed.chars().next() {
            Some('-') => (true, &trimmed[1..]),
            Some('+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let value = parse_hex_term(digits.trim(), expr)?;
        let value =
            i128::try_from(value).map_err(|_| TableError::AddressOverflow { expr: expr.into() })?;
        let signed = if negative { -value } else { value };
        total = total
            .checked_add(signed)
            .ok_or_else(|| TableError::AddressOverflow { expr: expr.into() })?;
    }

    Ok(format_signed_hex(total))
}

/// Split before every `+`/`-`, keeping the sign with the term that follows it.
///
/// A sign at the very start does not produce an empty leading term.
fn split_terms(expr: &str) -> Vec<&str> {
    let mut terms = Vec::new();
    let mut start = 0;
    for (idx, ch) in expr.char_indices() {
        if (ch == '+' || ch == '-') && idx > 0 {
            terms.push(&expr[start..idx]);
            start = idx;
        }
    }
    terms.push(&expr[start..]);
    terms
}

fn parse_hex_term(digits: &str, expr: &str) -> TableResult<u128> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(TableError::InvalidHexTerm { term: digits.to_string(), expr: expr.to_string() });
    }
    u128::from_str_radix(digits, 16).map_err(|_| TableError::AddressOverflow { expr: expr.into() })
}

fn format_signed_hex(total: i128) -> String {
    if total < 0 {
        format!("-0x{:X}", total.unsigned_abs())
    } else {
        format!("0x{total:X}")
    }
}
