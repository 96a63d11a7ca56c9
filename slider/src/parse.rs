//! Lenient parsing of raw control values.
//!
//! Range inputs report their value as a string. A malformed string must never
//! break the slider, so parsing reads the leading integer (optional sign,
//! then ASCII digits, surrounding whitespace ignored) and falls back to `0`
//! when there is none. `"12.7"` reads as `12`, `"7px"` as `7`, `"abc"` as `0`.

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;

/// Parse the leading integer of `raw`, or `0` if it has none.
///
/// Values beyond the `i64` range saturate instead of wrapping.
#[must_use]
pub fn parse_lenient(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        let digit = i64::from(byte - b'0');
        value = value.saturating_mul(10).saturating_add(digit);
    }

    if !seen_digit {
        return 0;
    }
    if negative { -value } else { value }
}

/// Parse `raw` leniently and clamp the result into `[0, max]`.
#[must_use]
pub fn parse_clamped(raw: &str, max: i64) -> i64 {
    parse_lenient(raw).clamp(0, max.max(0))
}
