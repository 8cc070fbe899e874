// Wed Oct 14 2026 - Alex

/// Parses a numeral the way C's `strtol(text, NULL, 0)` does.
///
/// Leading whitespace and one sign are accepted. The radix follows the
/// prefix: `0x`/`0X` for hex, a leading `0` for octal, decimal otherwise.
/// Parsing stops at the first invalid digit and an empty numeral is `0`.
/// Out-of-range values saturate to the `isize` bounds.
pub fn parse_offset(text: &str) -> isize {
    let text = text.trim_start();

    let (negative, text) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let (radix, digits) = if let Some(rest) = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_hexdigit()))
    {
        (16, rest)
    } else if text.starts_with('0') {
        (8, text)
    } else {
        (10, text)
    };

    let mut magnitude: i128 = 0;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(digit) => {
                magnitude = magnitude
                    .saturating_mul(radix as i128)
                    .saturating_add(digit as i128);
            }
            None => break,
        }
    }

    let value = if negative { -magnitude } else { magnitude };
    value.clamp(isize::MIN as i128, isize::MAX as i128) as isize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(parse_offset("16"), 16);
        assert_eq!(parse_offset("  -24"), -24);
        assert_eq!(parse_offset("+7"), 7);
    }

    #[test]
    fn test_hex_prefix() {
        assert_eq!(parse_offset("0x10"), 16);
        assert_eq!(parse_offset("0XfF"), 255);
        assert_eq!(parse_offset("-0x8"), -8);
    }

    #[test]
    fn test_octal_prefix() {
        assert_eq!(parse_offset("010"), 8);
        assert_eq!(parse_offset("0"), 0);
        assert_eq!(parse_offset("09"), 0);
    }

    #[test]
    fn test_stops_at_invalid_digit() {
        assert_eq!(parse_offset("12abc"), 12);
        assert_eq!(parse_offset("0x1g"), 1);
        assert_eq!(parse_offset("0x"), 0);
        assert_eq!(parse_offset(""), 0);
        assert_eq!(parse_offset("offset"), 0);
    }

    #[test]
    fn test_saturates() {
        assert_eq!(parse_offset("0xffffffffffffffffffff"), isize::MAX);
        assert_eq!(parse_offset("-99999999999999999999999"), isize::MIN);
    }
}
