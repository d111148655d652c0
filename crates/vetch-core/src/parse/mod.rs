//! Raw string coercion primitives.
//!
//! Boolean classification is an exact, case-sensitive match against fixed
//! token sets. Numeric parsing consumes the longest valid leading prefix
//! and ignores trailing content, so `8080abc` parses as 8080 and `3.14`
//! parses as 3 when an integer is requested.

/// String literals recognized as boolean true
pub const TRUTHY: [&str; 5] = ["true", "1", "yes", "y", "on"];

/// String literals recognized as boolean false
pub const FALSY: [&str; 5] = ["false", "0", "no", "n", "off"];

/// Check membership in the truthy token set
pub fn is_truthy(value: &str) -> bool {
    TRUTHY.contains(&value)
}

/// Check membership in the falsy token set
pub fn is_falsy(value: &str) -> bool {
    FALSY.contains(&value)
}

/// Parse the longest base-10 integer prefix of `value`.
///
/// Leading whitespace and an optional sign are permitted; parsing stops at
/// the first non-digit. Returns `None` when no digit is consumed, or when
/// the digits do not fit in an `i64`.
pub fn int_prefix(value: &str) -> Option<i64> {
    let rest = value.trim_start();
    let (negative, digits) = match rest.as_bytes().first().copied() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    // Accumulate negated so i64::MIN parses without overflow.
    let mut parsed: Option<i64> = None;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        let digit = i64::from(byte - b'0');
        parsed = Some(parsed.unwrap_or(0).checked_mul(10)?.checked_sub(digit)?);
    }

    let negated = parsed?;
    if negative {
        Some(negated)
    } else {
        negated.checked_neg()
    }
}

/// Parse the longest decimal floating-point prefix of `value`.
///
/// The prefix is an optional sign, digits with an optional fractional part
/// (`0.5`, `.5`, and `5.` are all valid), and an optional exponent. An
/// exponent marker without digits is left unconsumed, so `1e` parses as
/// 1.0. Returns `None` when no mantissa digit is consumed.
pub fn float_prefix(value: &str) -> Option<f64> {
    let rest = value.trim_start();
    let bytes = rest.as_bytes();

    let mut end = 0;
    if matches!(bytes.first().copied(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end).copied(), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end).copied(), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    rest[..end].parse().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}
