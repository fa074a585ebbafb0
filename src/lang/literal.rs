use super::{Column, Error};
use crate::error;

type Result<T> = std::result::Result<T, Error>;

/// Recognize a numeric literal at `column`, advancing past it.
///
/// Decimal literals may carry a fraction and an exponent. `&` and `$`
/// introduce hexadecimal, `%` binary. Digits may be separated with `_`.
/// Returns `Ok(None)` and leaves `column` alone when there is no literal.
pub fn numeric(line: &[u8], column: &mut Column) -> Result<Option<f64>> {
    match line.get(*column) {
        Some(b'&') | Some(b'$') => radix(line, column, 16),
        Some(b'%') => radix(line, column, 2),
        Some(ch) if ch.is_ascii_digit() => Ok(Some(decimal(line, column))),
        Some(b'.') if line.get(*column + 1).map_or(false, u8::is_ascii_digit) => {
            Ok(Some(decimal(line, column)))
        }
        _ => Ok(None),
    }
}

fn radix(line: &[u8], column: &mut Column, radix: u32) -> Result<Option<f64>> {
    let start = *column;
    let mut pos = start + 1;
    let mut value: u64 = 0;
    let mut digits = 0;
    while let Some(&ch) = line.get(pos) {
        if ch == b'_' && digits > 0 {
            pos += 1;
            continue;
        }
        let digit = match (ch as char).to_digit(radix) {
            Some(d) => d,
            None => break,
        };
        value = value * radix as u64 + digit as u64;
        if value > u32::max_value() as u64 {
            return Err(error!(NumberTooBig, ..start));
        }
        digits += 1;
        pos += 1;
    }
    if digits == 0 {
        return Ok(None);
    }
    *column = pos;
    Ok(Some(value as f64))
}

fn decimal(line: &[u8], column: &mut Column) -> f64 {
    let mut s = String::new();
    let mut pos = *column;
    let mut fraction = false;
    let mut exp = false;
    while let Some(&ch) = line.get(pos) {
        match ch {
            b'0'..=b'9' => s.push(ch as char),
            b'_' if !s.is_empty() => {}
            b'.' if !fraction && !exp => {
                fraction = true;
                s.push('.');
            }
            b'e' | b'E' if !exp && !s.is_empty() => {
                let mut look = pos + 1;
                if let Some(b'+') | Some(b'-') = line.get(look) {
                    look += 1;
                }
                if !line.get(look).map_or(false, u8::is_ascii_digit) {
                    break;
                }
                exp = true;
                s.push('E');
                s.extend(line[pos + 1..look].iter().map(|&c| c as char));
                pos = look;
                continue;
            }
            _ => break,
        }
        pos += 1;
    }
    *column = pos;
    if s.ends_with('.') {
        s.push('0');
    }
    if s.starts_with('.') {
        s.insert(0, '0');
    }
    s.parse().unwrap_or(0.0)
}

/// The `VAL` conversion: the longest decimal prefix after leading blanks,
/// or zero when there is none.
pub fn leading_decimal(text: &[u8]) -> f64 {
    let mut pos = 0;
    while let Some(b' ') | Some(b'\t') = text.get(pos) {
        pos += 1;
    }
    let negative = match text.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };
    let starts_number = match text.get(pos) {
        Some(ch) if ch.is_ascii_digit() => true,
        Some(b'.') => text.get(pos + 1).map_or(false, u8::is_ascii_digit),
        _ => false,
    };
    if !starts_number {
        return 0.0;
    }
    let mut col = pos;
    let n = decimal(text, &mut col);
    if negative {
        -n
    } else {
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> (Option<f64>, usize) {
        let mut col = 0;
        let n = numeric(s.as_bytes(), &mut col).unwrap();
        (n, col)
    }

    #[test]
    fn test_decimal() {
        assert_eq!(lit("42+1"), (Some(42.0), 2));
        assert_eq!(lit("1.5)"), (Some(1.5), 3));
        assert_eq!(lit(".25"), (Some(0.25), 3));
        assert_eq!(lit("2e3"), (Some(2000.0), 3));
        assert_eq!(lit("2.5E-1"), (Some(0.25), 6));
        assert_eq!(lit("1_000"), (Some(1000.0), 5));
    }

    #[test]
    fn test_exponent_needs_digits() {
        assert_eq!(lit("2EOR3"), (Some(2.0), 1));
        assert_eq!(lit("3e"), (Some(3.0), 1));
    }

    #[test]
    fn test_radix() {
        assert_eq!(lit("&FF"), (Some(255.0), 3));
        assert_eq!(lit("$c000"), (Some(49152.0), 5));
        assert_eq!(lit("%1010"), (Some(10.0), 5));
        assert_eq!(lit("&FFFF_FFFF"), (Some(4294967295.0), 10));
        assert_eq!(lit("&"), (None, 0));
        assert_eq!(lit("%2"), (None, 0));
    }

    #[test]
    fn test_radix_overflow() {
        let mut col = 0;
        let e = numeric(b"&100000000", &mut col).unwrap_err();
        assert_eq!(e.code(), crate::lang::ErrorCode::NumberTooBig);
    }

    #[test]
    fn test_not_a_number() {
        assert_eq!(lit("abc"), (None, 0));
        assert_eq!(lit("."), (None, 0));
        assert_eq!(lit(""), (None, 0));
    }

    #[test]
    fn test_leading_decimal() {
        assert_eq!(leading_decimal(b"  12.5xyz"), 12.5);
        assert_eq!(leading_decimal(b"-3"), -3.0);
        assert_eq!(leading_decimal(b"hello"), 0.0);
        assert_eq!(leading_decimal(b""), 0.0);
    }
}
