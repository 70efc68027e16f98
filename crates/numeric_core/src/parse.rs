//! Parsing cleaned text into numbers.
//!
//! Digits are looked up through the [`DigitClassifier`], so any decimal
//! numeral system parses, and the locale's symbols are matched literally.

use fixed_decimal::Decimal;

use crate::classify::DigitClassifier;
use crate::symbols::LocaleSymbols;

/// Result of scanning `sign? digit* (separator digit*)?` from the start of a string.
#[derive(Debug, Default)]
struct Scanned {
    negative: bool,
    integer: String,
    fraction: String,
    /// Byte offset where the scan stopped.
    end: usize,
}

impl Scanned {
    fn has_digits(&self) -> bool {
        !self.integer.is_empty() || !self.fraction.is_empty()
    }

    /// ASCII form accepted by `Decimal::try_from_str`, without redundant zeros.
    fn to_decimal(&self) -> Option<Decimal> {
        let integer = self.integer.trim_start_matches('0');
        let fraction = self.fraction.trim_end_matches('0');

        let mut s = String::with_capacity(integer.len() + fraction.len() + 3);
        if self.negative {
            s.push('-');
        }
        s.push_str(if integer.is_empty() { "0" } else { integer });
        if !fraction.is_empty() {
            s.push('.');
            s.push_str(fraction);
        }
        Decimal::try_from_str(&s).ok()
    }
}

fn scan(
    text: &str,
    symbols: LocaleSymbols,
    classifier: &impl DigitClassifier,
    allow_separator: bool,
) -> Scanned {
    let mut out = Scanned::default();
    let mut in_fraction = false;

    for (i, c) in text.char_indices() {
        if let Some(d) = classifier.digit_value(c) {
            let digits = if in_fraction {
                &mut out.fraction
            } else {
                &mut out.integer
            };
            digits.push(char::from(b'0' + d));
        } else if i == 0 && c == symbols.negative_sign() {
            out.negative = true;
        } else if allow_separator && !in_fraction && c == symbols.decimal_separator() {
            in_fraction = true;
        } else {
            out.end = i;
            return out;
        }
    }
    out.end = text.len();
    out
}

/// Parse a complete decimal number.
///
/// The negative sign may only lead. A lone sign, a lone separator, an
/// embedded sign or any stray character yields `None`. A trailing separator
/// is accepted (`"1."` is 1), and so is a leading one (`".5"` is 0.5).
///
/// ```
/// use numeric_core::{LocaleSymbols, UnicodeDigits, parse_decimal};
///
/// let symbols = LocaleSymbols::default();
/// let n = parse_decimal("-12.50", symbols, &UnicodeDigits).unwrap();
/// assert_eq!(n.to_string(), "-12.5");
/// assert!(parse_decimal("12-3", symbols, &UnicodeDigits).is_none());
/// assert!(parse_decimal("-", symbols, &UnicodeDigits).is_none());
/// ```
pub fn parse_decimal(
    text: &str,
    symbols: LocaleSymbols,
    classifier: &impl DigitClassifier,
) -> Option<Decimal> {
    let scanned = scan(text, symbols, classifier, true);
    if scanned.end != text.len() || !scanned.has_digits() {
        return None;
    }
    scanned.to_decimal()
}

/// Best-effort parse of the longest numeric prefix of `text`.
///
/// `"12.5-3"` yields 12.5; text without a leading numeral yields `None`.
pub fn leading_numeral(
    text: &str,
    symbols: LocaleSymbols,
    classifier: &impl DigitClassifier,
) -> Option<Decimal> {
    let scanned = scan(text, symbols, classifier, true);
    if !scanned.has_digits() {
        return None;
    }
    scanned.to_decimal()
}

/// Parse a whole-string signed integer, falling back to 0.
///
/// Anything that is not `sign? digit+`, including values outside the `i64`
/// range, parses as 0.
///
/// ```
/// use numeric_core::{LocaleSymbols, UnicodeDigits, parse_integer};
///
/// let symbols = LocaleSymbols::default();
/// assert_eq!(parse_integer("-42", symbols, &UnicodeDigits), -42);
/// assert_eq!(parse_integer("", symbols, &UnicodeDigits), 0);
/// assert_eq!(parse_integer("4-2", symbols, &UnicodeDigits), 0);
/// ```
pub fn parse_integer(text: &str, symbols: LocaleSymbols, classifier: &impl DigitClassifier) -> i64 {
    let scanned = scan(text, symbols, classifier, false);
    if scanned.end != text.len() || scanned.integer.is_empty() {
        return 0;
    }

    let mut acc: i64 = 0;
    for d in scanned.integer.bytes().map(|b| i64::from(b - b'0')) {
        // Accumulate negatives downwards so i64::MIN is reachable.
        let next = acc.checked_mul(10).and_then(|v| {
            if scanned.negative {
                v.checked_sub(d)
            } else {
                v.checked_add(d)
            }
        });
        match next {
            Some(v) => acc = v,
            None => {
                log::debug!(target: "numeric.parse", "integer overflow in {text:?}");
                return 0;
            }
        }
    }
    acc
}
