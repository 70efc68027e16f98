//! Keystroke filtering.
//!
//! Reduces arbitrary text to the characters that can take part in a number:
//! digits, at most one decimal separator and at most one negative sign. The
//! result is a partial number, not a validated one; `"12-3"` is a legal
//! intermediate state while the user is still typing.

use std::borrow::Cow;

use crate::classify::DigitClassifier;
use crate::symbols::LocaleSymbols;

/// Which symbols besides digits a field accepts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Policy {
    pub allow_decimal: bool,
    pub allow_negative: bool,
}

impl Policy {
    pub const INTEGER: Self = Self {
        allow_decimal: false,
        allow_negative: false,
    };

    pub const SIGNED_INTEGER: Self = Self {
        allow_decimal: false,
        allow_negative: true,
    };

    pub const DECIMAL: Self = Self {
        allow_decimal: true,
        allow_negative: false,
    };

    pub const SIGNED_DECIMAL: Self = Self {
        allow_decimal: true,
        allow_negative: true,
    };

    #[inline]
    pub const fn new(allow_decimal: bool, allow_negative: bool) -> Self {
        Self {
            allow_decimal,
            allow_negative,
        }
    }
}

/// Filter `raw` down to the characters a numeric field keeps.
///
/// Single left-to-right pass: digits are always kept; the first decimal
/// separator and the first negative sign are kept when the policy allows
/// them; everything else is dropped. Relative order is preserved.
///
/// Returns `Cow::Borrowed` when nothing had to be dropped.
///
/// # Examples
///
/// ```
/// use numeric_core::{LocaleSymbols, Policy, UnicodeDigits, filter_numeric};
///
/// let symbols = LocaleSymbols::default();
/// assert_eq!(filter_numeric("12.3.4", Policy::DECIMAL, symbols, &UnicodeDigits), "12.34");
/// assert_eq!(filter_numeric("12a.3b4", Policy::DECIMAL, symbols, &UnicodeDigits), "12.34");
/// assert_eq!(filter_numeric("-52", Policy::DECIMAL, symbols, &UnicodeDigits), "52");
/// assert_eq!(filter_numeric("-52", Policy::SIGNED_DECIMAL, symbols, &UnicodeDigits), "-52");
/// ```
pub fn filter_numeric<'a>(
    raw: &'a str,
    policy: Policy,
    symbols: LocaleSymbols,
    classifier: &impl DigitClassifier,
) -> Cow<'a, str> {
    let mut seen_decimal = false;
    let mut seen_negative = false;
    let mut keep = |c: char| -> bool {
        if classifier.is_digit(c) {
            true
        } else if policy.allow_decimal && c == symbols.decimal_separator() {
            !std::mem::replace(&mut seen_decimal, true)
        } else if policy.allow_negative && c == symbols.negative_sign() {
            !std::mem::replace(&mut seen_negative, true)
        } else {
            false
        }
    };

    // Fast path: borrow until the first dropped character.
    let Some((cut, _)) = raw.char_indices().find(|&(_, c)| !keep(c)) else {
        return Cow::Borrowed(raw);
    };

    let mut out = String::with_capacity(raw.len());
    out.push_str(&raw[..cut]);
    let mut rest = raw[cut..].chars();
    let _ = rest.next(); // the dropped character
    out.extend(rest.filter(|&c| keep(c)));

    log::trace!(
        target: "numeric.filter",
        "dropped {} char(s) from {raw:?}",
        raw.chars().count() - out.chars().count()
    );
    Cow::Owned(out)
}
