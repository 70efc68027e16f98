//! Precision-preserving number formatting.
//!
//! A [`FormatSpec`] is derived from the value being shown: it keeps exactly
//! as many fraction digits as the value's own textual form has. Specs are
//! plain values built per call; nothing is cached between calls.

use fixed_decimal::{Decimal, FloatPrecision, Sign, SignedRoundingMode, UnsignedRoundingMode};
use serde::Deserialize;

use crate::classify::DigitClassifier;
use crate::parse::parse_decimal;
use crate::symbols::LocaleSymbols;

/// A number held by a field, or `None` when the field has no value.
pub type NumericValue = Option<Decimal>;

/// Convert a host float into a field value. NaN and infinities are unset.
///
/// ```
/// use numeric_core::numeric_value_from_f64;
///
/// assert_eq!(numeric_value_from_f64(5.25).unwrap().to_string(), "5.25");
/// assert!(numeric_value_from_f64(f64::NAN).is_none());
/// ```
pub fn numeric_value_from_f64(value: f64) -> NumericValue {
    Decimal::try_from_f64(value, FloatPrecision::RoundTrip).ok()
}

/// How a value is rounded when it has more fraction digits than allowed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Toward negative infinity.
    #[default]
    Floor,
    Ceil,
    /// Toward zero.
    Trunc,
    HalfEven,
    HalfExpand,
}

impl Rounding {
    fn mode(self) -> SignedRoundingMode {
        match self {
            Rounding::Floor => SignedRoundingMode::Floor,
            Rounding::Ceil => SignedRoundingMode::Ceil,
            Rounding::Trunc => SignedRoundingMode::Unsigned(UnsignedRoundingMode::Trunc),
            Rounding::HalfEven => SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfEven),
            Rounding::HalfExpand => SignedRoundingMode::Unsigned(UnsignedRoundingMode::HalfExpand),
        }
    }
}

/// Plain-numeral format configuration. Grouping separators are never emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FormatSpec {
    pub min_fraction_digits: u16,
    pub max_fraction_digits: u16,
    pub min_integer_digits: u16,
    pub rounding: Rounding,
}

impl Default for FormatSpec {
    fn default() -> Self {
        Self {
            min_fraction_digits: 0,
            max_fraction_digits: 0,
            min_integer_digits: 1,
            rounding: Rounding::Floor,
        }
    }
}

impl FormatSpec {
    /// The spec that re-renders `value` with its own fraction-digit count.
    ///
    /// ```
    /// use numeric_core::{FormatSpec, LocaleSymbols};
    ///
    /// let symbols = LocaleSymbols::default();
    /// let value = "5.250".parse().unwrap();
    /// let spec = FormatSpec::preserving(&value, symbols);
    /// assert_eq!(spec.max_fraction_digits, 2);
    /// assert_eq!(spec.format(&value, symbols), "5.25");
    /// ```
    pub fn preserving(value: &Decimal, symbols: LocaleSymbols) -> Self {
        let digits = digits_after_separator(value, symbols);
        Self {
            max_fraction_digits: u16::try_from(digits).unwrap_or(u16::MAX),
            ..Self::default()
        }
    }

    /// Render `value` with this spec and the locale's symbols.
    pub fn format(&self, value: &Decimal, symbols: LocaleSymbols) -> String {
        let max = self.max_fraction_digits.max(self.min_fraction_digits);

        let mut d = value.clone();
        d.round_with_mode(-magnitude(max), self.rounding.mode());
        d.absolute.trim_end();
        if self.min_fraction_digits > 0 {
            d.absolute.pad_end(-magnitude(self.min_fraction_digits));
        }
        if self.min_integer_digits > 1 {
            d.absolute.pad_start(magnitude(self.min_integer_digits) - 1);
        }
        if d.absolute.is_zero() {
            d.sign = Sign::None;
        }
        localize(&d.to_string(), symbols)
    }

    /// Parse `text`, then apply this spec's fraction limit and rounding.
    pub fn parse(
        &self,
        text: &str,
        symbols: LocaleSymbols,
        classifier: &impl DigitClassifier,
    ) -> Option<Decimal> {
        let max = self.max_fraction_digits.max(self.min_fraction_digits);

        let mut d = parse_decimal(text, symbols, classifier)?;
        d.round_with_mode(-magnitude(max), self.rounding.mode());
        d.absolute.trim_end();
        Some(d)
    }
}

fn magnitude(digits: u16) -> i16 {
    i16::try_from(digits).unwrap_or(i16::MAX)
}

/// Number of fraction digits in the default textual form of `value`.
///
/// The default form carries no trailing fraction zeros, so 5.250 has two.
///
/// ```
/// use numeric_core::{LocaleSymbols, digits_after_separator};
///
/// let symbols = LocaleSymbols::default();
/// assert_eq!(digits_after_separator(&"5".parse().unwrap(), symbols), 0);
/// assert_eq!(digits_after_separator(&"5.0".parse().unwrap(), symbols), 0);
/// assert_eq!(digits_after_separator(&"-0.125".parse().unwrap(), symbols), 3);
/// ```
pub fn digits_after_separator(value: &Decimal, symbols: LocaleSymbols) -> usize {
    let text = default_text(value, symbols);
    text.split_once(symbols.decimal_separator())
        .map(|(_, fraction)| fraction.chars().count())
        .unwrap_or(0)
}

/// The value's default textual form in the locale.
pub fn default_text(value: &Decimal, symbols: LocaleSymbols) -> String {
    localize(&canonical(value).to_string(), symbols)
}

/// The value rendered as a plain integer, truncated toward zero.
///
/// ```
/// use numeric_core::{LocaleSymbols, integer_text};
///
/// let symbols = LocaleSymbols::default();
/// assert_eq!(integer_text(&"-5.7".parse().unwrap(), symbols), "-5");
/// assert_eq!(integer_text(&"-0.2".parse().unwrap(), symbols), "0");
/// ```
pub fn integer_text(value: &Decimal, symbols: LocaleSymbols) -> String {
    let spec = FormatSpec {
        rounding: Rounding::Trunc,
        ..FormatSpec::default()
    };
    spec.format(value, symbols)
}

/// `value` without trailing fraction zeros.
pub(crate) fn canonical(value: &Decimal) -> Decimal {
    let mut d = value.clone();
    d.absolute.trim_end();
    d
}

/// Compare two field values numerically (`5.0 == 5`).
pub(crate) fn same_value(a: &NumericValue, b: &NumericValue) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => canonical(a).to_string() == canonical(b).to_string(),
        _ => false,
    }
}

/// Swap the ASCII `.`/`-` that `Decimal` renders for the locale's symbols.
fn localize(ascii: &str, symbols: LocaleSymbols) -> String {
    if symbols == LocaleSymbols::default() {
        return ascii.to_owned();
    }
    ascii
        .chars()
        .map(|c| match c {
            '.' => symbols.decimal_separator(),
            '-' => symbols.negative_sign(),
            c => c,
        })
        .collect()
}
