//! Digit classification.
//!
//! The filter keeps every character a classifier accepts as a whole-number
//! digit, and the parser asks the same classifier for the digit's value, so
//! text typed in any decimal numeral system survives and parses.

use icu_properties::{CodePointMapData, props::GeneralCategory};

/// Decides which characters count as decimal digits and what they are worth.
pub trait DigitClassifier {
    /// The value (0..=9) of `c`, or `None` if `c` is not a decimal digit.
    fn digit_value(&self, c: char) -> Option<u8>;

    #[inline]
    fn is_digit(&self, c: char) -> bool {
        self.digit_value(c).is_some()
    }
}

impl<T: DigitClassifier + ?Sized> DigitClassifier for &T {
    #[inline]
    fn digit_value(&self, c: char) -> Option<u8> {
        (**self).digit_value(c)
    }
}

/// Accepts every Unicode decimal digit (general category `Nd`).
///
/// ```
/// use numeric_core::{DigitClassifier, UnicodeDigits};
///
/// assert_eq!(UnicodeDigits.digit_value('7'), Some(7));
/// assert_eq!(UnicodeDigits.digit_value('\u{096B}'), Some(5)); // DEVANAGARI DIGIT FIVE
/// assert_eq!(UnicodeDigits.digit_value('x'), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UnicodeDigits;

/// Longest run of consecutive `Nd` code points (MATHEMATICAL DIGIT ZERO..).
const MAX_DIGIT_RUN: u32 = 50;

impl DigitClassifier for UnicodeDigits {
    fn digit_value(&self, c: char) -> Option<u8> {
        if let Some(d) = c.to_digit(10) {
            return Some(d as u8);
        }
        if c.is_ascii() {
            return None;
        }

        let gc = CodePointMapData::<GeneralCategory>::new();
        if gc.get(c) != GeneralCategory::DecimalNumber {
            return None;
        }

        // Nd code points come in contiguous runs of ten starting at zero,
        // so the value is the offset from the start of the run, mod 10.
        let mut offset = 0u32;
        let mut cp = c as u32;
        while offset < MAX_DIGIT_RUN {
            let Some(prev) = cp.checked_sub(1).and_then(char::from_u32) else {
                break;
            };
            if gc.get(prev) != GeneralCategory::DecimalNumber {
                break;
            }
            cp -= 1;
            offset += 1;
        }
        Some((offset % 10) as u8)
    }
}

/// Accepts only ASCII `0`..=`9`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AsciiDigits;

impl DigitClassifier for AsciiDigits {
    #[inline]
    fn digit_value(&self, c: char) -> Option<u8> {
        c.to_digit(10).map(|d| d as u8)
    }
}
