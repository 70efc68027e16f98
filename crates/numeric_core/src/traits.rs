//! Object-safe view of a numeric field.
//!
//! Hosts that juggle fields with different digit classifiers, or that want
//! to swap in a fake for testing, talk to `dyn NumericField` instead of a
//! concrete [`Synchronizer`](crate::Synchronizer).

use fixed_decimal::Decimal;

use crate::classify::DigitClassifier;
use crate::format::NumericValue;
use crate::sync::{NumberUpdate, Synchronizer, TextUpdate};

pub trait NumericField {
    /// The user edited the text. See [`Synchronizer::on_text_changed`].
    fn on_text_changed(&mut self, raw: &str) -> TextUpdate;

    /// The program set the number. See [`Synchronizer::on_number_set`].
    fn on_number_set(&mut self, value: NumericValue) -> NumberUpdate;

    fn text(&self) -> &str;

    fn number(&self) -> Option<&Decimal>;

    fn text_revision(&self) -> u64;
}

impl<C: DigitClassifier> NumericField for Synchronizer<C> {
    #[inline]
    fn on_text_changed(&mut self, raw: &str) -> TextUpdate {
        Synchronizer::on_text_changed(self, raw)
    }

    #[inline]
    fn on_number_set(&mut self, value: NumericValue) -> NumberUpdate {
        Synchronizer::on_number_set(self, value)
    }

    #[inline]
    fn text(&self) -> &str {
        Synchronizer::text(self)
    }

    #[inline]
    fn number(&self) -> Option<&Decimal> {
        Synchronizer::number(self)
    }

    #[inline]
    fn text_revision(&self) -> u64 {
        Synchronizer::text_revision(self)
    }
}
