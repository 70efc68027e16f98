//! Two-way text/number synchronization for one numeric field.
//!
//! The host forwards two kinds of events: the user edited the text, or the
//! program set the number. Each handler projects one side onto the other and
//! never raises the opposite event itself.

use fixed_decimal::Decimal;

use crate::classify::{DigitClassifier, UnicodeDigits};
use crate::config::{ConfigError, FormatterOverride, NumericConfig};
use crate::filter::{Policy, filter_numeric};
use crate::format::{FormatSpec, NumericValue, integer_text, same_value};
use crate::parse::{leading_numeral, parse_integer};
use crate::symbols::LocaleSymbols;

/// Outcome of a text edit.
#[derive(Clone, Debug, PartialEq)]
pub struct TextUpdate {
    /// The text the field should display.
    pub text: String,
    /// The number derived from `text`.
    pub number: NumericValue,
    /// `true` when characters of the raw input were dropped, i.e. the host
    /// must replace its displayed text with `text`.
    pub filtered: bool,
}

/// Outcome of a programmatic number update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberUpdate {
    /// The text the field should display.
    pub text: String,
    /// `false` when the text was left alone, e.g. because the number only
    /// echoed the value the last edit produced.
    pub changed: bool,
}

/// An event delivered by the host.
#[derive(Clone, Debug, PartialEq)]
pub enum NumericEvent {
    TextChanged(String),
    NumberChanged(NumericValue),
}

/// The synchronizer's answer to a [`NumericEvent`].
#[derive(Clone, Debug, PartialEq)]
pub enum Reaction {
    Text(TextUpdate),
    Number(NumberUpdate),
}

/// State of one numeric field: its displayed text and its number.
///
/// # Example
///
/// ```
/// use numeric_core::{LocaleSymbols, Policy, Synchronizer};
///
/// let mut field = Synchronizer::new(Policy::SIGNED_DECIMAL, LocaleSymbols::default());
///
/// let update = field.on_text_changed("-12a.5");
/// assert_eq!(update.text, "-12.5");
/// assert!(update.filtered);
/// assert_eq!(update.number.unwrap().to_string(), "-12.5");
///
/// let update = field.on_number_set(Some("5.250".parse().unwrap()));
/// assert_eq!(update.text, "5.25");
/// ```
#[derive(Clone, Debug)]
pub struct Synchronizer<C = UnicodeDigits> {
    policy: Policy,
    symbols: LocaleSymbols,
    classifier: C,
    formatter: Option<FormatterOverride>,
    text: String,
    number: NumericValue,
    text_rev: u64,
    number_rev: u64,
}

impl Synchronizer {
    pub fn new(policy: Policy, symbols: LocaleSymbols) -> Self {
        Self {
            policy,
            symbols,
            classifier: UnicodeDigits,
            formatter: None,
            text: String::new(),
            number: None,
            text_rev: 0,
            number_rev: 0,
        }
    }

    /// Build a field from a loaded configuration.
    pub fn from_config(config: &NumericConfig) -> Result<Self, ConfigError> {
        let mut sync = Self::new(config.policy(), config.symbols()?);
        sync.formatter = config.formatter();
        Ok(sync)
    }
}

impl<C: DigitClassifier> Synchronizer<C> {
    /// Replace the digit classifier.
    pub fn with_classifier<D: DigitClassifier>(self, classifier: D) -> Synchronizer<D> {
        Synchronizer {
            policy: self.policy,
            symbols: self.symbols,
            classifier,
            formatter: self.formatter,
            text: self.text,
            number: self.number,
            text_rev: self.text_rev,
            number_rev: self.number_rev,
        }
    }

    /// Use a custom formatter instead of the precision-preserving one.
    pub fn with_formatter(mut self, formatter: FormatterOverride) -> Self {
        self.formatter = Some(formatter);
        self
    }

    /// Seed the field with a number; the text is its rendering (empty when unset).
    pub fn with_initial_number(mut self, number: NumericValue) -> Self {
        self.text = self.render(number.as_ref());
        self.number = number;
        self
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn symbols(&self) -> LocaleSymbols {
        self.symbols
    }

    /// The text the field displays.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn number(&self) -> Option<&Decimal> {
        self.number.as_ref()
    }

    /// Monotonic counter, incremented whenever the text changes.
    pub fn text_revision(&self) -> u64 {
        self.text_rev
    }

    /// Monotonic counter, incremented whenever the number changes.
    pub fn number_revision(&self) -> u64 {
        self.number_rev
    }

    /// The user edited the text.
    ///
    /// Disallowed characters are dropped, and the number is re-derived from
    /// what remains. In decimal mode unparseable text (`""`, `"-"`, `"."`)
    /// leaves the number unset; in integer mode it becomes 0.
    ///
    /// The result depends only on `raw`, never on earlier events. Text the
    /// host echoes back is parsed again like any other edit.
    pub fn on_text_changed(&mut self, raw: &str) -> TextUpdate {
        let cleaned = filter_numeric(raw, self.policy, self.symbols, &self.classifier);
        let filtered = cleaned != raw;
        if filtered {
            log::debug!(target: "numeric.sync", "rejected input: {raw:?} -> {cleaned:?}");
        }

        let number = self.parse(&cleaned);
        let cleaned = cleaned.into_owned();
        log::trace!(target: "numeric.sync", "text {cleaned:?} -> number {number:?}");

        self.set_text(cleaned);
        self.set_number(number);
        TextUpdate {
            text: self.text.clone(),
            number: self.number.clone(),
            filtered,
        }
    }

    /// The program set the number.
    ///
    /// An unset number clears the text. A number equal to the current one is
    /// an echo of the last edit and leaves the text alone, so in-progress
    /// input such as `"-"` or `"12."` is not overwritten.
    ///
    /// The same rule applies to deliberate updates: after an integer field is
    /// cleared (its number becomes 0), setting 0 keeps the text empty.
    pub fn on_number_set(&mut self, value: NumericValue) -> NumberUpdate {
        if same_value(&value, &self.number) {
            log::debug!(target: "numeric.sync", "suppressed echo of {value:?}");
            return NumberUpdate {
                text: self.text.clone(),
                changed: false,
            };
        }

        let text = self.render(value.as_ref());
        log::trace!(target: "numeric.sync", "number {value:?} -> text {text:?}");

        let changed = self.set_text(text);
        self.set_number(value);
        NumberUpdate {
            text: self.text.clone(),
            changed,
        }
    }

    /// Dispatch a queued host event.
    pub fn apply(&mut self, event: NumericEvent) -> Reaction {
        match event {
            NumericEvent::TextChanged(raw) => Reaction::Text(self.on_text_changed(&raw)),
            NumericEvent::NumberChanged(value) => Reaction::Number(self.on_number_set(value)),
        }
    }

    fn parse(&self, cleaned: &str) -> NumericValue {
        if !self.policy.allow_decimal {
            return Some(Decimal::from(parse_integer(
                cleaned,
                self.symbols,
                &self.classifier,
            )));
        }

        let spec = match self.formatter {
            Some(formatter) if formatter.apply_to_parsing => formatter.spec,
            _ => {
                let hint = leading_numeral(cleaned, self.symbols, &self.classifier)
                    .unwrap_or_else(|| Decimal::from(0));
                FormatSpec::preserving(&hint, self.symbols)
            }
        };
        spec.parse(cleaned, self.symbols, &self.classifier)
    }

    fn render(&self, value: Option<&Decimal>) -> String {
        let Some(value) = value else {
            return String::new();
        };
        if !self.policy.allow_decimal {
            return integer_text(value, self.symbols);
        }
        let spec = match self.formatter {
            Some(formatter) => formatter.spec,
            None => FormatSpec::preserving(value, self.symbols),
        };
        spec.format(value, self.symbols)
    }

    fn set_text(&mut self, text: String) -> bool {
        if self.text == text {
            return false;
        }
        self.text = text;
        self.text_rev = self.text_rev.wrapping_add(1);
        true
    }

    fn set_number(&mut self, number: NumericValue) {
        if same_value(&self.number, &number) {
            return;
        }
        self.number = number;
        self.number_rev = self.number_rev.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::AsciiDigits;
    use crate::format::numeric_value_from_f64;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn shown(number: &NumericValue) -> Option<String> {
        number.as_ref().map(ToString::to_string)
    }

    fn field(policy: Policy) -> Synchronizer {
        Synchronizer::new(policy, LocaleSymbols::default())
    }

    #[test]
    fn typing_a_negative_decimal_keeps_partial_states() {
        let mut f = field(Policy::SIGNED_DECIMAL);
        let steps = [
            ("-", None),
            ("-1", Some("-1")),
            ("-1.", Some("-1")),
            ("-1.5", Some("-1.5")),
        ];
        for (raw, expected) in steps {
            let update = f.on_text_changed(raw);
            assert_eq!(update.text, raw);
            assert!(!update.filtered);
            assert_eq!(shown(&update.number).as_deref(), expected);

            // Host echoes the number back; the partial text must survive.
            let echo = f.on_number_set(update.number);
            assert!(!echo.changed);
            assert_eq!(f.text(), raw);
        }
    }

    #[test]
    fn integer_mode_defaults_to_zero() {
        let mut f = field(Policy::SIGNED_INTEGER);
        assert_eq!(shown(&f.on_text_changed("").number).as_deref(), Some("0"));
        assert_eq!(shown(&f.on_text_changed("-").number).as_deref(), Some("0"));
        assert_eq!(shown(&f.on_text_changed("12-3").number).as_deref(), Some("0"));
        assert_eq!(shown(&f.on_text_changed("-42").number).as_deref(), Some("-42"));

        // An echoed zero does not wipe the lone sign.
        f.on_text_changed("-");
        assert!(!f.on_number_set(Some(d("0"))).changed);
        assert_eq!(f.text(), "-");
    }

    #[test]
    fn decimal_mode_leaves_unparseable_text_unset() {
        let mut f = field(Policy::SIGNED_DECIMAL);
        f.on_text_changed("3");
        assert_eq!(f.on_text_changed("").number, None);
        assert_eq!(f.on_text_changed(".").number, None);
        assert_eq!(f.on_text_changed("1-2").number, None);
    }

    #[test]
    fn rejected_keystrokes_are_reported() {
        let mut f = field(Policy::DECIMAL);
        let update = f.on_text_changed("1.2.");
        assert_eq!(update.text, "1.2");
        assert!(update.filtered);
        assert_eq!(shown(&update.number).as_deref(), Some("1.2"));
    }

    #[test]
    fn number_set_preserves_precision() {
        let mut f = field(Policy::DECIMAL);
        assert_eq!(f.on_number_set(numeric_value_from_f64(5.0)).text, "5");
        assert_eq!(f.on_number_set(Some(d("5.250"))).text, "5.25");
        assert_eq!(f.on_number_set(Some(d("0.125"))).text, "0.125");
    }

    #[test]
    fn unset_number_clears_text() {
        let mut f = field(Policy::DECIMAL);
        f.on_text_changed("12");
        let update = f.on_number_set(None);
        assert_eq!(update.text, "");
        assert!(update.changed);
        assert_eq!(f.number(), None);
    }

    #[test]
    fn integer_mode_renders_truncated_integers() {
        let mut f = field(Policy::SIGNED_INTEGER);
        assert_eq!(f.on_number_set(Some(d("-5.7"))).text, "-5");

        // Text coming back from the host is parsed, not matched against history.
        let update = f.on_text_changed("-5");
        assert_eq!(shown(&update.number).as_deref(), Some("-5"));
    }

    #[test]
    fn text_result_ignores_prior_state() {
        let cases = [
            (Policy::SIGNED_INTEGER, None, "5.7", "5"),
            (Policy::SIGNED_INTEGER, None, "-12.9", "-12"),
            (
                Policy::DECIMAL,
                Some(FormatterOverride::new(FormatSpec::default())),
                "1.5",
                "1",
            ),
        ];
        for (policy, formatter, set, displayed) in cases {
            let mut seasoned = field(policy);
            let mut fresh = field(policy);
            if let Some(formatter) = formatter {
                seasoned = seasoned.with_formatter(formatter);
                fresh = fresh.with_formatter(formatter);
            }

            assert_eq!(seasoned.on_number_set(Some(d(set))).text, displayed);
            let after_set = seasoned.on_text_changed(displayed);
            let from_scratch = fresh.on_text_changed(displayed);

            assert_eq!(after_set, from_scratch, "set={set:?}");
            assert_eq!(shown(&after_set.number).as_deref(), Some(displayed));
        }
    }

    #[test]
    fn setting_the_current_number_keeps_text() {
        let mut f = field(Policy::INTEGER);
        f.on_text_changed("17");
        assert_eq!(shown(&f.on_text_changed("").number).as_deref(), Some("0"));

        let update = f.on_number_set(Some(d("0")));
        assert!(!update.changed);
        assert_eq!(update.text, "");
    }

    #[test]
    fn formatter_override_drives_number_set() {
        let spec = FormatSpec {
            max_fraction_digits: 2,
            ..FormatSpec::default()
        };
        let mut f = field(Policy::DECIMAL).with_formatter(FormatterOverride::new(spec));
        assert_eq!(f.on_number_set(Some(d("3.14159"))).text, "3.14");

        // Typed text keeps its own precision unless the override parses too.
        let update = f.on_text_changed("2.71828");
        assert_eq!(shown(&update.number).as_deref(), Some("2.71828"));
    }

    #[test]
    fn formatter_override_can_drive_parsing() {
        let formatter = FormatterOverride {
            spec: FormatSpec {
                max_fraction_digits: 2,
                ..FormatSpec::default()
            },
            apply_to_parsing: true,
        };
        let mut f = field(Policy::DECIMAL).with_formatter(formatter);
        let update = f.on_text_changed("2.71828");
        assert_eq!(update.text, "2.71828");
        assert_eq!(shown(&update.number).as_deref(), Some("2.71"));
    }

    #[test]
    fn initial_number_seeds_text() {
        let f = field(Policy::DECIMAL).with_initial_number(Some(d("2.50")));
        assert_eq!(f.text(), "2.5");
        let f = field(Policy::DECIMAL).with_initial_number(None);
        assert_eq!(f.text(), "");
    }

    #[test]
    fn locale_symbols_apply_both_ways() {
        let mut f = Synchronizer::new(Policy::SIGNED_DECIMAL, LocaleSymbols::for_locale("de-DE"));
        let update = f.on_text_changed("-1.5,25");
        assert_eq!(update.text, "-15,25");
        assert_eq!(shown(&update.number).as_deref(), Some("-15.25"));
        assert_eq!(f.on_number_set(Some(d("2.25"))).text, "2,25");
    }

    #[test]
    fn custom_classifier_is_used() {
        let mut f = field(Policy::INTEGER).with_classifier(AsciiDigits);
        let update = f.on_text_changed("1\u{096B}2");
        assert_eq!(update.text, "12");
        assert_eq!(shown(&update.number).as_deref(), Some("12"));
    }

    #[test]
    fn revisions_track_real_changes() {
        let mut f = field(Policy::DECIMAL);
        f.on_text_changed("1");
        assert_eq!((f.text_revision(), f.number_revision()), (1, 1));

        // Same value, different text.
        f.on_text_changed("1.");
        assert_eq!((f.text_revision(), f.number_revision()), (2, 1));

        // Echo: nothing moves.
        f.on_number_set(Some(d("1")));
        assert_eq!((f.text_revision(), f.number_revision()), (2, 1));
    }

    #[test]
    fn apply_dispatches_events() {
        let mut f = field(Policy::DECIMAL);
        let reaction = f.apply(NumericEvent::TextChanged("4x2".to_string()));
        let Reaction::Text(update) = reaction else {
            panic!("expected a text reaction");
        };
        assert_eq!(update.text, "42");

        let reaction = f.apply(NumericEvent::NumberChanged(Some(d("7.5"))));
        assert_eq!(
            reaction,
            Reaction::Number(NumberUpdate {
                text: "7.5".to_string(),
                changed: true,
            })
        );
    }

    #[test]
    fn from_config_uses_policy_symbols_and_formatter() {
        let config = NumericConfig::from_toml_str(
            r#"
            allow_decimal = true
            locale = "fr-FR"

            [formatter]
            min_fraction_digits = 2
            max_fraction_digits = 2
            "#,
        )
        .unwrap();
        let mut f = Synchronizer::from_config(&config).unwrap();
        assert_eq!(f.on_number_set(Some(d("3"))).text, "3,00");
    }
}
