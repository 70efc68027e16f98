//! # numeric_core
//!
//! UI-agnostic engine behind numeric input fields.
//!
//! This crate keeps a user-editable text buffer and a decimal number in
//! step while a person types:
//! - [`filter_numeric`]: strips characters that cannot be part of a number
//! - [`FormatSpec`]: renders numbers without changing their precision
//! - [`Synchronizer`]: reacts to text edits and programmatic number updates
//!
//! ## Design Principles
//!
//! This crate does not depend on any UI toolkit. The host forwards two kinds
//! of events ([`Synchronizer::on_text_changed`], [`Synchronizer::on_number_set`])
//! and displays the text it gets back. Locale symbols are passed in as
//! [`LocaleSymbols`]; nothing here reads the process locale.
//!
//! ## Integration
//!
//! Hosts with two-way bindings must not feed the engine's own output back as
//! a new event. When they cannot avoid it, echoes are harmless: the current
//! number leaves the text alone, and the displayed text parses back to the
//! number it shows.
//!
//! ```
//! use numeric_core::{LocaleSymbols, Policy, Synchronizer};
//!
//! let mut field = Synchronizer::new(Policy::SIGNED_DECIMAL, LocaleSymbols::for_locale("de-DE"));
//!
//! let update = field.on_text_changed("-3,");
//! assert_eq!(update.text, "-3,");
//!
//! // Echoing the derived number back keeps the trailing separator.
//! field.on_number_set(update.number);
//! assert_eq!(field.text(), "-3,");
//! ```

mod classify;
mod config;
mod filter;
mod format;
mod parse;
mod symbols;
mod sync;
mod traits;

pub use classify::{AsciiDigits, DigitClassifier, UnicodeDigits};
pub use config::{ConfigError, FormatterOverride, NumericConfig};
pub use filter::{Policy, filter_numeric};
pub use format::{
    FormatSpec, NumericValue, Rounding, default_text, digits_after_separator, integer_text,
    numeric_value_from_f64,
};
pub use parse::{leading_numeral, parse_decimal, parse_integer};
pub use symbols::{DEFAULT_DECIMAL_SEPARATOR, DEFAULT_NEGATIVE_SIGN, LocaleSymbols, SymbolsError};
pub use sync::{NumberUpdate, NumericEvent, Reaction, Synchronizer, TextUpdate};
pub use traits::NumericField;

// Hosts need the number type without adding the dependency themselves.
pub use fixed_decimal::Decimal;
