//! Field configuration, optionally loaded from TOML.
//!
//! ```toml
//! allow_decimal = true
//! allow_negative = true
//! locale = "de-DE"
//!
//! [formatter]
//! max_fraction_digits = 2
//! rounding = "half_even"
//! ```

use serde::Deserialize;

use crate::filter::Policy;
use crate::format::{FormatSpec, Rounding};
use crate::symbols::{LocaleSymbols, SymbolsError};

#[derive(Debug)]
pub enum ConfigError {
    Toml(toml::de::Error),
    Symbols(SymbolsError),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Toml(err) => write!(f, "invalid numeric field config: {err}"),
            ConfigError::Symbols(err) => write!(f, "invalid locale symbols: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Toml(err) => Some(err),
            ConfigError::Symbols(err) => Some(err),
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Toml(err)
    }
}

impl From<SymbolsError> for ConfigError {
    fn from(err: SymbolsError) -> Self {
        ConfigError::Symbols(err)
    }
}

/// A custom formatter replacing the precision-preserving one.
///
/// It always drives programmatic number updates. With `apply_to_parsing` it
/// also parses typed text; otherwise typed text keeps the precision-matching
/// parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatterOverride {
    pub spec: FormatSpec,
    pub apply_to_parsing: bool,
}

impl FormatterOverride {
    pub fn new(spec: FormatSpec) -> Self {
        Self {
            spec,
            apply_to_parsing: false,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FormatterConfig {
    min_fraction_digits: Option<u16>,
    max_fraction_digits: Option<u16>,
    min_integer_digits: Option<u16>,
    rounding: Option<Rounding>,
    apply_to_parsing: bool,
}

impl FormatterConfig {
    fn to_override(&self) -> FormatterOverride {
        let base = FormatSpec::default();
        FormatterOverride {
            spec: FormatSpec {
                min_fraction_digits: self.min_fraction_digits.unwrap_or(base.min_fraction_digits),
                max_fraction_digits: self.max_fraction_digits.unwrap_or(base.max_fraction_digits),
                min_integer_digits: self.min_integer_digits.unwrap_or(base.min_integer_digits),
                rounding: self.rounding.unwrap_or(base.rounding),
            },
            apply_to_parsing: self.apply_to_parsing,
        }
    }
}

/// Everything a numeric field is constructed from.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumericConfig {
    pub allow_decimal: bool,
    pub allow_negative: bool,
    /// Locale tag the symbols are resolved from, e.g. `fr-FR`.
    pub locale: Option<String>,
    /// Overrides the locale's decimal separator.
    pub decimal_separator: Option<char>,
    /// Overrides the locale's negative sign.
    pub negative_sign: Option<char>,
    formatter: Option<FormatterConfig>,
}

impl NumericConfig {
    pub fn new(policy: Policy) -> Self {
        Self {
            allow_decimal: policy.allow_decimal,
            allow_negative: policy.allow_negative,
            ..Self::default()
        }
    }

    /// Parse a TOML document.
    ///
    /// ```
    /// use numeric_core::NumericConfig;
    ///
    /// let config = NumericConfig::from_toml_str("allow_decimal = true\nlocale = \"de\"").unwrap();
    /// assert!(config.policy().allow_decimal);
    /// assert_eq!(config.symbols().unwrap().decimal_separator(), ',');
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        // Surface bad symbol combinations at load time.
        config.symbols()?;
        Ok(config)
    }

    pub fn policy(&self) -> Policy {
        Policy::new(self.allow_decimal, self.allow_negative)
    }

    /// Locale symbols with explicit overrides applied.
    pub fn symbols(&self) -> Result<LocaleSymbols, SymbolsError> {
        let base = self
            .locale
            .as_deref()
            .map(LocaleSymbols::for_locale)
            .unwrap_or_default();
        LocaleSymbols::new(
            self.decimal_separator.unwrap_or(base.decimal_separator()),
            self.negative_sign.unwrap_or(base.negative_sign()),
        )
    }

    pub fn formatter(&self) -> Option<FormatterOverride> {
        self.formatter.as_ref().map(FormatterConfig::to_override)
    }

    pub fn with_formatter(mut self, formatter: FormatterOverride) -> Self {
        let spec = formatter.spec;
        self.formatter = Some(FormatterConfig {
            min_fraction_digits: Some(spec.min_fraction_digits),
            max_fraction_digits: Some(spec.max_fraction_digits),
            min_integer_digits: Some(spec.min_integer_digits),
            rounding: Some(spec.rounding),
            apply_to_parsing: formatter.apply_to_parsing,
        });
        self
    }
}
