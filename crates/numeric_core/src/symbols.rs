//! Locale-dependent symbols used by the filter and the formatter.
//!
//! Symbols are plain values resolved once by the host and passed into every
//! operation. Nothing in this crate reads the process locale.

/// Decimal separator used when a locale does not define one.
pub const DEFAULT_DECIMAL_SEPARATOR: char = '.';

/// Negative sign used when a locale does not define one.
pub const DEFAULT_NEGATIVE_SIGN: char = '-';

const MINUS_SIGN: char = '\u{2212}';

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SymbolsError {
    /// The decimal separator and the negative sign are the same character.
    Ambiguous { symbol: char },
    /// A symbol is itself a decimal digit and would be swallowed by the filter.
    DigitSymbol { symbol: char },
}

impl std::fmt::Display for SymbolsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolsError::Ambiguous { symbol } => write!(
                f,
                "decimal separator and negative sign are both {symbol:?}"
            ),
            SymbolsError::DigitSymbol { symbol } => {
                write!(f, "symbol {symbol:?} is a digit")
            }
        }
    }
}

impl std::error::Error for SymbolsError {}

/// The decimal separator and negative sign of the active locale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocaleSymbols {
    decimal_separator: char,
    negative_sign: char,
}

impl Default for LocaleSymbols {
    fn default() -> Self {
        Self {
            decimal_separator: DEFAULT_DECIMAL_SEPARATOR,
            negative_sign: DEFAULT_NEGATIVE_SIGN,
        }
    }
}

impl LocaleSymbols {
    /// Create a symbol pair, rejecting combinations the filter cannot tell apart.
    ///
    /// ```
    /// use numeric_core::LocaleSymbols;
    ///
    /// assert!(LocaleSymbols::new(',', '-').is_ok());
    /// assert!(LocaleSymbols::new('-', '-').is_err());
    /// assert!(LocaleSymbols::new('7', '-').is_err());
    /// ```
    pub fn new(decimal_separator: char, negative_sign: char) -> Result<Self, SymbolsError> {
        if decimal_separator == negative_sign {
            return Err(SymbolsError::Ambiguous {
                symbol: decimal_separator,
            });
        }
        for symbol in [decimal_separator, negative_sign] {
            if symbol.is_numeric() {
                return Err(SymbolsError::DigitSymbol { symbol });
            }
        }
        Ok(Self {
            decimal_separator,
            negative_sign,
        })
    }

    pub fn decimal_separator(&self) -> char {
        self.decimal_separator
    }

    pub fn negative_sign(&self) -> char {
        self.negative_sign
    }

    /// Fill in missing locale symbols with the defaults.
    ///
    /// A locale that defines no decimal separator still gets `.`, so the
    /// filter and the formatter always have a concrete character to match.
    pub fn resolve(
        decimal_separator: Option<char>,
        negative_sign: Option<char>,
    ) -> Result<Self, SymbolsError> {
        Self::new(
            decimal_separator.unwrap_or(DEFAULT_DECIMAL_SEPARATOR),
            negative_sign.unwrap_or(DEFAULT_NEGATIVE_SIGN),
        )
    }

    /// Resolve symbols from a locale tag such as `de-DE`, `pt_BR.UTF-8` or `sv`.
    ///
    /// Unknown or empty tags resolve to the defaults.
    ///
    /// ```
    /// use numeric_core::LocaleSymbols;
    ///
    /// assert_eq!(LocaleSymbols::for_locale("de-DE").decimal_separator(), ',');
    /// assert_eq!(LocaleSymbols::for_locale("de-CH").decimal_separator(), '.');
    /// assert_eq!(LocaleSymbols::for_locale("en_US.UTF-8").decimal_separator(), '.');
    /// assert_eq!(LocaleSymbols::for_locale("sv").negative_sign(), '\u{2212}');
    /// ```
    pub fn for_locale(tag: &str) -> Self {
        let (language, region) = split_tag(tag);
        let symbols = Self {
            decimal_separator: decimal_separator_for(&language, region.as_deref()),
            negative_sign: negative_sign_for(&language),
        };
        log::trace!(target: "numeric.symbols", "locale {tag:?} -> {symbols:?}");
        symbols
    }
}

/// Split `ll[-_]RR[.charset][@modifier]` into a lowercase language and an
/// uppercase region.
fn split_tag(tag: &str) -> (String, Option<String>) {
    let tag = tag
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();
    let mut parts = tag.split(['-', '_']).filter(|p| !p.is_empty());
    let language = parts.next().unwrap_or_default().to_ascii_lowercase();
    // Skip script subtags (`sr-Latn-RS`).
    let region = parts
        .find(|p| p.len() == 2 || (p.len() == 3 && p.bytes().all(|b| b.is_ascii_digit())))
        .map(str::to_ascii_uppercase);
    (language, region)
}

fn decimal_separator_for(language: &str, region: Option<&str>) -> char {
    match (language, region) {
        ("de" | "it" | "rm", Some("CH" | "LI")) => '.',
        ("es", Some("MX" | "US" | "419" | "PR" | "DO" | "GT" | "HN" | "NI" | "PA" | "SV")) => '.',
        ("en", Some("ZA")) => ',',
        ("af" | "az" | "be" | "bg" | "bs" | "ca" | "cs" | "da" | "de" | "el" | "es" | "et"
        | "eu" | "fi" | "fr" | "gl" | "hr" | "hu" | "hy" | "id" | "is" | "it" | "ka" | "kk"
        | "ky" | "lt" | "lv" | "mk" | "mn" | "nb" | "nl" | "nn" | "no" | "pl" | "pt" | "ro"
        | "ru" | "sk" | "sl" | "sq" | "sr" | "sv" | "tr" | "uk" | "uz" | "vi", _) => ',',
        _ => DEFAULT_DECIMAL_SEPARATOR,
    }
}

fn negative_sign_for(language: &str) -> char {
    match language {
        "et" | "fi" | "lt" | "nb" | "nn" | "no" | "sl" | "sv" => MINUS_SIGN,
        _ => DEFAULT_NEGATIVE_SIGN,
    }
}
