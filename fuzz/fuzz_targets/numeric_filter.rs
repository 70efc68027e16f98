#![no_main]

use libfuzzer_sys::fuzz_target;
use numeric_core::{DigitClassifier, LocaleSymbols, Policy, UnicodeDigits, filter_numeric};

fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let Ok(raw) = std::str::from_utf8(rest) else {
        return;
    };
    let policy = Policy::new(flags & 1 != 0, flags & 2 != 0);
    let symbols = if flags & 4 != 0 {
        LocaleSymbols::for_locale("sv-SE")
    } else {
        LocaleSymbols::default()
    };

    let out = filter_numeric(raw, policy, symbols, &UnicodeDigits);

    assert!(out.len() <= raw.len());
    let mut hay = raw.chars();
    assert!(out.chars().all(|c| hay.any(|h| h == c)), "not a subsequence");

    let separators = out.chars().filter(|&c| c == symbols.decimal_separator()).count();
    let signs = out.chars().filter(|&c| c == symbols.negative_sign()).count();
    assert!(separators <= usize::from(policy.allow_decimal));
    assert!(signs <= usize::from(policy.allow_negative));

    let digits_in = raw.chars().filter(|&c| UnicodeDigits.is_digit(c)).count();
    let digits_out = out.chars().filter(|&c| UnicodeDigits.is_digit(c)).count();
    assert_eq!(digits_in, digits_out);

    assert_eq!(filter_numeric(&out, policy, symbols, &UnicodeDigits), out);
});
