#![no_main]

use libfuzzer_sys::fuzz_target;
use numeric_core::{LocaleSymbols, Policy, Synchronizer, UnicodeDigits, parse_decimal};

fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let Ok(input) = std::str::from_utf8(rest) else {
        return;
    };
    let policy = Policy::new(true, flags & 1 != 0);
    let symbols = LocaleSymbols::default();
    let mut field = Synchronizer::new(policy, symbols);

    // Each line is one keystroke state; echoes must never change the text.
    for line in input.lines() {
        let update = field.on_text_changed(line);
        let echo = field.on_number_set(update.number.clone());
        assert!(!echo.changed);
        assert_eq!(field.text(), update.text);

        if let Some(number) = update.number {
            let mut fresh = Synchronizer::new(policy, symbols);
            let text = fresh.on_number_set(Some(number.clone())).text;
            let reparsed = parse_decimal(&text, symbols, &UnicodeDigits);
            assert!(reparsed.is_some(), "{text:?} does not parse");
        }
    }
});
