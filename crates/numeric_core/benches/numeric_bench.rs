use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use numeric_core::{LocaleSymbols, Policy, Synchronizer, UnicodeDigits, filter_numeric};

const SHORT_INPUT: &str = "-12a.3b4.5";
const LONG_REPEATS: usize = 10_000;

fn make_noisy(repeats: usize) -> String {
    let mut s = String::with_capacity(repeats * 12);
    for _ in 0..repeats {
        s.push_str("1x2.3-\u{0967}é ");
    }
    s
}

fn bench_filter_short(c: &mut Criterion) {
    let symbols = LocaleSymbols::default();
    c.bench_function("bench_filter_short", |b| {
        b.iter(|| {
            let out = filter_numeric(
                black_box(SHORT_INPUT),
                Policy::SIGNED_DECIMAL,
                symbols,
                &UnicodeDigits,
            );
            black_box(out.len());
        });
    });
}

fn bench_filter_clean_fast_path(c: &mut Criterion) {
    let input = "1234567890".repeat(LONG_REPEATS / 10);
    let symbols = LocaleSymbols::default();
    c.bench_function("bench_filter_clean_fast_path", |b| {
        b.iter(|| {
            let out = filter_numeric(black_box(&input), Policy::INTEGER, symbols, &UnicodeDigits);
            black_box(out.len());
        });
    });
}

fn bench_filter_long_noisy(c: &mut Criterion) {
    let input = make_noisy(LONG_REPEATS);
    let symbols = LocaleSymbols::default();
    c.bench_function("bench_filter_long_noisy", |b| {
        b.iter(|| {
            let out = filter_numeric(
                black_box(&input),
                Policy::SIGNED_DECIMAL,
                symbols,
                &UnicodeDigits,
            );
            black_box(out.len());
        });
    });
}

fn bench_typing_session(c: &mut Criterion) {
    let keystrokes: Vec<String> = {
        let mut typed = String::new();
        "-1234.5678".chars().map(|ch| {
            typed.push(ch);
            typed.clone()
        })
        .collect()
    };
    c.bench_function("bench_typing_session", |b| {
        b.iter_batched(
            || Synchronizer::new(Policy::SIGNED_DECIMAL, LocaleSymbols::default()),
            |mut field| {
                for text in &keystrokes {
                    let update = field.on_text_changed(text);
                    black_box(field.on_number_set(update.number));
                }
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_filter_short,
    bench_filter_clean_fast_path,
    bench_filter_long_noisy,
    bench_typing_session
);
criterion_main!(benches);
