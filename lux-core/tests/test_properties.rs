use lux_core::{
    expected_duration_ms, is_mapped, lookup, total_duration_ms, CombConfig, FrequencyComb, Mark,
    SequenceBuilder, SymbolKind, DASH_MS, DOT_MS, FALLBACK_PATTERN, WORD_GAP_MS,
};
use proptest::prelude::*;

fn layout_strategy() -> impl Strategy<Value = (Vec<char>, Vec<f64>, Vec<f64>)> {
    "[A-Z0-9 .,!?()a-z/]{0,40}".prop_flat_map(|text| {
        let chars: Vec<char> = text.chars().collect();
        let n = chars.len();
        (
            Just(chars),
            prop::collection::vec(400.0..700.0f64, n),
            prop::collection::vec(400.0..700.0f64, n),
        )
    })
}

fn mark_strategy() -> impl Strategy<Value = Mark> {
    prop_oneof![Just(Mark::Dot), Just(Mark::Dash)]
}

#[test]
fn timing_ratios() {
    assert_eq!(DASH_MS, 3 * DOT_MS);
    assert_eq!(WORD_GAP_MS, 7 * DOT_MS);
}

proptest! {
    #[test]
    fn duration_depends_only_on_text((chars, a, b) in layout_strategy()) {
        let builder = SequenceBuilder::new();
        let first = builder.build(&chars, &a).unwrap();
        let second = builder.build(&chars, &b).unwrap();
        prop_assert_eq!(total_duration_ms(&first), expected_duration_ms(&chars));
        prop_assert_eq!(total_duration_ms(&second), expected_duration_ms(&chars));
    }

    #[test]
    fn encoding_is_idempotent((chars, wavelengths, _) in layout_strategy()) {
        let builder = SequenceBuilder::with_comb(FrequencyComb::default());
        let first = builder.build(&chars, &wavelengths).unwrap();
        let second = builder.build(&chars, &wavelengths).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn gap_invariants_hold((chars, wavelengths, _) in layout_strategy()) {
        let pulses = SequenceBuilder::with_comb(FrequencyComb::default())
            .build(&chars, &wavelengths)
            .unwrap();
        for p in &pulses {
            prop_assert_eq!(p.wavelength_nm == 0.0, p.symbol_kind == SymbolKind::Gap);
            prop_assert_eq!(
                p.is_gap,
                matches!(p.symbol_kind, SymbolKind::Space | SymbolKind::Gap)
            );
            prop_assert_eq!(p.comb.is_some(), !p.is_gap);
            prop_assert!(p.duration_ms > 0);
        }
    }

    #[test]
    fn unmapped_characters_use_fallback(c in any::<char>()) {
        if !is_mapped(c) {
            prop_assert_eq!(lookup(c).pattern(), FALLBACK_PATTERN);
        }
    }

    #[test]
    fn comb_indices_and_symmetry(
        half in 0usize..30,
        center in 380.0..780.0f64,
        nonlinearity in 0.0..3.0f64,
        mark in mark_strategy(),
    ) {
        let size = 2 * half + 1;
        let config = CombConfig { size, nonlinearity, ..CombConfig::default() };
        let comb = FrequencyComb::new(config).unwrap();
        let spectrum = comb.expand(center, mark).unwrap();

        let indices: Vec<i32> = spectrum.lines.iter().map(|l| l.comb_index).collect();
        let h = half as i32;
        prop_assert_eq!(indices, (-h..=h).collect::<Vec<_>>());

        for j in 0..size {
            let mirror = &spectrum.lines[size - 1 - j];
            prop_assert_eq!(spectrum.lines[j].intensity, mirror.intensity);
        }

        let total: f64 = spectrum.lines.iter().map(|l| l.intensity).sum();
        prop_assert!((spectrum.efficiency - total / size as f64).abs() < 1e-12);
    }
}
