//! Property-based tests for daiji composition
//!
//! These tests check structural properties of composed text across the whole
//! supported range and across arbitrary custom glyph tables.
//!
//! ## Configuration
//!
//! Property test case counts can be configured via environment variables:
//!
//! - `PROPTEST_CASES`: Number of test cases per property (default: 64)
//! - `PROPTEST_MAX_SHRINK_ITERS`: Max shrinking iterations on failure (default: 1000)
//!
//! ```bash
//! PROPTEST_CASES=256 cargo test --test property_based_tests
//! ```

use daiji::{
    ComposeError, GLYPH_COUNT, GlyphSelection, GlyphTable, MAX_COMPOSABLE, Mode, compose,
    compose_with, split_groups,
};
use proptest::prelude::*;
use std::env;

/// Default number of test cases per property.
const DEFAULT_PROPTEST_CASES: u32 = 64;

/// Default max shrink iterations.
const DEFAULT_MAX_SHRINK_ITERS: u32 = 1000;

/// Creates a ProptestConfig that respects `PROPTEST_CASES` and
/// `PROPTEST_MAX_SHRINK_ITERS`, optionally capped at `max_cases`.
fn proptest_config(max_cases: Option<u32>) -> ProptestConfig {
    let env_cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_PROPTEST_CASES);

    let env_shrink_iters = env::var("PROPTEST_MAX_SHRINK_ITERS")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(DEFAULT_MAX_SHRINK_ITERS);

    let cases = match max_cases {
        Some(max) => env_cases.min(max),
        None => env_cases,
    };

    ProptestConfig {
        cases,
        max_shrink_iters: env_shrink_iters,
        max_shrink_time: 30000,
        ..ProptestConfig::default()
    }
}

fn arb_mode() -> impl Strategy<Value = Mode> {
    prop_oneof![
        Just(Mode::Standard),
        Just(Mode::FormalOld),
        Just(Mode::FormalOlder),
    ]
}

/// Fifteen distinct glyphs drawn from the CJK block, so every index is
/// recognisable in the output.
fn arb_custom_table() -> impl Strategy<Value = String> {
    prop::sample::subsequence((0x4E00_u32..0x4E00 + 200).collect::<Vec<_>>(), GLYPH_COUNT)
        .prop_shuffle()
        .prop_map(|codes| codes.into_iter().filter_map(char::from_u32).collect())
}

fn count(text: &str, glyph: char) -> usize {
    text.chars().filter(|&c| c == glyph).count()
}

/// Zero always renders as the single zero glyph, whatever the table.
#[test]
fn prop_zero_renders_zero_glyph() {
    proptest!(proptest_config(None), |(table in arb_custom_table())| {
        let text = compose_with(0_u8, Mode::Standard, &table).unwrap();
        prop_assert_eq!(text.chars().collect::<Vec<_>>(), vec![table.chars().next().unwrap()]);
    });
}

/// The zero glyph only ever appears for the number zero.
#[test]
fn prop_zero_glyph_never_appears_in_positive_numbers() {
    proptest!(proptest_config(None), |(n in 1..=MAX_COMPOSABLE, mode in arb_mode())| {
        let table = GlyphTable::builtin(mode);
        let text = compose(n, &GlyphSelection::Builtin(mode)).unwrap();
        prop_assert_eq!(count(&text, table.zero()), 0, "{} -> {}", n, text);
    });
}

/// Numbers below ten thousand never carry a group marker.
#[test]
fn prop_small_numbers_have_no_group_markers() {
    proptest!(proptest_config(None), |(n in 0_u64..10_000, mode in arb_mode())| {
        let table = GlyphTable::builtin(mode);
        let text = compose(n, &GlyphSelection::Builtin(mode)).unwrap();
        prop_assert_eq!(count(&text, table.as_chars()[13]), 0);
        prop_assert_eq!(count(&text, table.as_chars()[14]), 0);
    });
}

/// The ten-thousand marker appears exactly when the middle group is non-zero,
/// and the hundred-million marker exactly when the high group is non-zero.
#[test]
fn prop_group_markers_follow_nonzero_groups() {
    proptest!(proptest_config(None), |(n in 0..=MAX_COMPOSABLE, table in arb_custom_table())| {
        let glyphs: Vec<char> = table.chars().collect();
        let [high, mid, _low] = split_groups(n);
        let text = compose_with(n, Mode::Standard, &table).unwrap();

        prop_assert_eq!(count(&text, glyphs[13]), usize::from(mid != 0), "{} -> {}", n, text);
        prop_assert_eq!(count(&text, glyphs[14]), usize::from(high != 0), "{} -> {}", n, text);
    });
}

/// Each non-zero decimal digit contributes exactly one digit glyph, and a
/// digit of one is written explicitly before every unit.
#[test]
fn prop_digit_glyph_count_matches_nonzero_digits() {
    proptest!(proptest_config(None), |(n in 0..=MAX_COMPOSABLE, table in arb_custom_table())| {
        let glyphs: Vec<char> = table.chars().collect();
        let text = compose_with(n, Mode::Standard, &table).unwrap();
        let digit_glyphs = text.chars().filter(|c| glyphs[1..10].contains(c)).count();
        let nonzero_digits = n.to_string().chars().filter(|&c| c != '0').count();
        prop_assert_eq!(digit_glyphs, nonzero_digits, "{} -> {}", n, text);
    });
}

/// Composition depends only on the number and the table.
#[test]
fn prop_composition_is_deterministic() {
    proptest!(proptest_config(None), |(n in 0..=MAX_COMPOSABLE, mode in arb_mode())| {
        let selection = GlyphSelection::Builtin(mode);
        prop_assert_eq!(compose(n, &selection).unwrap(), compose(n, &selection).unwrap());
    });
}

/// A custom table equal to a built-in one produces the built-in output.
#[test]
fn prop_custom_copy_of_builtin_matches_builtin() {
    proptest!(proptest_config(None), |(n in 0..=MAX_COMPOSABLE, mode in arb_mode())| {
        let as_text = GlyphTable::builtin(mode).to_string();
        prop_assert_eq!(
            compose_with(n, Mode::Standard, &as_text).unwrap(),
            compose_with(n, mode, "").unwrap()
        );
    });
}

/// Everything past the upper bound is a range violation.
#[test]
fn prop_above_bound_is_range_violation() {
    proptest!(proptest_config(None), |(n in (MAX_COMPOSABLE + 1)..=u64::MAX)| {
        let result = compose(n, &GlyphSelection::default());
        prop_assert!(matches!(result, Err(ComposeError::RangeViolation { .. })), "{:?}", result);
    });
}

/// Negative integers are range violations.
#[test]
fn prop_negative_is_range_violation() {
    proptest!(proptest_config(None), |(n in i64::MIN..0)| {
        let result = compose(n, &GlyphSelection::default());
        prop_assert!(matches!(result, Err(ComposeError::RangeViolation { .. })), "{:?}", result);
    });
}

/// Floats are rejected by type even when they hold an integral value.
#[test]
fn prop_floats_are_type_mismatch() {
    proptest!(proptest_config(None), |(n in 0_u32..10_000)| {
        let result = compose(f64::from(n), &GlyphSelection::default());
        prop_assert!(matches!(result, Err(ComposeError::TypeMismatch { .. })), "{:?}", result);
    });
}

/// Tables of the wrong length are rejected for any in-range number.
#[test]
fn prop_wrong_length_table_is_length_violation() {
    proptest!(proptest_config(None), |(
        n in 0..=MAX_COMPOSABLE,
        len in (1_usize..40).prop_filter("not fifteen", |len| *len != GLYPH_COUNT)
    )| {
        let table: String = "零".repeat(len);
        let result = compose_with(n, Mode::Standard, &table);
        let is_length_violation = matches!(
            result,
            Err(ComposeError::LengthViolation { expected: GLYPH_COUNT, actual }) if actual == len
        );
        prop_assert!(is_length_violation, "{:?}", result);
    });
}

/// Splitting into groups and recombining restores the number.
#[test]
fn prop_split_groups_recombines() {
    proptest!(proptest_config(None), |(n in 0..=MAX_COMPOSABLE)| {
        let [high, mid, low] = split_groups(n);
        prop_assert!(high < 10_000 && mid < 10_000 && low < 10_000);
        let recombined =
            u64::from(high) * 100_000_000 + u64::from(mid) * 10_000 + u64::from(low);
        prop_assert_eq!(recombined, n);
    });
}
