//! Glyph tables and their selection.
//!
//! A glyph table is an ordered list of exactly [`GLYPH_COUNT`] characters:
//!
//! | Index | Role |
//! |-------|------|
//! | 0 | zero |
//! | 1-9 | digits one to nine |
//! | 10 | tens marker |
//! | 11 | hundreds marker |
//! | 12 | thousands marker |
//! | 13 | ten-thousand group marker |
//! | 14 | hundred-million group marker |
//!
//! Uniqueness is not enforced; the built-in tables happen to be all distinct.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, IntoEnumIterator};

use daiji_utils::error::{ComposeError, ConfigError};

/// Number of glyphs in every table.
pub const GLYPH_COUNT: usize = 15;

/// Built-in glyph table selector.
///
/// Serializes as the plain integer used on the command line and in
/// `.daiji/config.toml` (`1`, `2` or `3`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Mode {
    /// 零壱弐参四五六七八九拾百千万億 - what receipts normally use
    #[default]
    Standard = 1,
    /// 零壹貳參四五六七八九拾百千万億
    FormalOld = 2,
    /// 零壹貳參肆伍陸漆捌玖拾佰仟萬億
    FormalOlder = 3,
}

impl Mode {
    /// The mode number (1, 2 or 3).
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Look up a mode by its number.
    #[must_use]
    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Standard),
            2 => Some(Self::FormalOld),
            3 => Some(Self::FormalOlder),
            _ => None,
        }
    }

    /// Human-readable name, used in help output and logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::FormalOld => "formal-old",
            Self::FormalOlder => "formal-older",
        }
    }

    /// All built-in modes in ascending order.
    pub fn all() -> impl Iterator<Item = Mode> {
        Mode::iter()
    }

    /// The built-in glyph table for this mode.
    #[must_use]
    pub fn table(self) -> &'static GlyphTable {
        GlyphTable::builtin(self)
    }
}

impl TryFrom<u8> for Mode {
    type Error = ConfigError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::from_number(number).ok_or_else(|| ConfigError::InvalidValue {
            key: "mode".to_string(),
            value: format!("{number} (expected 1, 2 or 3)"),
        })
    }
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> Self {
        mode.number()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Positional and group unit markers, indices 10 to 14 of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum Unit {
    Ten,
    Hundred,
    Thousand,
    TenThousand,
    HundredMillion,
}

impl Unit {
    /// Index of this marker in a glyph table.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Ten => 10,
            Self::Hundred => 11,
            Self::Thousand => 12,
            Self::TenThousand => 13,
            Self::HundredMillion => 14,
        }
    }
}

/// An ordered table of exactly 15 glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GlyphTable {
    glyphs: [char; GLYPH_COUNT],
}

static BUILTIN_TABLES: [GlyphTable; 3] = [
    GlyphTable::from_chars([
        '零', '壱', '弐', '参', '四', '五', '六', '七', '八', '九', '拾', '百', '千', '万', '億',
    ]),
    GlyphTable::from_chars([
        '零', '壹', '貳', '參', '四', '五', '六', '七', '八', '九', '拾', '百', '千', '万', '億',
    ]),
    GlyphTable::from_chars([
        '零', '壹', '貳', '參', '肆', '伍', '陸', '漆', '捌', '玖', '拾', '佰', '仟', '萬', '億',
    ]),
];

impl GlyphTable {
    /// Build a table from a fixed-size array; cannot fail.
    #[must_use]
    pub const fn from_chars(glyphs: [char; GLYPH_COUNT]) -> Self {
        Self { glyphs }
    }

    /// The process-wide constant table for a built-in mode.
    #[must_use]
    pub fn builtin(mode: Mode) -> &'static GlyphTable {
        &BUILTIN_TABLES[usize::from(mode.number()) - 1]
    }

    /// Parse a custom table from text.
    ///
    /// Length is counted in Unicode scalar values, not bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ComposeError::LengthViolation`] unless the text holds exactly
    /// [`GLYPH_COUNT`] characters. This includes the empty string; callers that
    /// treat empty as "not supplied" should go through [`GlyphSelection::resolve`].
    pub fn parse(text: &str) -> Result<Self, ComposeError> {
        let chars: Vec<char> = text.chars().collect();
        let glyphs: [char; GLYPH_COUNT] =
            chars
                .try_into()
                .map_err(|rejected: Vec<char>| ComposeError::LengthViolation {
                    expected: GLYPH_COUNT,
                    actual: rejected.len(),
                })?;
        Ok(Self { glyphs })
    }

    /// Glyph for zero (index 0).
    #[must_use]
    pub const fn zero(&self) -> char {
        self.glyphs[0]
    }

    /// Glyph for a decimal digit.
    ///
    /// # Panics
    ///
    /// Panics if `digit > 9`.
    #[must_use]
    pub const fn digit(&self, digit: u8) -> char {
        assert!(digit <= 9, "digit out of range");
        self.glyphs[digit as usize]
    }

    /// Glyph for a unit marker.
    #[must_use]
    pub const fn unit(&self, unit: Unit) -> char {
        self.glyphs[unit.index()]
    }

    #[must_use]
    pub const fn as_chars(&self) -> &[char; GLYPH_COUNT] {
        &self.glyphs
    }
}

impl FromStr for GlyphTable {
    type Err = ComposeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for GlyphTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyphs.iter().try_for_each(|glyph| write!(f, "{glyph}"))
    }
}

/// Which table a composition uses: a built-in mode or a custom override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlyphSelection {
    Builtin(Mode),
    Custom(GlyphTable),
}

impl Default for GlyphSelection {
    fn default() -> Self {
        Self::Builtin(Mode::default())
    }
}

impl GlyphSelection {
    /// Resolve a mode plus an optional custom table string.
    ///
    /// An empty `custom` means "not supplied" and selects the built-in table for
    /// `mode`. A non-empty `custom` overrides `mode` entirely.
    ///
    /// # Errors
    ///
    /// [`ComposeError::LengthViolation`] when `custom` is non-empty and does not
    /// hold exactly 15 glyphs.
    pub fn resolve(mode: Mode, custom: &str) -> Result<Self, ComposeError> {
        if custom.is_empty() {
            Ok(Self::Builtin(mode))
        } else {
            GlyphTable::parse(custom).map(Self::Custom)
        }
    }

    /// The table compositions will read from.
    #[must_use]
    pub fn table(&self) -> &GlyphTable {
        match self {
            Self::Builtin(mode) => GlyphTable::builtin(*mode),
            Self::Custom(table) => table,
        }
    }

    /// The built-in mode, if no custom table is in effect.
    #[must_use]
    pub const fn mode(&self) -> Option<Mode> {
        match self {
            Self::Builtin(mode) => Some(*mode),
            Self::Custom(_) => None,
        }
    }

    /// `"1"`, `"2"`, `"3"` or `"custom"`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Builtin(Mode::Standard) => "1",
            Self::Builtin(Mode::FormalOld) => "2",
            Self::Builtin(Mode::FormalOlder) => "3",
            Self::Custom(_) => "custom",
        }
    }
}

impl From<Mode> for GlyphSelection {
    fn from(mode: Mode) -> Self {
        Self::Builtin(mode)
    }
}

impl From<GlyphTable> for GlyphSelection {
    fn from(table: GlyphTable) -> Self {
        Self::Custom(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KANSUJI: &str = "零一二三四五六七八九十百千万億";

    #[test]
    fn test_builtin_tables_match_published_glyphs() {
        assert_eq!(
            GlyphTable::builtin(Mode::Standard).to_string(),
            "零壱弐参四五六七八九拾百千万億"
        );
        assert_eq!(
            GlyphTable::builtin(Mode::FormalOld).to_string(),
            "零壹貳參四五六七八九拾百千万億"
        );
        assert_eq!(
            GlyphTable::builtin(Mode::FormalOlder).to_string(),
            "零壹貳參肆伍陸漆捌玖拾佰仟萬億"
        );
    }

    #[test]
    fn test_builtin_tables_are_distinct_internally() {
        for mode in Mode::all() {
            let glyphs = mode.table().as_chars();
            for (i, a) in glyphs.iter().enumerate() {
                for b in &glyphs[i + 1..] {
                    assert_ne!(a, b, "mode {mode} repeats {a}");
                }
            }
        }
    }

    #[test]
    fn test_mode_numbers_round_trip() {
        let numbers: Vec<u8> = Mode::all().map(Mode::number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        for n in 1..=3 {
            assert_eq!(Mode::try_from(n).unwrap().number(), n);
        }
        assert_eq!(Mode::default(), Mode::Standard);
    }

    #[test]
    fn test_mode_rejects_out_of_range_numbers() {
        for n in [0_u8, 4, 255] {
            let err = Mode::try_from(n).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "mode"));
        }
    }

    #[test]
    fn test_mode_serde_uses_integers() {
        assert_eq!(serde_json::to_string(&Mode::FormalOlder).unwrap(), "3");
        assert_eq!(serde_json::from_str::<Mode>("2").unwrap(), Mode::FormalOld);
        assert!(serde_json::from_str::<Mode>("4").is_err());
    }

    #[test]
    fn test_parse_counts_chars_not_bytes() {
        // 15 chars, 45 bytes
        let table = GlyphTable::parse(KANSUJI).unwrap();
        assert_eq!(table.zero(), '零');
        assert_eq!(table.digit(9), '九');
        assert_eq!(table.unit(Unit::Ten), '十');
        assert_eq!(table.unit(Unit::HundredMillion), '億');
    }

    #[test]
    fn test_parse_rejects_wrong_lengths() {
        let short: String = KANSUJI.chars().take(14).collect();
        let long = format!("{KANSUJI}兆");

        assert_eq!(
            GlyphTable::parse(&short).unwrap_err(),
            ComposeError::LengthViolation {
                expected: 15,
                actual: 14
            }
        );
        assert_eq!(
            long.parse::<GlyphTable>().unwrap_err(),
            ComposeError::LengthViolation {
                expected: 15,
                actual: 16
            }
        );
        assert!(GlyphTable::parse("").is_err());
    }

    #[test]
    fn test_parse_accepts_repeated_glyphs() {
        let table = GlyphTable::parse("000000000000000").unwrap();
        assert_eq!(table.to_string(), "000000000000000");
    }

    #[test]
    fn test_unit_indices() {
        let indices: Vec<usize> = Unit::iter().map(Unit::index).collect();
        assert_eq!(indices, vec![10, 11, 12, 13, 14]);
    }

    #[test]
    fn test_resolve_empty_custom_uses_mode() {
        let selection = GlyphSelection::resolve(Mode::FormalOld, "").unwrap();
        assert_eq!(selection, GlyphSelection::Builtin(Mode::FormalOld));
        assert_eq!(selection.label(), "2");
        assert_eq!(selection.mode(), Some(Mode::FormalOld));
    }

    #[test]
    fn test_resolve_custom_overrides_mode() {
        let selection = GlyphSelection::resolve(Mode::FormalOlder, KANSUJI).unwrap();
        assert_eq!(selection.table().to_string(), KANSUJI);
        assert_eq!(selection.label(), "custom");
        assert_eq!(selection.mode(), None);
    }

    #[test]
    fn test_resolve_rejects_bad_custom_length() {
        let err = GlyphSelection::resolve(Mode::Standard, "零一二").unwrap_err();
        assert!(matches!(err, ComposeError::LengthViolation { actual: 3, .. }));
    }
}
