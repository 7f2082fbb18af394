//! Daiji composition.
//!
//! A number is split into three base-10,000 groups (high, mid, low). Each
//! non-zero group is rendered digit by digit with positional markers, and the
//! mid and high groups are followed by the ten-thousand and hundred-million
//! markers respectively. Zero digits and zero groups are silent: 2005 becomes
//! 弐千五 and 100,000,001 becomes 壱億壱.

use tracing::debug;

use daiji_utils::error::ComposeError;

use crate::glyph::{GlyphSelection, GlyphTable, Mode, Unit};
use crate::numeral::Numeral;

/// Largest composable value. Anything above would need a trillion marker.
pub const MAX_COMPOSABLE: u64 = 999_999_999_999;

const GROUP_BASE: u64 = 10_000;

/// Digit positions of a group, most significant first.
const POSITIONS: [(u16, Option<Unit>); 4] = [
    (1000, Some(Unit::Thousand)),
    (100, Some(Unit::Hundred)),
    (10, Some(Unit::Ten)),
    (1, None),
];

/// Compose `number` using the given glyph selection.
///
/// # Errors
///
/// - [`ComposeError::TypeMismatch`] if `number` is not integral
/// - [`ComposeError::RangeViolation`] if `number` is outside `0..=MAX_COMPOSABLE`
///
/// # Example
///
/// ```rust
/// use daiji_composer::{compose, GlyphSelection, Mode};
///
/// let formal = GlyphSelection::Builtin(Mode::FormalOlder);
/// assert_eq!(compose(123_456_789_u64, &formal).unwrap(), "壹億貳仟參佰肆拾伍萬陸仟漆佰捌拾玖");
/// assert!(compose(3.0_f64, &formal).is_err());
/// ```
pub fn compose(
    number: impl Into<Numeral>,
    selection: &GlyphSelection,
) -> Result<String, ComposeError> {
    let number = number.into().to_composable()?;
    Ok(compose_checked(number, selection.table()))
}

/// Compose from a mode number and an optional custom table string.
///
/// This is the three-argument form the CLI uses: an empty `custom` selects the
/// built-in table for `mode`, anything else must be exactly 15 glyphs.
/// Checks run in order: type, range, table length.
///
/// # Errors
///
/// [`ComposeError::TypeMismatch`], [`ComposeError::RangeViolation`] or
/// [`ComposeError::LengthViolation`].
///
/// # Example
///
/// ```rust
/// use daiji_composer::{compose_with, Mode};
///
/// let text = compose_with(123_456_u32, Mode::Standard, "零一二三四五六七八九十百千万億").unwrap();
/// assert_eq!(text, "一十二万三千四百五十六");
/// ```
pub fn compose_with(
    number: impl Into<Numeral>,
    mode: Mode,
    custom: &str,
) -> Result<String, ComposeError> {
    let number = number.into().to_composable()?;
    let selection = GlyphSelection::resolve(mode, custom)?;
    Ok(compose_checked(number, selection.table()))
}

/// Split a number into its (high, mid, low) base-10,000 groups.
///
/// `high` only holds the 10^8 to 10^11 digits; anything above
/// [`MAX_COMPOSABLE`] is truncated, so callers should validate first.
#[must_use]
pub fn split_groups(number: u64) -> [u16; 3] {
    // Each value is reduced mod 10,000 and fits in u16.
    let group = |n: u64| (n % GROUP_BASE) as u16;
    [
        group(number / (GROUP_BASE * GROUP_BASE)),
        group(number / GROUP_BASE),
        group(number),
    ]
}

/// Compose an already validated number.
fn compose_checked(number: u64, table: &GlyphTable) -> String {
    if number == 0 {
        return table.zero().to_string();
    }

    let [high, mid, low] = split_groups(number);
    let mut text = String::new();
    for (group, marker) in [
        (high, Some(Unit::HundredMillion)),
        (mid, Some(Unit::TenThousand)),
        (low, None),
    ] {
        if group == 0 {
            continue;
        }
        text.push_str(&compose_group(group, table));
        if let Some(marker) = marker {
            text.push(table.unit(marker));
        }
    }
    text
}

/// Render one group in `1..=9999`; zero digits contribute nothing.
pub(crate) fn compose_group(group: u16, table: &GlyphTable) -> String {
    debug_assert!((1..=9999).contains(&group));

    let mut text = String::new();
    for (scale, unit) in POSITIONS {
        let digit = (group / scale) % 10;
        if digit == 0 {
            continue;
        }
        // digit < 10 so the narrowing is lossless
        text.push(table.digit(digit as u8));
        if let Some(unit) = unit {
            text.push(table.unit(unit));
        }
    }
    text
}

/// A reusable composer bound to one glyph selection.
///
/// Holds no mutable state; share it freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Composer {
    selection: GlyphSelection,
}

impl Composer {
    #[must_use]
    pub const fn new(selection: GlyphSelection) -> Self {
        Self { selection }
    }

    #[must_use]
    pub const fn from_mode(mode: Mode) -> Self {
        Self::new(GlyphSelection::Builtin(mode))
    }

    #[must_use]
    pub const fn selection(&self) -> &GlyphSelection {
        &self.selection
    }

    /// Compose `number` with this composer's table.
    ///
    /// # Errors
    ///
    /// See [`compose`].
    pub fn compose(&self, number: impl Into<Numeral>) -> Result<String, ComposeError> {
        let number = number.into().to_composable()?;
        let [high, mid, low] = split_groups(number);
        debug!(
            number,
            high,
            mid,
            low,
            selection = self.selection.label(),
            "Split number into groups"
        );
        Ok(compose_checked(number, self.selection.table()))
    }
}
