//! daiji-composer - numeral composition for formal Japanese daiji
//!
//! Turns a whole number in `0..=999_999_999_999` into daiji text using one of
//! three built-in glyph tables or a caller-supplied 15-glyph table.
//!
//! ```rust
//! use daiji_composer::{compose, GlyphSelection, Mode};
//!
//! let text = compose(123_456_789_u64, &GlyphSelection::Builtin(Mode::Standard)).unwrap();
//! assert_eq!(text, "壱億弐千参百四拾五万六千七百八拾九");
//! ```

pub mod compose;
pub mod glyph;
pub mod numeral;

pub use compose::{Composer, MAX_COMPOSABLE, compose, compose_with, split_groups};
pub use daiji_utils::error::ComposeError;
pub use glyph::{GLYPH_COUNT, GlyphSelection, GlyphTable, Mode, Unit};
pub use numeral::Numeral;
