//! Grid layout of the 26 letter glyphs.
//!
//! ```text
//!   row 0:  A  B  C  D  E  F  G  H  I  J  K  L  M     y =  0.0
//!   row 1:  N  O  P  Q  R  S  T  U  V  W  X  Y  Z     y = -3.0
//!           x = col * 1.5
//! ```

use glam::Vec3;

use crate::error::AlphaFreqError;
use crate::frequency::{FrequencyTable, LETTER_COUNT};

/// The plotted alphabet, in grid order.
pub const ALPHABET: [char; LETTER_COUNT] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Glyphs per grid row.
pub const GRID_COLUMNS: usize = 13;
/// Horizontal distance between glyph origins.
pub const COLUMN_SPACING: f32 = 1.5;
/// Vertical distance between grid rows.
pub const ROW_SPACING: f32 = 3.0;
/// Extrusion scale of the most frequent letter.
pub const MAX_EXTRUSION: f32 = 2.5;

/// Render state for one letter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterGlyph {
    /// Lowercase source letter.
    pub letter: char,
    /// Occurrences in the input.
    pub count: u64,
    /// Extrusion scale factor in `[0, MAX_EXTRUSION]`.
    pub scale: f32,
    /// Glyph origin in world space.
    pub position: Vec3,
    /// False when the letter never occurs.
    pub visible: bool,
}

impl LetterGlyph {
    /// Uppercase form used for the rendered text.
    pub fn display_char(&self) -> char {
        self.letter.to_ascii_uppercase()
    }
}

/// All 26 glyphs, indexed by alphabet position.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphLayout {
    glyphs: [LetterGlyph; LETTER_COUNT],
    max_count: u64,
}

impl GlyphLayout {
    /// Lay out the alphabet from a frequency table.
    ///
    /// Fails with [`AlphaFreqError::NoLetters`] when no letter occurs, since
    /// every scale would otherwise divide by zero.
    pub fn from_table(table: &FrequencyTable) -> Result<Self, AlphaFreqError> {
        let max_count = table.max_letter_count();
        if max_count == 0 {
            return Err(AlphaFreqError::NoLetters);
        }

        let glyphs = std::array::from_fn(|i| {
            let letter = ALPHABET[i];
            let count = table.count(letter);
            LetterGlyph {
                letter,
                count,
                scale: count as f32 / max_count as f32 * MAX_EXTRUSION,
                position: grid_position(i),
                visible: count > 0,
            }
        });

        Ok(Self { glyphs, max_count })
    }

    /// Glyphs in alphabet order.
    pub fn glyphs(&self) -> &[LetterGlyph; LETTER_COUNT] {
        &self.glyphs
    }

    /// Glyph for a lowercase letter.
    pub fn get(&self, letter: char) -> Option<&LetterGlyph> {
        ALPHABET
            .iter()
            .position(|&c| c == letter)
            .map(|i| &self.glyphs[i])
    }

    /// Count of the most frequent letter.
    pub fn max_count(&self) -> u64 {
        self.max_count
    }

    /// Number of glyphs that will be shown.
    pub fn visible_count(&self) -> usize {
        self.glyphs.iter().filter(|g| g.visible).count()
    }
}

/// Origin of the glyph at alphabet index `index`.
pub fn grid_position(index: usize) -> Vec3 {
    let row = index / GRID_COLUMNS;
    let col = index % GRID_COLUMNS;
    Vec3::new(col as f32 * COLUMN_SPACING, -(row as f32) * ROW_SPACING, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::count_text;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_grid_positions() {
        assert_eq!(grid_position(0), Vec3::ZERO);
        assert_eq!(grid_position(12), Vec3::new(18.0, 0.0, 0.0));
        assert_eq!(grid_position(13), Vec3::new(0.0, -3.0, 0.0));
        assert_eq!(grid_position(25), Vec3::new(18.0, -3.0, 0.0));

        let layout = GlyphLayout::from_table(&count_text("a")).unwrap();
        for (i, glyph) in layout.glyphs().iter().enumerate() {
            let expected = Vec3::new((i % 13) as f32 * 1.5, -((i / 13) as f32) * 3.0, 0.0);
            assert_eq!(glyph.position, expected, "letter {}", glyph.letter);
        }
    }

    #[test]
    fn test_zero_count_hidden() {
        let layout = GlyphLayout::from_table(&count_text("hello")).unwrap();
        for glyph in layout.glyphs() {
            assert_eq!(glyph.visible, glyph.count > 0, "letter {}", glyph.letter);
        }
        assert_eq!(layout.visible_count(), 4);
        assert!(!layout.get('z').unwrap().visible);
        assert_eq!(layout.get('z').unwrap().scale, 0.0);
    }

    #[test]
    fn test_scale_range_and_max() {
        let layout = GlyphLayout::from_table(&count_text("aaaab bbc")).unwrap();
        assert_eq!(layout.max_count(), 4);
        for glyph in layout.glyphs() {
            assert!((0.0..=MAX_EXTRUSION).contains(&glyph.scale));
        }
        assert_eq!(layout.get('a').unwrap().scale, MAX_EXTRUSION);
        assert!((layout.get('b').unwrap().scale - 0.75 * MAX_EXTRUSION).abs() < EPSILON);
        assert!((layout.get('c').unwrap().scale - 0.25 * MAX_EXTRUSION).abs() < EPSILON);
    }

    #[test]
    fn test_no_letters_rejected() {
        let err = GlyphLayout::from_table(&count_text("123 456 !?")).unwrap_err();
        assert!(matches!(err, AlphaFreqError::NoLetters));
    }

    #[test]
    fn test_only_unplotted_letters_rejected() {
        let err = GlyphLayout::from_table(&count_text("ééé ñ")).unwrap_err();
        assert!(matches!(err, AlphaFreqError::NoLetters));
    }

    #[test]
    fn test_display_char_is_uppercase() {
        let layout = GlyphLayout::from_table(&count_text("q")).unwrap();
        assert_eq!(layout.get('q').unwrap().display_char(), 'Q');
        assert!(layout.get('1').is_none());
    }
}
