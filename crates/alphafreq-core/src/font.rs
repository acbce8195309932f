//! Vector-text outlines for the uppercase Latin alphabet.
//!
//! Each letter is a set of stroke polylines on a 0.7 × 1.0 em box with the
//! baseline at `y = 0`. Strokes are thickened into convex quads, which the
//! extrusion stage sweeps into solids.

use glam::Vec2;

use crate::error::AlphaFreqError;

/// Em-box height of a glyph.
pub const GLYPH_HEIGHT: f32 = 1.0;
/// Advance width of a glyph.
pub const GLYPH_WIDTH: f32 = 0.7;
/// Default stroke thickness.
pub const DEFAULT_STROKE_WIDTH: f32 = 0.14;

type Polyline = &'static [[f32; 2]];

/// Ring shared by `O` and `Q`.
const RING: Polyline = &[
    [0.15, 0.0],
    [0.55, 0.0],
    [0.7, 0.15],
    [0.7, 0.85],
    [0.55, 1.0],
    [0.15, 1.0],
    [0.0, 0.85],
    [0.0, 0.15],
    [0.15, 0.0],
];

/// Bowl shared by `P` and `R`.
const BOWL: Polyline = &[
    [0.0, 0.0],
    [0.0, 1.0],
    [0.55, 1.0],
    [0.7, 0.85],
    [0.7, 0.6],
    [0.55, 0.45],
    [0.0, 0.45],
];

const C_ARC: Polyline = &[
    [0.7, 0.85],
    [0.55, 1.0],
    [0.15, 1.0],
    [0.0, 0.85],
    [0.0, 0.15],
    [0.15, 0.0],
    [0.55, 0.0],
    [0.7, 0.15],
];

fn strokes(letter: char) -> Option<&'static [Polyline]> {
    let strokes: &'static [Polyline] = match letter {
        'A' => &[&[[0.0, 0.0], [0.35, 1.0], [0.7, 0.0]], &[[0.15, 0.4], [0.55, 0.4]]],
        'B' => &[
            &[[0.0, 0.0], [0.0, 1.0], [0.5, 1.0], [0.65, 0.9], [0.65, 0.6], [0.5, 0.5], [0.0, 0.5]],
            &[[0.5, 0.5], [0.7, 0.4], [0.7, 0.1], [0.55, 0.0], [0.0, 0.0]],
        ],
        'C' => &[C_ARC],
        'D' => &[&[
            [0.0, 0.0],
            [0.0, 1.0],
            [0.45, 1.0],
            [0.7, 0.75],
            [0.7, 0.25],
            [0.45, 0.0],
            [0.0, 0.0],
        ]],
        'E' => &[
            &[[0.7, 1.0], [0.0, 1.0], [0.0, 0.0], [0.7, 0.0]],
            &[[0.0, 0.5], [0.5, 0.5]],
        ],
        'F' => &[&[[0.7, 1.0], [0.0, 1.0], [0.0, 0.0]], &[[0.0, 0.5], [0.5, 0.5]]],
        'G' => &[C_ARC, &[[0.7, 0.15], [0.7, 0.45], [0.4, 0.45]]],
        'H' => &[
            &[[0.0, 0.0], [0.0, 1.0]],
            &[[0.7, 0.0], [0.7, 1.0]],
            &[[0.0, 0.5], [0.7, 0.5]],
        ],
        'I' => &[
            &[[0.35, 0.0], [0.35, 1.0]],
            &[[0.1, 1.0], [0.6, 1.0]],
            &[[0.1, 0.0], [0.6, 0.0]],
        ],
        'J' => &[&[[0.7, 1.0], [0.7, 0.15], [0.55, 0.0], [0.15, 0.0], [0.0, 0.15], [0.0, 0.3]]],
        'K' => &[
            &[[0.0, 0.0], [0.0, 1.0]],
            &[[0.7, 1.0], [0.0, 0.4]],
            &[[0.2, 0.55], [0.7, 0.0]],
        ],
        'L' => &[&[[0.0, 1.0], [0.0, 0.0], [0.7, 0.0]]],
        'M' => &[&[[0.0, 0.0], [0.0, 1.0], [0.35, 0.5], [0.7, 1.0], [0.7, 0.0]]],
        'N' => &[&[[0.0, 0.0], [0.0, 1.0], [0.7, 0.0], [0.7, 1.0]]],
        'O' => &[RING],
        'P' => &[BOWL],
        'Q' => &[RING, &[[0.4, 0.3], [0.75, -0.05]]],
        'R' => &[BOWL, &[[0.3, 0.45], [0.7, 0.0]]],
        'S' => &[&[
            [0.7, 0.85],
            [0.55, 1.0],
            [0.15, 1.0],
            [0.0, 0.85],
            [0.0, 0.65],
            [0.15, 0.5],
            [0.55, 0.5],
            [0.7, 0.35],
            [0.7, 0.15],
            [0.55, 0.0],
            [0.15, 0.0],
            [0.0, 0.15],
        ]],
        'T' => &[&[[0.0, 1.0], [0.7, 1.0]], &[[0.35, 1.0], [0.35, 0.0]]],
        'U' => &[&[[0.0, 1.0], [0.0, 0.15], [0.15, 0.0], [0.55, 0.0], [0.7, 0.15], [0.7, 1.0]]],
        'V' => &[&[[0.0, 1.0], [0.35, 0.0], [0.7, 1.0]]],
        'W' => &[&[[0.0, 1.0], [0.15, 0.0], [0.35, 0.6], [0.55, 0.0], [0.7, 1.0]]],
        'X' => &[&[[0.0, 0.0], [0.7, 1.0]], &[[0.0, 1.0], [0.7, 0.0]]],
        'Y' => &[
            &[[0.0, 1.0], [0.35, 0.5], [0.7, 1.0]],
            &[[0.35, 0.5], [0.35, 0.0]],
        ],
        'Z' => &[&[[0.0, 1.0], [0.7, 1.0], [0.0, 0.0], [0.7, 0.0]]],
        _ => return None,
    };
    Some(strokes)
}

/// A convex quad in counter-clockwise order, viewed from `+z`.
pub type Quad = [Vec2; 4];

/// Flat 2D outline of one glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphOutline {
    pub letter: char,
    pub quads: Vec<Quad>,
}

/// Outline of `letter`, accepting either case. Strokes are `stroke_width` thick.
pub fn outline(letter: char, stroke_width: f32) -> Result<GlyphOutline, AlphaFreqError> {
    let upper = letter.to_ascii_uppercase();
    let polylines = strokes(upper).ok_or(AlphaFreqError::UnknownGlyph(letter))?;

    let half = stroke_width * 0.5;
    let quads = polylines
        .iter()
        .flat_map(|line| line.windows(2))
        .filter_map(|pair| stroke_quad(Vec2::from(pair[0]), Vec2::from(pair[1]), half))
        .collect();

    Ok(GlyphOutline {
        letter: upper,
        quads,
    })
}

/// Thicken a segment into a quad with square caps. Degenerate segments yield `None`.
fn stroke_quad(from: Vec2, to: Vec2, half: f32) -> Option<Quad> {
    let dir = (to - from).try_normalize()?;
    let along = dir * half;
    let across = dir.perp() * half;
    let start = from - along;
    let end = to + along;
    Some([start - across, end - across, end + across, start + across])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signed_area(quad: &Quad) -> f32 {
        (0..4)
            .map(|i| quad[i].perp_dot(quad[(i + 1) % 4]))
            .sum::<f32>()
            * 0.5
    }

    #[test]
    fn test_every_letter_has_outline() {
        for c in 'A'..='Z' {
            let glyph = outline(c, DEFAULT_STROKE_WIDTH).unwrap();
            assert!(!glyph.quads.is_empty(), "letter {c}");
        }
    }

    #[test]
    fn test_lowercase_maps_to_uppercase() {
        let lower = outline('g', DEFAULT_STROKE_WIDTH).unwrap();
        let upper = outline('G', DEFAULT_STROKE_WIDTH).unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.letter, 'G');
    }

    #[test]
    fn test_unknown_glyph() {
        let err = outline('é', DEFAULT_STROKE_WIDTH).unwrap_err();
        assert!(matches!(err, AlphaFreqError::UnknownGlyph('é')));
        assert!(outline('7', DEFAULT_STROKE_WIDTH).is_err());
    }

    #[test]
    fn test_quads_counter_clockwise() {
        for c in 'A'..='Z' {
            for quad in outline(c, DEFAULT_STROKE_WIDTH).unwrap().quads {
                assert!(signed_area(&quad) > 0.0, "letter {c} has a clockwise quad");
            }
        }
    }

    #[test]
    fn test_outline_stays_near_em_box() {
        let margin = DEFAULT_STROKE_WIDTH + 0.1;
        for c in 'A'..='Z' {
            for quad in outline(c, DEFAULT_STROKE_WIDTH).unwrap().quads {
                for p in quad {
                    assert!(p.x >= -margin && p.x <= GLYPH_WIDTH + margin, "letter {c}: {p}");
                    assert!(p.y >= -margin && p.y <= GLYPH_HEIGHT + margin, "letter {c}: {p}");
                }
            }
        }
    }

    #[test]
    fn test_stroke_quad_shape() {
        let quad = stroke_quad(Vec2::ZERO, Vec2::new(1.0, 0.0), 0.1).unwrap();
        assert_eq!(
            quad,
            [
                Vec2::new(-0.1, -0.1),
                Vec2::new(1.1, -0.1),
                Vec2::new(1.1, 0.1),
                Vec2::new(-0.1, 0.1),
            ]
        );
        assert!(stroke_quad(Vec2::ONE, Vec2::ONE, 0.1).is_none());
    }
}
