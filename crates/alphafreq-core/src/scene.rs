//! Backend-neutral scene assembly.
//!
//! [`build_scene`] turns a [`GlyphLayout`] into one extruded mesh per letter
//! and hands each to a [`GlyphBackend`], which owns the actual rendering
//! objects. The layout, outline, and extrusion logic never touch a toolkit.

use glam::Vec3;
use palette::Srgb;

use crate::camera::Bounds3;
use crate::error::AlphaFreqError;
use crate::extrude::{GlyphMesh, LinearExtrusion};
use crate::font::{self, DEFAULT_STROKE_WIDTH};
use crate::layout::{GlyphLayout, LetterGlyph};

/// "Peacock" blue used for every glyph.
pub const PEACOCK: Srgb<u8> = Srgb::new(51, 161, 201);

/// "Silver" grey used for the scene background.
pub const SILVER: Srgb<u8> = Srgb::new(192, 192, 192);

/// Appearance shared by all glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphStyle {
    pub color: Srgb<u8>,
    pub stroke_width: f32,
    /// Extrusion direction; scaled per glyph by its frequency.
    pub extrusion_vector: Vec3,
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self {
            color: PEACOCK,
            stroke_width: DEFAULT_STROKE_WIDTH,
            extrusion_vector: Vec3::Z,
        }
    }
}

/// Everything a backend needs to realise one glyph.
#[derive(Debug, Clone)]
pub struct GlyphRequest {
    /// Uppercase character shown.
    pub text: char,
    pub letter: char,
    pub count: u64,
    pub scale: f32,
    pub position: Vec3,
    pub color: Srgb<f32>,
    pub visible: bool,
    /// Extruded geometry in glyph-local coordinates.
    pub mesh: GlyphMesh,
}

/// A rendering backend able to build one glyph at a time.
pub trait GlyphBackend {
    /// Opaque handle to the renderable created for a glyph.
    type Handle;
    type Error: From<AlphaFreqError>;

    fn build_glyph(&mut self, request: GlyphRequest) -> Result<Self::Handle, Self::Error>;
}

/// Handles for the 26 glyphs plus the bounds of the visible ones.
#[derive(Debug)]
pub struct Scene<H> {
    /// `(letter, handle)` in alphabet order.
    pub glyphs: Vec<(char, H)>,
    /// World-space bounds of visible glyphs. `None` if nothing is visible.
    pub bounds: Option<Bounds3>,
}

/// Extrude the glyph for `glyph` using `style`.
pub fn glyph_request(
    glyph: &LetterGlyph,
    style: &GlyphStyle,
) -> Result<GlyphRequest, AlphaFreqError> {
    let outline = font::outline(glyph.letter, style.stroke_width)?;
    let extrusion = LinearExtrusion {
        vector: style.extrusion_vector,
        scale_factor: glyph.scale,
    };

    Ok(GlyphRequest {
        text: outline.letter,
        letter: glyph.letter,
        count: glyph.count,
        scale: glyph.scale,
        position: glyph.position,
        color: style.color.into_format(),
        visible: glyph.visible,
        mesh: extrusion.apply(&outline),
    })
}

/// Build every glyph of `layout` through `backend`, in alphabet order.
pub fn build_scene<B: GlyphBackend>(
    layout: &GlyphLayout,
    style: &GlyphStyle,
    backend: &mut B,
) -> Result<Scene<B::Handle>, B::Error> {
    let mut glyphs = Vec::with_capacity(layout.glyphs().len());
    let mut bounds: Option<Bounds3> = None;

    for glyph in layout.glyphs() {
        let request = glyph_request(glyph, style)?;

        if request.visible {
            if let Some((lo, hi)) = request.mesh.bounds() {
                let placed = Bounds3::new(lo, hi).translated(request.position);
                bounds = Some(bounds.map_or(placed, |b| b.union(placed)));
            }
        }

        tracing::debug!(
            "glyph {}: count={} scale={:.3} visible={}",
            request.text,
            request.count,
            request.scale,
            request.visible
        );
        glyphs.push((glyph.letter, backend.build_glyph(request)?));
    }

    tracing::info!(
        "built {} glyphs ({} visible, max count {})",
        glyphs.len(),
        layout.visible_count(),
        layout.max_count()
    );

    Ok(Scene { glyphs, bounds })
}
