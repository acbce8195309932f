//! AlphaFrequency Core — domain layer for the letter frequency viewer.
//!
//! This crate contains frequency counting, grid layout, vector-text outlines,
//! linear extrusion, camera framing, and the backend-neutral scene builder.
//! No GPU or framework dependencies.

pub mod camera;
pub mod error;
pub mod extrude;
pub mod font;
pub mod frequency;
pub mod layout;
pub mod scene;

// Re-exports for convenience.
pub use camera::{Bounds3, OrbitRig};
pub use error::AlphaFreqError;
pub use extrude::{GlyphMesh, LinearExtrusion};
pub use frequency::{FrequencyTable, count_file, count_reader, count_text};
pub use layout::{ALPHABET, GlyphLayout, LetterGlyph};
pub use scene::{GlyphBackend, GlyphRequest, GlyphStyle, Scene, build_scene};

// Color type used in glyph and background styling.
pub use palette::Srgb;
