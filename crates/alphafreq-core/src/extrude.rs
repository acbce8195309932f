//! Linear extrusion of flat glyph outlines into closed solids.
//!
//! Every outline quad becomes a prism: the quad itself as the bottom cap,
//! a copy translated by `vector * scale_factor` as the top cap, and four
//! side walls. Vertices are duplicated per face so normals stay flat.

use glam::{Vec2, Vec3};

use crate::font::{GlyphOutline, Quad};

/// Triangle mesh produced by extrusion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlyphMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl GlyphMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned `(min, max)` of all vertices, or `None` for an empty mesh.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut points = self.positions.iter().map(|&p| Vec3::from(p));
        let first = points.next()?;
        Some(points.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    /// Append one planar quad with a shared face normal.
    fn push_face(&mut self, corners: [Vec3; 4]) {
        let normal = (corners[1] - corners[0])
            .cross(corners[2] - corners[0])
            .normalize_or_zero();
        let base = self.positions.len() as u32;
        for corner in corners {
            self.positions.push(corner.to_array());
            self.normals.push(normal.to_array());
        }
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
}

/// Sweeps an outline along a direction vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearExtrusion {
    /// Sweep direction.
    pub vector: Vec3,
    /// Multiplier applied to `vector`.
    pub scale_factor: f32,
}

impl LinearExtrusion {
    /// Extrusion along `+z` by `scale_factor`.
    pub fn along_z(scale_factor: f32) -> Self {
        Self {
            vector: Vec3::Z,
            scale_factor,
        }
    }

    /// Offset between the bottom and top caps.
    pub fn offset(&self) -> Vec3 {
        self.vector * self.scale_factor
    }

    /// Extrude every quad of `outline` into a prism.
    pub fn apply(&self, outline: &GlyphOutline) -> GlyphMesh {
        let offset = self.offset();
        let mut mesh = GlyphMesh {
            positions: Vec::with_capacity(outline.quads.len() * 24),
            normals: Vec::with_capacity(outline.quads.len() * 24),
            indices: Vec::with_capacity(outline.quads.len() * 36),
        };
        for quad in &outline.quads {
            extrude_quad(&mut mesh, *quad, offset);
        }
        mesh
    }
}

fn extrude_quad(mesh: &mut GlyphMesh, quad: Quad, offset: Vec3) {
    let bottom = quad.map(|p: Vec2| p.extend(0.0));
    let top = bottom.map(|p| p + offset);

    mesh.push_face(top);
    mesh.push_face([bottom[0], bottom[3], bottom[2], bottom[1]]);
    for i in 0..4 {
        let j = (i + 1) % 4;
        mesh.push_face([bottom[i], bottom[j], top[j], top[i]]);
    }
}
