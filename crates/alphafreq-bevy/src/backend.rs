//! [`GlyphBackend`] implementation that spawns Bevy mesh entities.

use alphafreq_core::{AlphaFreqError, GlyphBackend, GlyphMesh, GlyphRequest, Srgb};
use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use crate::resources::LetterGlyphActor;

/// Spawns one entity per glyph: mesh, material, transform, and visibility.
pub struct BevyGlyphBackend<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub meshes: &'a mut Assets<Mesh>,
    pub materials: &'a mut Assets<StandardMaterial>,
}

impl GlyphBackend for BevyGlyphBackend<'_, '_, '_> {
    type Handle = Entity;
    type Error = AlphaFreqError;

    fn build_glyph(&mut self, request: GlyphRequest) -> Result<Entity, AlphaFreqError> {
        let mesh = self.meshes.add(to_bevy_mesh(request.mesh));
        let material = self.materials.add(StandardMaterial {
            base_color: to_bevy_color(request.color),
            perceptual_roughness: 0.6,
            ..default()
        });
        let visibility = if request.visible {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };

        let entity = self
            .commands
            .spawn((
                Name::new(format!("Glyph {}", request.text)),
                LetterGlyphActor {
                    letter: request.letter,
                    count: request.count,
                    scale: request.scale,
                },
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::from_translation(to_bevy_vec3(request.position)),
                visibility,
            ))
            .id();
        Ok(entity)
    }
}

/// Convert an extruded glyph into a triangle-list Bevy mesh.
pub fn to_bevy_mesh(mesh: GlyphMesh) -> Mesh {
    let GlyphMesh {
        positions,
        normals,
        indices,
    } = mesh;

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_indices(Indices::U32(indices))
}

pub fn to_bevy_color(color: Srgb<f32>) -> Color {
    Color::srgb(color.red, color.green, color.blue)
}

pub fn to_bevy_vec3(v: glam::Vec3) -> Vec3 {
    Vec3::from_array(v.to_array())
}
