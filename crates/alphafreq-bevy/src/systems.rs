//! Bevy systems for the letter frequency scene.
//!
//! The scene is built once at startup. Afterwards only the camera changes,
//! driven by `CameraCommand` messages from the host app's input handling.

use alphafreq_core::{OrbitRig, build_scene};
use bevy::prelude::*;

use crate::backend::{BevyGlyphBackend, to_bevy_vec3};
use crate::events::CameraCommand;
use crate::resources::{
    CameraRig, GlyphAppearance, LetterFrequencies, SceneCamera, ViewSettings,
};

/// Startup system: spawn one glyph entity per letter and frame the camera rig.
///
/// A missing `LetterFrequencies` resource or a failed glyph build is fatal:
/// the app exits with an error instead of showing a partial scene.
pub fn build_glyph_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    frequencies: Option<Res<LetterFrequencies>>,
    appearance: Res<GlyphAppearance>,
    view: Res<ViewSettings>,
    mut rig: ResMut<CameraRig>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(frequencies) = frequencies else {
        tracing::error!("LetterFrequencies resource missing; nothing to render");
        exit.write(AppExit::error());
        return;
    };

    let mut backend = BevyGlyphBackend {
        commands: &mut commands,
        meshes: &mut *meshes,
        materials: &mut *materials,
    };
    let scene = match build_scene(&frequencies.layout, &appearance.0, &mut backend) {
        Ok(scene) => scene,
        Err(e) => {
            tracing::error!("Failed to build glyph scene: {e}");
            exit.write(AppExit::error());
            return;
        }
    };

    let mut framed = OrbitRig::default();
    match scene.bounds {
        Some(bounds) => framed.reset_to(&bounds),
        None => tracing::warn!("No visible glyphs; camera left at origin"),
    }
    framed.elevate(view.elevation);
    framed.rotate_azimuth(view.azimuth);
    framed.dolly(view.dolly);

    rig.current = framed;
    rig.home = framed;
}

/// Startup system: spawn the perspective camera with a headlight.
pub fn spawn_scene_camera(mut commands: Commands, rig: Res<CameraRig>) {
    let orbit = rig.current;
    commands
        .spawn((
            Name::new("Scene Camera"),
            SceneCamera,
            Camera3d::default(),
            Projection::Perspective(PerspectiveProjection {
                fov: orbit.view_angle,
                ..default()
            }),
            camera_transform(&orbit),
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new("Headlight"),
                DirectionalLight::default(),
                Transform::default(),
            ));
        });
}

/// Apply queued camera commands to the orbit rig.
pub fn apply_camera_commands(
    mut commands: MessageReader<CameraCommand>,
    mut rig: ResMut<CameraRig>,
) {
    for cmd in commands.read() {
        match *cmd {
            CameraCommand::Orbit { azimuth, elevation } => {
                rig.current.rotate_azimuth(azimuth);
                rig.current.elevate(elevation);
            }
            CameraCommand::Pan(delta) => {
                rig.current.pan(glam::Vec2::from_array(delta.to_array()));
            }
            CameraCommand::Dolly(factor) => rig.current.dolly(factor),
            CameraCommand::Reset => {
                let home = rig.home;
                rig.current = home;
                tracing::debug!("Camera reset to startup framing");
            }
        }
    }
}

/// Copy the rig into the camera transform whenever it changes.
pub fn sync_camera_transform(
    rig: Res<CameraRig>,
    mut cameras: Query<&mut Transform, With<SceneCamera>>,
) {
    if !rig.is_changed() {
        return;
    }
    for mut transform in &mut cameras {
        *transform = camera_transform(&rig.current);
    }
}

/// World transform of a camera placed by `orbit`, looking at its focus.
pub fn camera_transform(orbit: &OrbitRig) -> Transform {
    Transform::from_translation(to_bevy_vec3(orbit.eye()))
        .looking_at(to_bevy_vec3(orbit.focus), Vec3::Y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alphafreq_core::{GlyphLayout, count_text};

    use crate::resources::LetterGlyphActor;

    fn scene_app(text: &str) -> App {
        let layout = GlyphLayout::from_table(&count_text(text)).unwrap();
        let mut app = App::new();
        app.init_resource::<Assets<Mesh>>()
            .init_resource::<Assets<StandardMaterial>>()
            .init_resource::<GlyphAppearance>()
            .init_resource::<ViewSettings>()
            .init_resource::<CameraRig>()
            .add_message::<CameraCommand>()
            .insert_resource(LetterFrequencies::new(layout))
            .add_systems(Startup, build_glyph_scene)
            .add_systems(Update, apply_camera_commands);
        app
    }

    #[test]
    fn test_spawns_one_entity_per_letter() {
        let mut app = scene_app("hello world");
        app.update();

        let world = app.world_mut();
        let mut query = world.query::<(&LetterGlyphActor, &Visibility)>();
        let glyphs: Vec<_> = query.iter(world).map(|(g, v)| (*g, *v)).collect();
        assert_eq!(glyphs.len(), 26);

        for (glyph, visibility) in &glyphs {
            if glyph.count == 0 {
                assert_eq!(*visibility, Visibility::Hidden, "letter {}", glyph.letter);
            } else {
                assert_eq!(*visibility, Visibility::Inherited, "letter {}", glyph.letter);
            }
        }
        let l = glyphs.iter().find(|(g, _)| g.letter == 'l').unwrap().0;
        assert_eq!(l.count, 3);
        assert_eq!(l.scale, 2.5);
    }

    #[test]
    fn test_rig_framed_with_view_angles() {
        let mut app = scene_app("abc");
        app.update();

        let rig = app.world().resource::<CameraRig>();
        assert_eq!(rig.current, rig.home);
        assert!(rig.current.distance > 0.0);
        assert!((rig.current.elevation - 30f32.to_radians()).abs() < 1e-5);
        assert!((rig.current.azimuth + 30f32.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn test_reset_restores_home() {
        let mut app = scene_app("abc");
        app.update();

        app.world_mut().write_message(CameraCommand::Dolly(2.0));
        app.world_mut().write_message(CameraCommand::Orbit {
            azimuth: 45.0,
            elevation: 10.0,
        });
        app.update();
        {
            let rig = app.world().resource::<CameraRig>();
            assert_ne!(rig.current, rig.home);
            assert!((rig.current.distance - rig.home.distance / 2.0).abs() < 1e-4);
        }

        app.world_mut().write_message(CameraCommand::Reset);
        app.update();
        let rig = app.world().resource::<CameraRig>();
        assert_eq!(rig.current, rig.home);
    }

    #[test]
    fn test_camera_transform_looks_at_focus() {
        let mut orbit = OrbitRig::default();
        orbit.distance = 10.0;
        let transform = camera_transform(&orbit);
        assert!((transform.translation - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-5);
        assert!((transform.forward().as_vec3() - Vec3::NEG_Z).length() < 1e-5);
    }
}
