//! The built-in desk scene: two speakers, two monitors on arms, a keyboard,
//! a mouse pad and a computer tower on a desk top.
//!
//! Everything here is literal data. Entries are listed in draw order;
//! positions and angles were hand-tuned against the reference viewpoint, so
//! treat the numbers as fixed. Entries reproduce the original draw sequence
//! exactly, including the UV scale each textured entry was effectively
//! sampled with.

use cgmath::{Vector2, Vector4};

use crate::meshes::PrimitiveKind;
use crate::resources::materials::Material;
use crate::scene::{Appearance, DrawEntry, PointLight, Scene, TextureSource};
use crate::transform::Transform;

fn place(scale: [f32; 3], rotation: [f32; 3], position: [f32; 3]) -> Transform {
    Transform {
        scale: scale.into(),
        rotation: rotation.into(),
        translation: position.into(),
    }
}

fn tex(tag: &'static str, u: f32, v: f32) -> Appearance {
    Appearance::Texture {
        tag,
        uv_scale: Vector2::new(u, v),
    }
}

fn flat(r: f32, g: f32, b: f32, a: f32) -> Appearance {
    Appearance::Color(Vector4::new(r, g, b, a))
}

fn entry(
    name: &'static str,
    mesh: PrimitiveKind,
    transform: Transform,
    appearance: Appearance,
    material: Option<&'static str>,
) -> DrawEntry {
    DrawEntry {
        name,
        mesh,
        transform,
        appearance,
        material,
    }
}

/// Image files the desk scene registers, in slot order.
pub fn desk_textures() -> Vec<TextureSource> {
    [
        ("textures/speaker_body.jpg", "speaker_body"),
        ("textures/speaker_mesh.jpg", "speaker_mesh"),
        ("textures/speaker_screws.jpg", "speaker_screws"),
        ("textures/speaker_ring.jpg", "speaker_ring"),
        ("textures/desk_top.jpg", "desk_top"),
        ("textures/plastic.jpg", "plastic"),
        ("textures/keyboard.jpg", "keyboard"),
        ("textures/screen.jpg", "screen"),
        ("textures/keys.jpg", "keys"),
    ]
    .into_iter()
    .map(|(path, tag)| TextureSource { path, tag })
    .collect()
}

/// Materials the desk scene defines.
pub fn desk_materials() -> Vec<(&'static str, Material)> {
    vec![
        (
            "black screws",
            Material {
                diffuse: [0.02, 0.04, 0.04].into(),
                specular: [0.25, 0.25, 0.25].into(),
                shininess: 35.0,
            },
        ),
        (
            "porcelain",
            Material {
                diffuse: [0.8, 0.8, 0.8].into(),
                specular: [0.9, 0.9, 0.9].into(),
                shininess: 5.0,
            },
        ),
        (
            "black plastic",
            Material {
                diffuse: [0.05, 0.05, 0.05].into(),
                specular: [0.15, 0.15, 0.15].into(),
                shininess: 10.0,
            },
        ),
    ]
}

/// The single overhead point light.
pub fn desk_lights() -> Vec<PointLight> {
    vec![PointLight {
        position: [0.0, 20.0, 20.0].into(),
        ambient: [0.86, 0.85, 0.88].into(),
        diffuse: [0.3, 0.3, 0.3].into(),
        specular: [0.01, 0.01, 0.01].into(),
        active: true,
    }]
}

/// The complete desk scene description.
pub fn desk_scene() -> Scene {
    use PrimitiveKind::*;

    let entries = vec![
        entry(
            "desk top",
            Plane,
            place([35.0, 1.0, 13.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]),
            tex("desk_top", 4.0, 10.0),
            Some("porcelain"),
        ),
        // left speaker
        entry(
            "left speaker box",
            Box,
            place([4.0, 5.5, 4.0], [0.0, 10.0, 0.0], [-12.0, 2.7, -7.0]),
            tex("speaker_body", 1.0, 1.0),
            Some("black plastic"),
        ),
        entry(
            "left speaker light bar",
            Cylinder,
            place([2.0, 0.05, 0.05], [0.0, 10.0, 0.0], [-11.66, 0.4, -5.0]),
            flat(1.0, 0.0, 0.0, 1.0),
            None,
        ),
        entry(
            "left speaker ring",
            Torus,
            place([1.55, 1.55, 0.3], [0.0, 10.0, 0.0], [-11.6, 2.8, -5.0]),
            tex("speaker_ring", 10.0, 10.0),
            Some("black plastic"),
        ),
        entry(
            "left speaker upper left screw",
            Cylinder,
            place([0.17, 0.08, 0.17], [90.0, 10.0, 0.0], [-12.9, 3.65, -4.77]),
            tex("speaker_screws", 1.0, 1.0),
            Some("black screws"),
        ),
        entry(
            "left speaker upper right screw",
            Cylinder,
            place([0.17, 0.08, 0.17], [90.0, 10.0, 0.0], [-10.3, 3.65, -5.2]),
            tex("speaker_screws", 1.0, 1.0),
            Some("black screws"),
        ),
        entry(
            "left speaker lower left screw",
            Cylinder,
            place([0.17, 0.08, 0.17], [90.0, 10.0, 0.0], [-12.9, 1.95, -4.77]),
            tex("speaker_screws", 1.0, 1.0),
            Some("black screws"),
        ),
        entry(
            "left speaker lower right screw",
            Cylinder,
            place([0.17, 0.08, 0.17], [90.0, 10.0, 0.0], [-10.3, 1.95, -5.2]),
            tex("speaker_screws", 1.0, 1.0),
            Some("black screws"),
        ),
        entry(
            "left speaker driver mesh",
            Cylinder,
            place([1.2, 0.07, 1.2], [90.0, 10.0, 0.0], [-11.6, 2.8, -5.05]),
            tex("speaker_mesh", 10.0, 10.0),
            Some("black screws"),
        ),
        // right speaker, mirrored about the YZ plane
        entry(
            "right speaker box",
            Box,
            place([4.0, 5.5, 4.0], [0.0, -10.0, 0.0], [12.0, 2.7, -7.0]),
            tex("speaker_body", 1.0, 1.0),
            Some("black plastic"),
        ),
        entry(
            "right speaker light bar",
            Cylinder,
            place([2.0, 0.05, 0.05], [0.0, -10.0, 0.0], [11.66, 0.4, -5.0]),
            flat(1.0, 0.0, 0.0, 1.0),
            None,
        ),
        entry(
            "right speaker ring",
            Torus,
            place([1.55, 1.55, 0.3], [0.0, -10.0, 0.0], [11.6, 2.8, -5.0]),
            tex("speaker_ring", 10.0, 10.0),
            Some("black plastic"),
        ),
        entry(
            "right speaker upper left screw",
            Cylinder,
            place([0.17, 0.08, 0.17], [90.0, -10.0, 0.0], [12.9, 3.65, -4.77]),
            tex("speaker_screws", 1.0, 1.0),
            Some("black screws"),
        ),
        entry(
            "right speaker upper right screw",
            Cylinder,
            place([0.17, 0.08, 0.17], [90.0, -10.0, 0.0], [10.3, 3.65, -5.2]),
            tex("speaker_screws", 1.0, 1.0),
            Some("black screws"),
        ),
        entry(
            "right speaker lower left screw",
            Cylinder,
            place([0.17, 0.08, 0.17], [90.0, -10.0, 0.0], [12.9, 1.95, -4.77]),
            tex("speaker_screws", 1.0, 1.0),
            Some("black screws"),
        ),
        entry(
            "right speaker lower right screw",
            Cylinder,
            place([0.17, 0.08, 0.17], [90.0, -10.0, 0.0], [10.3, 1.95, -5.2]),
            tex("speaker_screws", 1.0, 1.0),
            Some("black screws"),
        ),
        entry(
            "right speaker driver mesh",
            Cylinder,
            place([1.2, 0.07, 1.2], [90.0, -10.0, 0.0], [11.6, 2.8, -5.05]),
            tex("speaker_mesh", 10.0, 10.0),
            Some("black screws"),
        ),
        // computer tower
        entry(
            "tower box",
            Box,
            place([8.0, 13.0, 14.0], [0.0, 0.0, 0.0], [23.0, 6.5, 1.0]),
            tex("keyboard", 10.0, 10.0),
            None,
        ),
        entry(
            "tower glass",
            Plane,
            place([6.5, 0.0, 6.5], [0.0, 90.0, 90.0], [18.9, 6.5, 0.5]),
            tex("plastic", 10.0, 10.0),
            None,
        ),
        // primary monitor
        entry(
            "primary monitor body",
            Box,
            place([24.0, 14.0, 0.7], [0.0, 0.0, 0.0], [0.0, 14.0, -3.5]),
            tex("plastic", 10.0, 10.0),
            None,
        ),
        entry(
            "primary monitor screen",
            Plane,
            place([10.5, 6.0, 6.0], [90.0, 0.0, 0.0], [0.0, 14.0, -3.1]),
            tex("screen", 10.0, 10.0),
            None,
        ),
        // mouse pad
        entry(
            "mouse pad",
            Box,
            place([34.0, 0.2, 13.0], [0.0, 0.0, 0.0], [0.0, 0.1, 5.8]),
            flat(0.05, 0.05, 0.05, 1.0),
            None,
        ),
        // secondary monitor
        entry(
            "secondary monitor body",
            Box,
            place([11.0, 19.0, 0.7], [0.0, 25.0, 0.0], [-22.0, 12.0, -2.2]),
            tex("plastic", 10.0, 10.0),
            None,
        ),
        entry(
            "secondary monitor screen",
            Plane,
            place([5.0, 5.0, 8.5], [90.0, 25.0, 0.0], [-21.86, 12.0, -1.86]),
            tex("screen", 10.0, 10.0),
            None,
        ),
        // primary monitor arm
        entry(
            "primary arm base",
            Box,
            place([6.0, 1.0, 5.0], [0.0, 0.0, 0.0], [0.0, 0.5, -10.5]),
            tex("plastic", 10.0, 10.0),
            None,
        ),
        entry(
            "primary arm lower holder",
            Cylinder,
            place([0.9, 5.4, 0.9], [0.0, 0.0, 0.0], [0.0, 1.0, -11.5]),
            tex("plastic", 10.0, 10.0),
            None,
        ),
        entry(
            "primary arm back plate",
            Cylinder,
            place([3.0, 0.4, 3.0], [90.0, 0.0, 0.0], [0.0, 13.5, -4.3]),
            tex("plastic", 10.0, 10.0),
            None,
        ),
        entry(
            "primary arm knuckle",
            Cylinder,
            place([1.0, 0.5, 1.3], [0.0, 0.0, 0.0], [0.0, 13.5, -4.5]),
            tex("plastic", 10.0, 10.0),
            None,
        ),
        entry(
            "primary arm knuckle top",
            Cylinder,
            place([0.7, 0.5, 0.9], [0.0, -70.0, 0.0], [0.2, 14.0, -5.7]),
            tex("plastic", 10.0, 10.0),
            None,
        ),
        entry(
            "primary arm knuckle bottom",
            Cylinder,
            place([0.7, 0.5, 0.9], [0.0, -70.0, 0.0], [0.2, 13.0, -5.7]),
            tex("plastic", 10.0, 10.0),
            None,
        ),
        entry(
            "primary arm upper segment",
            Box,
            place([7.8, 1.5, 1.0], [-4.0, 18.0, -25.0], [3.5, 12.2, -7.3]),
            tex("plastic", 10.0, 10.0),
            None,
        ),
        entry(
            "primary arm lower segment",
            Box,
            place([8.8, 1.5, 1.0], [-4.0, -20.0, 25.0], [3.5, 7.5, -10.0]),
            tex("plastic", 10.0, 10.0),
            None,
        ),
        entry(
            "primary arm elbow",
            Cylinder,
            place([1.1, 3.6, 1.1], [0.0, 0.0, 0.0], [7.0, 7.8, -8.5]),
            tex("plastic", 10.0, 10.0),
            None,
        ),
        entry(
            "primary arm plate holder",
            Cylinder,
            place([1.0, 2.2, 0.8], [0.0, 40.0, 0.0], [0.6, 12.5, -6.3]),
            flat(0.1, 0.1, 0.1, 1.0),
            Some("black screws"),
        ),
        // secondary monitor arm and base
        entry(
            "secondary arm plate connector",
            Prism,
            place([1.5, 4.0, 1.5], [205.0, 0.0, 90.0], [-22.7, 14.2, -3.0]),
            tex("plastic", 10.0, 10.0),
            None,
        ),
        entry(
            "secondary arm plate swivel",
            Cylinder,
            place([0.85, 3.9, 0.85], [205.0, 0.0, 90.0], [-24.9, 14.2, -3.1]),
            tex("speaker_ring", 10.0, 10.0),
            None,
        ),
        entry(
            "secondary arm",
            Box,
            place([3.5, 15.0, 1.4], [-4.0, 25.0, 0.0], [-23.45, 8.3, -4.55]),
            tex("plastic", 10.0, 10.0),
            None,
        ),
        entry(
            "secondary arm base swivel",
            Cylinder,
            place([2.5, 0.7, 2.5], [0.0, 0.0, 0.0], [-23.45, 0.3, -4.55]),
            tex("speaker_ring", 10.0, 10.0),
            None,
        ),
        entry(
            "secondary arm base plate",
            Box,
            place([9.5, 0.5, 8.8], [0.0, 25.0, 0.0], [-23.45, 0.25, -4.55]),
            tex("plastic", 10.0, 10.0),
            None,
        ),
        // keyboard
        entry(
            "keyboard body",
            Box,
            place([10.0, 0.7, 4.5], [8.5, 0.0, 0.0], [0.0, 0.9, 4.0]),
            tex("keyboard", 10.0, 10.0),
            None,
        ),
        entry(
            "keyboard keys",
            Plane,
            place([4.9, 0.7, 1.8], [8.5, 0.0, 0.0], [0.0, 1.28, 4.2]),
            tex("keys", 10.0, 10.0),
            None,
        ),
        entry(
            "keyboard back left stand",
            Box,
            place([0.9, 1.1, 0.2], [15.0, 0.0, 0.0], [-4.0, 0.6, 2.3]),
            tex("plastic", 10.0, 10.0),
            None,
        ),
        entry(
            "keyboard back right stand",
            Box,
            place([0.9, 1.1, 0.2], [15.0, 0.0, 0.0], [4.0, 0.6, 2.3]),
            tex("plastic", 10.0, 10.0),
            None,
        ),
        entry(
            "keyboard wrist rest",
            Prism,
            place([0.69, 9.9, 2.1], [0.0, -10.0, 90.0], [0.0, 0.4, 7.2]),
            tex("speaker_mesh", 10.0, 10.0),
            None,
        ),
    ];

    Scene {
        textures: desk_textures(),
        materials: desk_materials(),
        lights: desk_lights(),
        entries,
    }
}
