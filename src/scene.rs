//! The scene data model: draw entries, appearances and lights.
//!
//! A [`Scene`] is immutable, literal data. It names texture files and the
//! tags they register under, defines materials, configures a handful of
//! point lights and lists every object instance as a [`DrawEntry`]. The
//! entry list is iterated front to back once per frame; no entry depends on
//! another beyond the depth buffer.

use cgmath::{Vector2, Vector3, Vector4};

use crate::meshes::PrimitiveKind;
use crate::resources::materials::Material;
use crate::transform::Transform;

/// Number of point-light slots the shader carries.
pub const MAX_POINT_LIGHTS: usize = 4;

/// How a draw entry is colored: a flat RGBA value, or a registered texture
/// sampled with a per-entry UV scale.
#[derive(Clone, Debug, PartialEq)]
pub enum Appearance {
    Color(Vector4<f32>),
    Texture {
        tag: &'static str,
        uv_scale: Vector2<f32>,
    },
}

/// One object instance in the scene script.
#[derive(Clone, Debug)]
pub struct DrawEntry {
    /// Name for diagnostics only; never resolved.
    pub name: &'static str,
    pub mesh: PrimitiveKind,
    pub transform: Transform,
    pub appearance: Appearance,
    /// Tag into the material registry. `None` leaves the previously pushed
    /// material in place, matching how unlit entries behave.
    pub material: Option<&'static str>,
}

/// An image file and the tag it registers under.
#[derive(Clone, Copy, Debug)]
pub struct TextureSource {
    pub path: &'static str,
    pub tag: &'static str,
}

/// A point light, uploaded once at setup and untouched afterwards.
#[derive(Clone, Debug)]
pub struct PointLight {
    pub position: Vector3<f32>,
    pub ambient: Vector3<f32>,
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub active: bool,
}

/// A complete, immutable scene description.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub textures: Vec<TextureSource>,
    pub materials: Vec<(&'static str, Material)>,
    pub lights: Vec<PointLight>,
    pub entries: Vec<DrawEntry>,
}
