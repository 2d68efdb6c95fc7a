//! The shader-uniform and texture-unit seams.
//!
//! Shader state on a GPU is process-wide and mutated through side effects.
//! Instead of reaching for it through free functions, every draw step takes
//! these traits by reference so the dependency is visible in the signature
//! and a test double can record calls instead of touching a device.
//!
//! [`ShaderStage`] mirrors a classic name-keyed uniform interface: calls are
//! fire-and-forget, names are the stable strings listed in [`uniform`], and
//! values land in whatever program is active. [`TextureUnits`] owns upload,
//! per-slot binding and release of 2D textures.

use cgmath::{Matrix4, Vector2, Vector3, Vector4};

/// The stable uniform names the renderer writes through [`ShaderStage`].
pub mod uniform {
    pub const MODEL: &str = "model";
    pub const OBJECT_COLOR: &str = "objectColor";
    pub const OBJECT_TEXTURE: &str = "objectTexture";
    pub const USE_TEXTURE: &str = "bUseTexture";
    pub const USE_LIGHTING: &str = "bUseLighting";
    pub const UV_SCALE: &str = "UVscale";
    pub const MATERIAL_DIFFUSE: &str = "material.diffuseColor";
    pub const MATERIAL_SPECULAR: &str = "material.specularColor";
    pub const MATERIAL_SHININESS: &str = "material.shininess";

    /// Name of a per-light uniform, e.g. `pointLights[1].ambient`.
    pub fn point_light(index: usize, field: &str) -> String {
        format!("pointLights[{index}].{field}")
    }
}

/// Typed, name-keyed uniform setters on the active shader program.
///
/// No setter returns a value; the contract is entirely the shader state the
/// subsequent draw call observes. Implementations log and ignore names they
/// do not know.
pub trait ShaderStage {
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>);
    fn set_vec4(&mut self, name: &str, value: Vector4<f32>);
    fn set_vec3(&mut self, name: &str, value: Vector3<f32>);
    fn set_vec2(&mut self, name: &str, value: Vector2<f32>);
    fn set_float(&mut self, name: &str, value: f32);
    fn set_bool(&mut self, name: &str, value: bool);
    /// Point a sampler uniform at a texture-unit slot.
    fn set_sampler(&mut self, name: &str, slot: u32);
}

/// Upload, binding and release of 2D textures on a bank of unit slots.
pub trait TextureUnits {
    /// Whatever the implementation hands back for an uploaded texture.
    type Texture;

    /// Upload decoded RGBA pixels as a new 2D texture.
    ///
    /// The caller drops the pixel buffer right after this returns; the
    /// implementation must not keep borrowing it.
    fn upload(&mut self, pixels: &image::RgbaImage, label: &str) -> anyhow::Result<Self::Texture>;

    /// Bind a previously uploaded texture to a unit slot.
    fn bind(&mut self, slot: u32, texture: &Self::Texture);

    /// Release the GPU resources behind a texture. Only valid at shutdown or
    /// before a full reset.
    fn release(&mut self, texture: Self::Texture);
}
