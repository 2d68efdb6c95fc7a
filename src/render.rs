//! Scene setup and per-frame rendering against the GPU seams.
//!
//! A [`SceneRenderer`] has exactly two phases. [`prepare`] runs once: it
//! registers and binds every texture, defines every material, validates that
//! each draw entry's references resolve, uploads the light uniforms and
//! warms all primitive mesh buffers. Every failure along the way is
//! collected into one [`SetupError`] instead of aborting at the first.
//! [`render_frame`] then runs once per frame, fully stateless, issuing the
//! strict per-entry sequence: transform, appearance, material, draw.
//!
//! [`prepare`]: SceneRenderer::prepare
//! [`render_frame`]: SceneRenderer::render_frame

use crate::error::SetupError;
use crate::meshes::{ALL_KINDS, MeshLibrary};
use crate::resources::materials::MaterialRegistry;
use crate::resources::textures::TextureRegistry;
use crate::scene::{Appearance, DrawEntry, MAX_POINT_LIGHTS, Scene};
use crate::stage::{ShaderStage, TextureUnits, uniform};

/// Owns the registries and drives a scene through the seams.
pub struct SceneRenderer<U: TextureUnits> {
    textures: TextureRegistry<U>,
    materials: MaterialRegistry,
}

impl<U: TextureUnits> SceneRenderer<U> {
    pub fn new() -> Self {
        Self {
            textures: TextureRegistry::new(),
            materials: MaterialRegistry::new(),
        }
    }

    /// One-time scene setup.
    ///
    /// Registers and binds textures, defines materials, uploads light
    /// uniforms, warms every primitive mesh and validates that each entry's
    /// texture and material tags resolve. Failures are aggregated; on `Err`
    /// the registries keep whatever did load, so a caller may still render a
    /// degraded scene after reporting the error.
    pub fn prepare<S: ShaderStage, M: MeshLibrary>(
        &mut self,
        units: &mut U,
        stage: &mut S,
        meshes: &mut M,
        scene: &Scene,
    ) -> Result<(), SetupError> {
        let mut failures = Vec::new();

        for source in &scene.textures {
            if let Err(e) = self.textures.register(units, source.path, source.tag) {
                log::error!("skipping texture {:?}: {e}", source.tag);
                failures.push(e);
            }
        }
        self.textures.bind_all(units);

        for (tag, material) in &scene.materials {
            self.materials.define(tag, material.clone());
        }

        self.configure_lights(stage, scene);

        for kind in ALL_KINDS {
            meshes.load(kind);
        }

        // Check every reference now so the per-frame path stays branch-free.
        for entry in &scene.entries {
            if let Appearance::Texture { tag, .. } = &entry.appearance {
                if let Err(e) = self.textures.resolve_slot(tag) {
                    failures.push(e);
                }
            }
            if let Some(tag) = entry.material {
                if let Err(e) = self.materials.resolve(tag) {
                    failures.push(e);
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(SetupError { failures })
        }
    }

    fn configure_lights<S: ShaderStage>(&self, stage: &mut S, scene: &Scene) {
        stage.set_bool(uniform::USE_LIGHTING, !scene.lights.is_empty());
        if scene.lights.len() > MAX_POINT_LIGHTS {
            log::warn!(
                "scene defines {} point lights, only the first {} are uploaded",
                scene.lights.len(),
                MAX_POINT_LIGHTS
            );
        }
        for (index, light) in scene.lights.iter().take(MAX_POINT_LIGHTS).enumerate() {
            stage.set_vec3(&uniform::point_light(index, "position"), light.position);
            stage.set_vec3(&uniform::point_light(index, "ambient"), light.ambient);
            stage.set_vec3(&uniform::point_light(index, "diffuse"), light.diffuse);
            stage.set_vec3(&uniform::point_light(index, "specular"), light.specular);
            stage.set_bool(&uniform::point_light(index, "bActive"), light.active);
        }
        for index in scene.lights.len()..MAX_POINT_LIGHTS {
            stage.set_bool(&uniform::point_light(index, "bActive"), false);
        }
    }

    /// Render one frame: iterate the entry list in order, pushing each
    /// entry's state and issuing its draw call.
    pub fn render_frame<S: ShaderStage, M: MeshLibrary>(
        &self,
        stage: &mut S,
        meshes: &mut M,
        scene: &Scene,
    ) {
        for entry in &scene.entries {
            self.apply(stage, entry);
            meshes.draw(entry.mesh);
        }
    }

    /// Push one entry's transform, appearance and material into the stage.
    pub fn apply<S: ShaderStage>(&self, stage: &mut S, entry: &DrawEntry) {
        stage.set_mat4(uniform::MODEL, entry.transform.matrix());

        match &entry.appearance {
            Appearance::Color(color) => {
                stage.set_bool(uniform::USE_TEXTURE, false);
                stage.set_vec4(uniform::OBJECT_COLOR, *color);
            }
            Appearance::Texture { tag, uv_scale } => match self.textures.resolve_slot(tag) {
                Ok(slot) => {
                    stage.set_bool(uniform::USE_TEXTURE, true);
                    stage.set_sampler(uniform::OBJECT_TEXTURE, slot);
                    stage.set_vec2(uniform::UV_SCALE, *uv_scale);
                }
                // Unreachable after a clean prepare(); draw untextured
                // rather than upload a bogus sampler slot.
                Err(e) => {
                    log::error!("entry {:?}: {e}", entry.name);
                    stage.set_bool(uniform::USE_TEXTURE, false);
                }
            },
        }

        if let Some(tag) = entry.material {
            match self.materials.resolve(tag) {
                Ok(material) => {
                    stage.set_vec3(uniform::MATERIAL_DIFFUSE, material.diffuse);
                    stage.set_vec3(uniform::MATERIAL_SPECULAR, material.specular);
                    stage.set_float(uniform::MATERIAL_SHININESS, material.shininess);
                }
                Err(e) => log::error!("entry {:?}: {e}", entry.name),
            }
        }
    }

    /// Release all held textures. Only valid at shutdown.
    pub fn release(&mut self, units: &mut U) {
        self.textures.release_all(units);
    }

    pub fn textures(&self) -> &TextureRegistry<U> {
        &self.textures
    }

    pub fn materials(&self) -> &MaterialRegistry {
        &self.materials
    }
}

impl<U: TextureUnits> Default for SceneRenderer<U> {
    fn default() -> Self {
        Self::new()
    }
}
