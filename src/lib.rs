//! still-life
//!
//! A small declarative renderer for fixed, hand-authored 3D scenes. A scene
//! is a literal data table: texture sources, material definitions, a handful
//! of point lights and an ordered list of draw entries over primitive meshes.
//! The crate resolves that table against tag-based registries and drives the
//! per-draw shader state in a strict sequence, once per frame.
//!
//! The GPU itself is reached through three explicit seams so that tests can
//! record calls instead of touching a device: a shader stage with typed,
//! name-keyed uniform setters, a texture-unit bank, and a primitive mesh
//! library. A wgpu realization of the first two ships with the crate.
//!
//! High-level modules
//! - `transform`: fixed-order model matrix composition from scale/rotation/translation
//! - `stage`: the shader-uniform and texture-unit seams plus the stable uniform names
//! - `meshes`: primitive mesh kinds and the mesh-library seam
//! - `resources`: tag-based texture and material registries
//! - `scene`: the scene data model (draw entries, appearances, lights)
//! - `render`: setup and per-frame driving of a scene against the seams
//! - `desk`: the built-in desk scene description
//! - `texture`: wgpu texture upload and the wgpu texture-unit bank
//! - `pipelines`: wgpu uniform block, shader stage and render pipeline
//!

pub mod desk;
pub mod error;
pub mod meshes;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod scene;
pub mod stage;
pub mod texture;
pub mod transform;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
