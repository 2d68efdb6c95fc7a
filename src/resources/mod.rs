//! Tag-based registries resolved during rendering.
//!
//! - `textures` maps human-readable tags to uploaded GPU textures and their
//!   texture-unit slots
//! - `materials` maps tags to reflectance descriptors
//!
//! Both are filled once during scene setup and read-only afterwards.

pub mod materials;
pub mod textures;
