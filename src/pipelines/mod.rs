//! wgpu render pipeline and shader stage for scene drawing.
//!
//! - `scene` contains the packed uniform block, the wgpu [`ShaderStage`]
//!   implementation and the scene render pipeline builder
//!
//! [`ShaderStage`]: crate::stage::ShaderStage

pub mod scene;
