//! Error types for scene setup and registry lookups.
//!
//! Every fallible boundary (decode, upload, tag lookup) reports an explicit
//! variant instead of logging and limping on. Setup collects everything that
//! went wrong into a single [`SetupError`] so a broken scene fails loudly
//! once, and the per-frame path can assume all lookups succeed.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the registries and the texture loading path.
#[derive(Debug, Error)]
pub enum Error {
    /// The image file could not be opened or decoded.
    #[error("could not decode image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    /// The image decoded, but with a channel count the scene pipeline does
    /// not handle (only 3- and 4-channel images are supported).
    #[error("image {path:?} has {channels} channel(s), only 3 or 4 are supported")]
    UnsupportedFormat { path: PathBuf, channels: u8 },
    /// All texture-unit slots are taken.
    #[error("texture registry is full ({capacity} slots)")]
    RegistryFull { capacity: usize },
    /// A texture with this tag was already registered.
    #[error("texture tag {tag:?} is already registered")]
    DuplicateTexture { tag: String },
    /// No texture was registered under this tag.
    #[error("no texture registered under tag {tag:?}")]
    UnknownTexture { tag: String },
    /// No material was defined under this tag.
    #[error("no material defined under tag {tag:?}")]
    UnknownMaterial { tag: String },
    /// The texture-unit bank rejected the decoded pixels.
    #[error("uploading texture {tag:?} failed: {message}")]
    Upload { tag: String, message: String },
}

/// Aggregate of every failure encountered while preparing a scene.
///
/// Returned by [`crate::render::SceneRenderer::prepare`]. The renderer keeps
/// going after each individual failure so one report covers the whole scene
/// description rather than just the first broken texture.
#[derive(Debug)]
pub struct SetupError {
    pub failures: Vec<Error>,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scene setup failed with {} error(s):", self.failures.len())?;
        for failure in &self.failures {
            write!(f, "\n  - {failure}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SetupError {}
