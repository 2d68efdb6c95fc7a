//! The texture registry: decode, upload and tag-based slot lookup.
//!
//! Each registered texture occupies the next free unit slot, so the slot of
//! a tag is simply its registration index. The registry never rebinds or
//! evicts; it is filled during setup and stays fixed for the process
//! lifetime.

use std::path::Path;

use crate::error::Error;
use crate::stage::TextureUnits;

/// Upper bound on registered textures, matching the number of texture units
/// the target hardware can address at once.
pub const MAX_SCENE_TEXTURES: usize = 16;

/// A registered texture: its lookup tag and the uploaded handle.
#[derive(Debug)]
pub struct TextureEntry<T> {
    pub tag: String,
    pub texture: T,
}

/// Ordered collection of registered textures, keyed by tag.
///
/// Entries stay in registration order because the order *is* the slot
/// assignment. Tags are unique; registering a tag twice is rejected rather
/// than silently shadowed.
#[derive(Debug)]
pub struct TextureRegistry<U: TextureUnits> {
    entries: Vec<TextureEntry<U::Texture>>,
}

impl<U: TextureUnits> TextureRegistry<U> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Decode the image at `path` and upload it as a new texture under `tag`.
    ///
    /// Decoding flips the image vertically so UV origins line up with the
    /// shaders, and only 3- and 4-channel images are accepted. The decoded
    /// pixel buffer is dropped as soon as the upload returns.
    pub fn register(
        &mut self,
        units: &mut U,
        path: impl AsRef<Path>,
        tag: &str,
    ) -> Result<(), Error> {
        let path = path.as_ref();
        if self.entries.len() >= MAX_SCENE_TEXTURES {
            return Err(Error::RegistryFull {
                capacity: MAX_SCENE_TEXTURES,
            });
        }
        if self.entries.iter().any(|entry| entry.tag == tag) {
            return Err(Error::DuplicateTexture {
                tag: tag.to_string(),
            });
        }

        let pixels = decode_image(path)?;
        let texture = units.upload(&pixels, tag).map_err(|e| Error::Upload {
            tag: tag.to_string(),
            message: e.to_string(),
        })?;
        log::info!(
            "loaded texture {:?} from {} ({}x{}) into slot {}",
            tag,
            path.display(),
            pixels.width(),
            pixels.height(),
            self.entries.len()
        );
        self.entries.push(TextureEntry {
            tag: tag.to_string(),
            texture,
        });
        Ok(())
    }

    /// Bind every registered texture to its unit slot.
    ///
    /// Call once after all registrations and before the first draw that
    /// references a texture by tag.
    pub fn bind_all(&self, units: &mut U) {
        for (slot, entry) in self.entries.iter().enumerate() {
            units.bind(slot as u32, &entry.texture);
        }
    }

    /// The unit slot assigned to `tag`.
    pub fn resolve_slot(&self, tag: &str) -> Result<u32, Error> {
        self.entries
            .iter()
            .position(|entry| entry.tag == tag)
            .map(|slot| slot as u32)
            .ok_or_else(|| Error::UnknownTexture {
                tag: tag.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Release every held texture through the unit bank and clear the
    /// registry. Only valid at shutdown or before a full reset.
    pub fn release_all(&mut self, units: &mut U) {
        for entry in self.entries.drain(..) {
            units.release(entry.texture);
        }
    }
}

impl<U: TextureUnits> Default for TextureRegistry<U> {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_image(path: &Path) -> Result<image::RgbaImage, Error> {
    let decoded = image::open(path).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let channels = decoded.color().channel_count();
    if channels != 3 && channels != 4 {
        return Err(Error::UnsupportedFormat {
            path: path.to_path_buf(),
            channels,
        });
    }
    Ok(decoded.flipv().to_rgba8())
}
