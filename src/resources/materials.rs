//! The material registry: tag-based reflectance lookup.

use cgmath::Vector3;

use crate::error::Error;

/// Reflectance descriptor pushed into the shader before a lit draw.
///
/// Colors are in [0, 1] per component; `shininess` is the positive specular
/// exponent.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    pub diffuse: Vector3<f32>,
    pub specular: Vector3<f32>,
    pub shininess: f32,
}

#[derive(Debug)]
struct MaterialEntry {
    tag: String,
    material: Material,
}

/// Ordered collection of defined materials, keyed by tag.
///
/// `define` performs no duplicate check: definitions under the same tag are
/// all retained and `resolve` returns the first match. Callers that care
/// should pick distinct tags.
#[derive(Debug, Default)]
pub struct MaterialRegistry {
    entries: Vec<MaterialEntry>,
}

impl MaterialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a material definition under `tag`.
    pub fn define(&mut self, tag: &str, material: Material) {
        self.entries.push(MaterialEntry {
            tag: tag.to_string(),
            material,
        });
    }

    /// The first material defined under `tag`.
    pub fn resolve(&self, tag: &str) -> Result<&Material, Error> {
        self.entries
            .iter()
            .find(|entry| entry.tag == tag)
            .map(|entry| &entry.material)
            .ok_or_else(|| Error::UnknownMaterial {
                tag: tag.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
