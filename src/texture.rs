//! GPU textures and the wgpu texture-unit bank.
//!
//! This module provides [`Texture`], a wrapper around WGPU texture resources
//! created from decoded image pixels, and [`WgpuTextures`], the wgpu-backed
//! implementation of the [`TextureUnits`] seam.

use image::imageops::FilterType;

use crate::resources::textures::MAX_SCENE_TEXTURES;
use crate::stage::TextureUnits;

/// A GPU texture with its view and sampler.
///
/// Created from RGBA pixels via [`from_pixels`](Self::from_pixels). Scene
/// textures always use repeat wrapping, linear min/mag filtering and a full
/// mip chain.
#[derive(Clone, Debug)]
pub struct Texture {
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl Texture {
    /// Upload decoded RGBA pixels as an sRGB 2D texture with mipmaps.
    ///
    /// Mip levels are downsampled on the CPU and written level by level, so
    /// no extra render passes are needed at load time.
    pub fn from_pixels(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        pixels: &image::RgbaImage,
        label: &str,
    ) -> Self {
        let (width, height) = pixels.dimensions();
        let mip_level_count = width.max(height).max(1).ilog2() + 1;
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        let mut level_pixels = pixels.clone();
        for level in 0..mip_level_count {
            if level > 0 {
                let level_width = (width >> level).max(1);
                let level_height = (height >> level).max(1);
                level_pixels = image::imageops::resize(
                    &level_pixels,
                    level_width,
                    level_height,
                    FilterType::Triangle,
                );
            }
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    aspect: wgpu::TextureAspect::All,
                    texture: &texture,
                    mip_level: level,
                    origin: wgpu::Origin3d::ZERO,
                },
                &level_pixels,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(4 * level_pixels.width()),
                    rows_per_image: Some(level_pixels.height()),
                },
                wgpu::Extent3d {
                    width: level_pixels.width(),
                    height: level_pixels.height(),
                    depth_or_array_layers: 1,
                },
            );
        }

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Linear,
            ..Default::default()
        });

        Self {
            texture,
            view,
            sampler,
        }
    }
}

/// The wgpu-backed bank of texture-unit slots.
///
/// Uploads go through [`Texture::from_pixels`]; bound slots keep a clone of
/// the texture so a bind group for any slot can be built on demand.
pub struct WgpuTextures {
    device: wgpu::Device,
    queue: wgpu::Queue,
    slots: [Option<Texture>; MAX_SCENE_TEXTURES],
}

impl WgpuTextures {
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self {
            device,
            queue,
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Build a bind group exposing the texture bound to `slot`, or `None`
    /// when the slot is empty.
    pub fn bind_group(&self, slot: u32, layout: &wgpu::BindGroupLayout) -> Option<wgpu::BindGroup> {
        let texture = self.slots.get(slot as usize)?.as_ref()?;
        Some(self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
            label: Some("scene_texture_bind_group"),
        }))
    }
}

impl TextureUnits for WgpuTextures {
    type Texture = Texture;

    fn upload(&mut self, pixels: &image::RgbaImage, label: &str) -> anyhow::Result<Texture> {
        Ok(Texture::from_pixels(&self.device, &self.queue, pixels, label))
    }

    fn bind(&mut self, slot: u32, texture: &Texture) {
        match self.slots.get_mut(slot as usize) {
            Some(unit) => *unit = Some(texture.clone()),
            None => log::warn!(
                "slot {slot} is outside the {} available texture units",
                MAX_SCENE_TEXTURES
            ),
        }
    }

    fn release(&mut self, texture: Texture) {
        // Destroys the GPU resource now instead of waiting for the last
        // clone to drop.
        texture.texture.destroy();
    }
}
