use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use cgmath::{Matrix4, Vector2, Vector3, Vector4};
use still_life::meshes::{MeshLibrary, PrimitiveKind};
use still_life::stage::{ShaderStage, TextureUnits};

/// One recorded call against any of the three GPU seams.
///
/// All doubles share a single log so tests can assert ordering across
/// uniform writes, texture binds and draw calls.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Mat4(String, [[f32; 4]; 4]),
    Vec4(String, [f32; 4]),
    Vec3(String, [f32; 3]),
    Vec2(String, [f32; 2]),
    Float(String, f32),
    Bool(String, bool),
    Sampler(String, u32),
    /// texture id, width, height
    Upload(u32, u32, u32),
    /// slot, texture id
    Bind(u32, u32),
    Release(u32),
    Load(PrimitiveKind),
    Draw(PrimitiveKind),
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

pub fn call_log() -> CallLog {
    let _ = env_logger::builder().is_test(true).try_init();
    Rc::new(RefCell::new(Vec::new()))
}

pub struct StageDouble {
    pub calls: CallLog,
}

impl ShaderStage for StageDouble {
    fn set_mat4(&mut self, name: &str, value: Matrix4<f32>) {
        self.calls
            .borrow_mut()
            .push(Call::Mat4(name.to_string(), value.into()));
    }

    fn set_vec4(&mut self, name: &str, value: Vector4<f32>) {
        self.calls
            .borrow_mut()
            .push(Call::Vec4(name.to_string(), value.into()));
    }

    fn set_vec3(&mut self, name: &str, value: Vector3<f32>) {
        self.calls
            .borrow_mut()
            .push(Call::Vec3(name.to_string(), value.into()));
    }

    fn set_vec2(&mut self, name: &str, value: Vector2<f32>) {
        self.calls
            .borrow_mut()
            .push(Call::Vec2(name.to_string(), value.into()));
    }

    fn set_float(&mut self, name: &str, value: f32) {
        self.calls
            .borrow_mut()
            .push(Call::Float(name.to_string(), value));
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        self.calls
            .borrow_mut()
            .push(Call::Bool(name.to_string(), value));
    }

    fn set_sampler(&mut self, name: &str, slot: u32) {
        self.calls
            .borrow_mut()
            .push(Call::Sampler(name.to_string(), slot));
    }
}

pub struct UnitsDouble {
    pub calls: CallLog,
    next_id: u32,
}

impl UnitsDouble {
    pub fn new(calls: CallLog) -> Self {
        Self { calls, next_id: 0 }
    }
}

impl TextureUnits for UnitsDouble {
    type Texture = u32;

    fn upload(&mut self, pixels: &image::RgbaImage, _label: &str) -> anyhow::Result<u32> {
        let id = self.next_id;
        self.next_id += 1;
        self.calls
            .borrow_mut()
            .push(Call::Upload(id, pixels.width(), pixels.height()));
        Ok(id)
    }

    fn bind(&mut self, slot: u32, texture: &u32) {
        self.calls.borrow_mut().push(Call::Bind(slot, *texture));
    }

    fn release(&mut self, texture: u32) {
        self.calls.borrow_mut().push(Call::Release(texture));
    }
}

pub struct MeshDouble {
    pub calls: CallLog,
}

impl MeshLibrary for MeshDouble {
    fn load(&mut self, kind: PrimitiveKind) {
        self.calls.borrow_mut().push(Call::Load(kind));
    }

    fn draw(&mut self, kind: PrimitiveKind) {
        self.calls.borrow_mut().push(Call::Draw(kind));
    }
}

/// Write a 2x2 RGB test image and return its path.
pub fn write_rgb_image(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("still-life-{}-{}.png", name, std::process::id()));
    let mut pixels = image::RgbImage::new(2, 2);
    pixels.put_pixel(0, 0, image::Rgb([255, 0, 0]));
    pixels.put_pixel(1, 0, image::Rgb([0, 255, 0]));
    pixels.put_pixel(0, 1, image::Rgb([0, 0, 255]));
    pixels.put_pixel(1, 1, image::Rgb([255, 255, 255]));
    pixels.save(&path).expect("failed to write test image");
    path
}

/// Write a 2x2 single-channel test image and return its path.
pub fn write_gray_image(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("still-life-{}-{}.png", name, std::process::id()));
    let pixels = image::GrayImage::new(2, 2);
    pixels.save(&path).expect("failed to write test image");
    path
}
