//! Model matrix composition from independent transform parameters.
//!
//! Every draw entry carries its transform as five independent values: a
//! per-axis scale, three rotation angles in degrees and a translation. The
//! matrix is recomputed on every draw call rather than stored, and the
//! composition order is fixed: translate, then Z-, Y- and X-rotation, then
//! scale (applied right to left). Matrix multiplication does not commute, so
//! this order must not change or the rendered scene shifts.

use cgmath::{Deg, Matrix4, Vector3};

/// Scale, per-axis rotation and translation for a single draw entry.
///
/// Rotation angles are in degrees about the X, Y and Z axes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub scale: Vector3<f32>,
    pub rotation: Vector3<f32>,
    pub translation: Vector3<f32>,
}

impl Transform {
    /// The composed 4x4 model matrix for this transform.
    pub fn matrix(&self) -> Matrix4<f32> {
        compose(
            self.scale,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
            self.translation,
        )
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: Vector3::new(1.0, 1.0, 1.0),
            rotation: Vector3::new(0.0, 0.0, 0.0),
            translation: Vector3::new(0.0, 0.0, 0.0),
        }
    }
}

/// Compose a model matrix as `T * Rz * Ry * Rx * S`.
///
/// Angles are degrees. Pure and deterministic: identical inputs yield
/// bit-identical matrices. Non-finite inputs produce a garbage matrix but
/// never panic.
pub fn compose(
    scale: Vector3<f32>,
    x_rotation_deg: f32,
    y_rotation_deg: f32,
    z_rotation_deg: f32,
    translation: Vector3<f32>,
) -> Matrix4<f32> {
    let scale = Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z);
    let rotation_x = Matrix4::from_angle_x(Deg(x_rotation_deg));
    let rotation_y = Matrix4::from_angle_y(Deg(y_rotation_deg));
    let rotation_z = Matrix4::from_angle_z(Deg(z_rotation_deg));
    let translation = Matrix4::from_translation(translation);

    translation * rotation_z * rotation_y * rotation_x * scale
}
