//! Primitive mesh kinds and the mesh-library seam.
//!
//! The scene is built entirely from six primitive shapes. Generating their
//! vertex and index buffers is the mesh library's job, behind
//! [`MeshLibrary`]: one idempotent load per kind at setup, then a draw call
//! per entry that consumes whatever uniform and texture state is currently
//! bound.

/// The primitive shapes a draw entry can reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Plane,
    Box,
    Cylinder,
    Torus,
    Prism,
    Cone,
}

/// All primitive kinds, in warm-up order.
pub const ALL_KINDS: [PrimitiveKind; 6] = [
    PrimitiveKind::Plane,
    PrimitiveKind::Box,
    PrimitiveKind::Cylinder,
    PrimitiveKind::Torus,
    PrimitiveKind::Prism,
    PrimitiveKind::Cone,
];

/// Builds and draws primitive mesh buffers.
///
/// `load` is called once per kind during setup, no matter how often the kind
/// is drawn afterwards. `draw` issues one draw call for the given kind using
/// the currently bound shader state.
pub trait MeshLibrary {
    fn load(&mut self, kind: PrimitiveKind);
    fn draw(&mut self, kind: PrimitiveKind);
}
