//! Math type re-exports and field readers for the on-disk layouts.
//!
//! Both formats store vectors as consecutive little-endian f32, quaternions
//! in w,x,y,z order, and matrices as 16 row-major floats.

// Re-export glam types
pub use glam::{Mat4, Quat, Vec2, Vec3};

use byteorder::{ByteOrder, LittleEndian};

/// A 3D transform without scale: position plus rotation quaternion.
///
/// Wire form is 28 bytes: 3 x f32 position followed by the quaternion
/// stored w,x,y,z.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Decode from the 28-byte wire form.
    pub fn from_wire(bytes: &[u8]) -> Self {
        Self {
            position: read_vec3(&bytes[0..12]),
            rotation: read_quat_wxyz(&bytes[12..28]),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Read two little-endian f32 as a [`Vec2`].
pub fn read_vec2(bytes: &[u8]) -> Vec2 {
    Vec2::new(
        LittleEndian::read_f32(&bytes[0..4]),
        LittleEndian::read_f32(&bytes[4..8]),
    )
}

/// Read three little-endian f32 as a [`Vec3`].
pub fn read_vec3(bytes: &[u8]) -> Vec3 {
    Vec3::new(
        LittleEndian::read_f32(&bytes[0..4]),
        LittleEndian::read_f32(&bytes[4..8]),
        LittleEndian::read_f32(&bytes[8..12]),
    )
}

/// Read a quaternion stored in w,x,y,z order.
pub fn read_quat_wxyz(bytes: &[u8]) -> Quat {
    let w = LittleEndian::read_f32(&bytes[0..4]);
    let x = LittleEndian::read_f32(&bytes[4..8]);
    let y = LittleEndian::read_f32(&bytes[8..12]);
    let z = LittleEndian::read_f32(&bytes[12..16]);
    Quat::from_xyzw(x, y, z, w)
}

/// Read a 4x4 matrix stored as 16 row-major floats.
pub fn read_mat4_rows(bytes: &[u8]) -> Mat4 {
    let mut m = [0.0f32; 16];
    LittleEndian::read_f32_into(&bytes[0..64], &mut m);
    // from_cols_array expects column-major
    Mat4::from_cols_array(&m).transpose()
}
