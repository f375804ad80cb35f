//! SCA format constants.

/// Magic bytes at the start of an SCA file.
pub const SCA_MAGIC: &[u8; 4] = b"ANIM";

/// The single supported SCA format version.
pub const SCA_VERSION: u32 = 5;

/// Size of the file header in bytes.
pub const HEADER_SIZE: usize = 36;

/// Bytes per bone-link transform in a pose block: 3 + 4 floats.
pub const POSE_ENTRY_SIZE: usize = 28;

/// Bytes of frame header preceding each stored pose: f32 time + u32 flags.
pub const FRAME_HEADER_SIZE: usize = 8;
