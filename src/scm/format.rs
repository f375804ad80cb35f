//! SCM format constants.

/// Magic bytes at the start of an SCM file.
pub const SCM_MAGIC: &[u8; 4] = b"MODL";

/// The single supported SCM format version.
pub const SCM_VERSION: u32 = 5;

/// Size of the file header in bytes: magic plus ten u32 fields.
pub const HEADER_SIZE: usize = 44;

/// Size of one bone record in bytes: 16 + 3 + 4 floats, then 4 i32 fields
/// (name offset, parent index, two reserved).
pub const BONE_RECORD_SIZE: usize = 108;

/// Size of one vertex record in bytes: 16 floats plus 4 skin bytes.
pub const VERTEX_RECORD_SIZE: usize = 68;

/// Size of one triangle vertex index in bytes.
pub const TRIANGLE_INDEX_SIZE: usize = 2;

/// Skin slot value meaning "no bone attached".
pub const SKIN_UNUSED: u8 = 255;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magic() {
        assert_eq!(SCM_MAGIC, b"MODL");
        assert_eq!(SCM_MAGIC.len(), 4);
    }

    #[test]
    fn test_record_sizes() {
        // 16f matrix + 3f position + 4f rotation + 4i
        assert_eq!(BONE_RECORD_SIZE, 23 * 4 + 4 * 4);
        // 3f+3f+3f+3f position/normal/tangent/binormal + 2f+2f UVs + 4B skin
        assert_eq!(VERTEX_RECORD_SIZE, 16 * 4 + 4);
        // magic + 10 u32 fields
        assert_eq!(HEADER_SIZE, 4 + 10 * 4);
    }
}
