//! SCM file header.

use byteorder::{ByteOrder, LittleEndian};

use super::format::{HEADER_SIZE, SCM_MAGIC, SCM_VERSION};
use crate::source::Source;
use crate::util::{Error, Result};

/// Fixed-size header at the start of every SCM file.
///
/// All section locations are absolute byte offsets from the start of the
/// file. `num_triangle_indexes` counts u16 indices, three per triangle.
#[derive(Clone, Debug)]
pub struct ScmHeader {
    pub version: u32,
    pub bone_data_offset: u32,
    pub bone_count: u32,
    pub vertices_offset: u32,
    /// Reserved second vertex stream; unused by version 5 files.
    pub extra_vertices_offset: u32,
    pub num_vertices: u32,
    pub triangles_offset: u32,
    pub num_triangle_indexes: u32,
    pub info_string_offset: u32,
    pub info_string_length: u32,
}

impl ScmHeader {
    /// Parse and validate the header at the start of `source`.
    pub fn parse(source: &Source) -> Result<Self> {
        let raw = source.read_bytes(0, HEADER_SIZE)?;

        if &raw[0..4] != SCM_MAGIC {
            return Err(Error::BadMagic {
                expected: "MODL",
                found: [raw[0], raw[1], raw[2], raw[3]],
            });
        }

        let field = |i: usize| LittleEndian::read_u32(&raw[4 + i * 4..8 + i * 4]);
        let header = Self {
            version: field(0),
            bone_data_offset: field(1),
            bone_count: field(2),
            vertices_offset: field(3),
            extra_vertices_offset: field(4),
            num_vertices: field(5),
            triangles_offset: field(6),
            num_triangle_indexes: field(7),
            info_string_offset: field(8),
            info_string_length: field(9),
        };

        if header.version != SCM_VERSION {
            return Err(Error::UnsupportedVersion {
                found: header.version,
                supported: SCM_VERSION,
            });
        }

        Ok(header)
    }
}
