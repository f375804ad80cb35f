//! SCA file header.

use super::format::{FRAME_HEADER_SIZE, POSE_ENTRY_SIZE, SCA_MAGIC, SCA_VERSION};
use crate::source::Source;
use crate::util::{Error, Result};

/// Fixed-size header at the start of every SCA file.
#[derive(Clone, Debug)]
pub struct ScaHeader {
    pub version: u32,
    pub frames_num: u32,
    /// Clip duration in seconds.
    pub duration: f32,
    /// Number of bone links.
    pub bones_num: u32,
    pub bone_names_offset: u32,
    pub bone_links_offset: u32,
    /// Start of the initial pose; frames follow it contiguously.
    pub anim_offset: u32,
    /// Declared size of one stored frame (header plus pose) in bytes.
    pub frame_size: u32,
}

impl ScaHeader {
    /// Parse and validate the header at the start of `source`.
    pub fn parse(source: &Source) -> Result<Self> {
        let magic = source.read_bytes(0, 4)?;
        if magic[..] != SCA_MAGIC[..] {
            return Err(Error::BadMagic {
                expected: "ANIM",
                found: [magic[0], magic[1], magic[2], magic[3]],
            });
        }

        let header = Self {
            version: source.read_u32(4)?,
            frames_num: source.read_u32(8)?,
            duration: source.read_f32(12)?,
            bones_num: source.read_u32(16)?,
            bone_names_offset: source.read_u32(20)?,
            bone_links_offset: source.read_u32(24)?,
            anim_offset: source.read_u32(28)?,
            frame_size: source.read_u32(32)?,
        };

        if header.version != SCA_VERSION {
            return Err(Error::UnsupportedVersion {
                found: header.version,
                supported: SCA_VERSION,
            });
        }

        Ok(header)
    }

    /// Size in bytes of one pose block for this clip.
    pub fn pose_size(&self) -> usize {
        self.bones_num as usize * POSE_ENTRY_SIZE
    }

    /// Frame size implied by the bone-link count, to check against the
    /// declared `frame_size`.
    pub fn computed_frame_size(&self) -> usize {
        FRAME_HEADER_SIZE + self.pose_size()
    }
}
