//! SCA decoding.
//!
//! Bone links decode before any pose, since a pose block is one transform
//! per link in link order. The declared per-frame size is checked against
//! the size implied by the link count before a single pose byte is read.

use std::path::Path;

use tracing::{debug, warn};

use super::animation::{Animation, BoneLink, Frame, Pose};
use super::format::{FRAME_HEADER_SIZE, POSE_ENTRY_SIZE};
use super::header::ScaHeader;
use crate::skeleton::resolve_parents;
use crate::source::Source;
use crate::util::{Error, Result, Transform};

impl Animation {
    /// Decode the SCA clip at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = Source::open(path)?;
        debug!(path = %path.display(), "reading SCA animation");
        Self::read(&source)
    }

    /// Decode an SCA clip from an in-memory buffer.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        Self::read(&Source::from_bytes(bytes))
    }

    /// Decode an SCA clip from an open source.
    pub fn read(source: &Source) -> Result<Self> {
        let header = ScaHeader::parse(source)?;
        let bone_links = read_bone_links(&header, source)?;

        if header.frame_size as usize != header.computed_frame_size() {
            return Err(Error::TruncatedInput(format!(
                "declared frame size {} does not match frame header plus pose block size {}",
                header.frame_size,
                header.computed_frame_size()
            )));
        }

        let initial_pose = read_pose(header.anim_offset as u64, bone_links.len(), source)?;
        let frames = read_frames(&header, source)?;

        Ok(Animation {
            duration: header.duration,
            bone_links,
            initial_pose,
            frames,
        })
    }
}

/// Read the bone links in two passes: names back to back at the name-table
/// offset, then the parent-index table, resolved over the full array.
fn read_bone_links(header: &ScaHeader, source: &Source) -> Result<Vec<BoneLink>> {
    let count = header.bones_num as usize;

    // `bones_num` sizes every allocation below, so the link table range is
    // validated before the first one.
    let links_offset = header.bone_links_offset as u64;
    source.check_range(links_offset, count as u64 * 4)?;

    let mut names = Vec::with_capacity(count);
    let mut offset = header.bone_names_offset as u64;
    for _ in 0..count {
        let name = source.read_cstring(offset)?;
        offset += name.len() as u64 + 1;
        names.push(name);
    }

    let mut raw_parents = Vec::with_capacity(count);
    for i in 0..count as u64 {
        raw_parents.push(source.read_i32(links_offset + i * 4)?);
    }
    let parents = resolve_parents(&raw_parents)?;

    debug!(count, "read bone links");
    Ok(names
        .into_iter()
        .zip(parents)
        .enumerate()
        .map(|(index, (name, parent))| BoneLink {
            name,
            index,
            parent,
        })
        .collect())
}

/// Read one pose block: a transform per bone link, in link order.
fn read_pose(offset: u64, link_count: usize, source: &Source) -> Result<Pose> {
    let raw = source.read_bytes(offset, link_count * POSE_ENTRY_SIZE)?;
    let transforms = (0..link_count)
        .map(|i| Transform::from_wire(&raw[i * POSE_ENTRY_SIZE..(i + 1) * POSE_ENTRY_SIZE]))
        .collect();
    Ok(Pose { transforms })
}

/// Read the frame sequence laid out contiguously after the initial pose.
fn read_frames(header: &ScaHeader, source: &Source) -> Result<Vec<Frame>> {
    let link_count = header.bones_num as usize;
    let start = header.anim_offset as u64 + header.pose_size() as u64;

    // The whole frame sequence must fit before anything is allocated.
    let total = header.frames_num as u64 * header.frame_size as u64;
    source.check_range(start, total)?;

    let mut frames = Vec::with_capacity(header.frames_num as usize);
    let mut last_time = f32::NEG_INFINITY;
    for i in 0..header.frames_num as u64 {
        let at = start + i * header.frame_size as u64;
        let time = source.read_f32(at)?;
        let flags = source.read_u32(at + 4)?;
        if time < last_time {
            warn!(frame = i, time, "frame time decreases");
        }
        last_time = time;

        let pose = read_pose(at + FRAME_HEADER_SIZE as u64, link_count, source)?;
        frames.push(Frame { time, flags, pose });
    }

    debug!(count = frames.len(), "read frames");
    Ok(frames)
}
