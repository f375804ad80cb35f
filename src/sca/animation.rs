//! Decoded SCA animation data.

use crate::util::Transform;

/// Hierarchy-only stand-in for a bone.
///
/// A clip carries no geometry; names plus parent links are enough to
/// retarget it onto a compatible model skeleton.
#[derive(Clone, Debug)]
pub struct BoneLink {
    pub name: String,
    /// Position of this link in [`Animation::bone_links`].
    pub index: usize,
    /// Index of the parent link, `None` for roots.
    pub parent: Option<usize>,
}

/// A snapshot of every bone link's transform at one instant.
///
/// Transforms are stored in bone-link order, one per link, no omissions.
#[derive(Clone, Debug, Default)]
pub struct Pose {
    pub transforms: Vec<Transform>,
}

impl Pose {
    /// Transform of the bone link at `link_index`, if in range.
    pub fn transform(&self, link_index: usize) -> Option<&Transform> {
        self.transforms.get(link_index)
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

/// A timestamped pose.
#[derive(Clone, Debug)]
pub struct Frame {
    /// Frame time in seconds, non-decreasing across the clip.
    pub time: f32,
    /// Opaque bitfield, passed through exactly as stored.
    pub flags: u32,
    pub pose: Pose,
}

/// A decoded SCA animation clip.
#[derive(Clone, Debug, Default)]
pub struct Animation {
    /// Clip duration in seconds.
    pub duration: f32,
    pub bone_links: Vec<BoneLink>,
    /// The pose stored once before the frame sequence.
    pub initial_pose: Pose,
    pub frames: Vec<Frame>,
}

impl Animation {
    /// Look up a bone link's parent.
    pub fn link_parent(&self, link: &BoneLink) -> Option<&BoneLink> {
        link.parent.map(|i| &self.bone_links[i])
    }
}
