//! Decoded SCM model data.
//!
//! Cross-references between bones, vertices, and triangles are stored as
//! integer indices into the owning arrays and resolved through lookup
//! methods, so the decoded graph stays acyclic by construction. Every
//! container is a plain owned value; nothing is mutated after decoding.

use smallvec::SmallVec;

use crate::util::{Mat4, Transform, Vec2, Vec3};

/// A node of the skeleton hierarchy.
#[derive(Clone, Debug)]
pub struct Bone {
    pub name: String,
    /// Position of this bone in [`Model::bones`].
    pub index: usize,
    /// Index of the parent bone, `None` for roots.
    pub parent: Option<usize>,
    /// Inverse of the bone's bind-time world transform (maps mesh space
    /// into bone-local space for skinning).
    pub inverse_rest_pose: Mat4,
    /// Transform relative to the parent bone.
    pub transform: Transform,
}

/// One mesh vertex: position frame, up to two UV channels, up to four
/// bone skins.
#[derive(Clone, Debug)]
pub struct Vertex {
    /// Position of this vertex in [`Model::vertices`].
    pub index: usize,
    pub position: Vec3,
    pub normal: Vec3,
    pub tangent: Vec3,
    pub binormal: Vec3,
    pub uv: [Vec2; 2],
    /// Raw skin bytes exactly as stored; 255 marks an unused slot.
    pub skin: [u8; 4],
    /// Resolved bone indices. Unused slots and out-of-range skin values
    /// do not appear here.
    pub bones: SmallVec<[usize; 4]>,
}

impl Vertex {
    /// Look up the bones this vertex is skinned to.
    pub fn skinned<'m>(&self, bones: &'m [Bone]) -> SmallVec<[&'m Bone; 4]> {
        self.bones.iter().map(|&i| &bones[i]).collect()
    }
}

/// A single face: three indices into [`Model::vertices`].
///
/// Winding order and vertex identity are preserved exactly as stored;
/// smooth-shaded faces share vertices with their neighbours while flat
/// shading uses split vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub indices: [u16; 3],
}

impl Triangle {
    /// Look up the three vertices this face references.
    ///
    /// Indices are validated against the vertex array at decode time.
    pub fn vertices<'m>(&self, vertices: &'m [Vertex]) -> [&'m Vertex; 3] {
        [
            &vertices[self.indices[0] as usize],
            &vertices[self.indices[1] as usize],
            &vertices[self.indices[2] as usize],
        ]
    }
}

/// A decoded SCM model: skeleton, skinned mesh, and free-text info.
#[derive(Clone, Debug, Default)]
pub struct Model {
    /// Model name; the format stores none, so this is taken from the file
    /// stem when opened from a path and empty otherwise.
    pub name: String,
    pub bones: Vec<Bone>,
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
    /// Free-text blob embedded by the exporter.
    pub info: String,
}

impl Model {
    /// Look up a bone's parent.
    pub fn bone_parent(&self, bone: &Bone) -> Option<&Bone> {
        bone.parent.map(|i| &self.bones[i])
    }
}
