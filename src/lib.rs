//! # supcom-io
//!
//! Reader for the Supreme Commander 3D asset formats: skinned models
//! (`.scm`, magic `MODL`) and skeletal animation clips (`.sca`, magic
//! `ANIM`).
//!
//! Both formats are fixed-layout little-endian binaries: a header carries
//! counts and absolute section offsets, and later sections reference
//! earlier ones by integer index (bone to parent, vertex to bone, triangle
//! to vertex, frame to pose). Decoding validates every cross-reference and
//! returns a fully resolved, immutable aggregate or fails fast on the first
//! structural violation. The reader is pinned to format version 5 of both
//! formats; other versions are rejected, not adapted.
//!
//! ## Modules
//!
//! - [`util`] - Errors, math types, wire readers
//! - [`source`] - Positional (seek + read) byte source
//! - [`skeleton`] - Parent-link resolution shared by both formats
//! - [`scm`] - Model format (`MODL`)
//! - [`sca`] - Animation format (`ANIM`)
//!
//! ## Example
//!
//! ```ignore
//! use supcom_io::prelude::*;
//!
//! let model = Model::open("units/uel0201.scm")?;
//! for bone in &model.bones {
//!     let parent = model.bone_parent(bone).map(|p| p.name.as_str());
//!     println!("{} -> {}", bone.name, parent.unwrap_or("<root>"));
//! }
//!
//! let clip = Animation::open("units/uel0201_aattack.sca")?;
//! println!("{} frames over {}s", clip.frames.len(), clip.duration);
//! ```

pub mod sca;
pub mod scm;
pub mod skeleton;
pub mod source;
pub mod util;

// Re-export commonly used types
pub use sca::Animation;
pub use scm::Model;
pub use source::Source;
pub use util::{Error, Result, Transform};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::sca::{Animation, BoneLink, Frame, Pose};
    pub use crate::scm::{Bone, Model, Triangle, Vertex};
    pub use crate::source::Source;
    pub use crate::util::{Error, Result, Transform};
}
