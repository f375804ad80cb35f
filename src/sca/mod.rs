//! SCA animation-clip format (magic `ANIM`).
//!
//! ## File structure
//!
//! ```text
//! +----------------------+
//! | Header (36 bytes)    |  magic "ANIM" + counts, duration, offsets
//! +----------------------+
//! | Bone name strings    |  NUL-terminated ASCII, back to back
//! +----------------------+
//! | Bone link table      |  i32 parent index per link
//! +----------------------+
//! | Initial pose         |  28 bytes per link
//! +----------------------+
//! | Frames               |  f32 time + u32 flags + pose, each
//! +----------------------+
//! ```
//!
//! A clip is skeleton-agnostic: it carries hierarchy and names only (no
//! geometry), enough to retarget onto a compatible model skeleton.

mod animation;
mod format;
mod header;
mod reader;

pub use animation::*;
pub use format::*;
pub use header::*;
