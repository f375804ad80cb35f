//! SCM skinned-model format (magic `MODL`).
//!
//! ## File structure
//!
//! ```text
//! +----------------------+
//! | Header (44 bytes)    |  magic "MODL" + 10 x u32
//! +----------------------+
//! | Bone name strings    |  NUL-terminated ASCII, addressed per record
//! +----------------------+
//! | Bone records         |  108 bytes each
//! +----------------------+
//! | Vertex records       |  68 bytes each
//! +----------------------+
//! | Triangle indices     |  u16 each, three per face
//! +----------------------+
//! | Info string          |  plain ASCII, length from header
//! +----------------------+
//! ```
//!
//! Section placement comes entirely from the header offsets; the reader
//! never assumes a particular order on disk.

mod format;
mod header;
mod model;
mod reader;

pub use format::*;
pub use header::*;
pub use model::*;
