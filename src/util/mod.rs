//! Fundamental types shared by both format readers:
//! - [`Error`] / [`Result`] - Error handling
//! - [`Transform`] and math type re-exports from glam
//! - Little-endian wire readers for record fields

mod error;
mod math;

pub use error::*;
pub use math::*;
