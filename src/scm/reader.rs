//! SCM decoding.
//!
//! The header supplies every offset and count; the remaining passes run in
//! fixed dependency order because later sections reference earlier ones by
//! index: bones, then vertices (skinned to bones), then triangles
//! (referencing vertices), then the info string.

use std::path::Path;

use byteorder::{ByteOrder, LittleEndian};
use smallvec::SmallVec;
use tracing::{debug, warn};

use super::format::{BONE_RECORD_SIZE, SKIN_UNUSED, TRIANGLE_INDEX_SIZE, VERTEX_RECORD_SIZE};
use super::header::ScmHeader;
use super::model::{Bone, Model, Triangle, Vertex};
use crate::skeleton::resolve_parents;
use crate::source::Source;
use crate::util::{read_mat4_rows, read_quat_wxyz, read_vec2, read_vec3};
use crate::util::{Error, Result, Transform};

impl Model {
    /// Decode the SCM model at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = Source::open(path)?;
        debug!(path = %path.display(), "reading SCM model");
        let mut model = Self::read(&source)?;
        model.name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(model)
    }

    /// Decode an SCM model from an in-memory buffer.
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        Self::read(&Source::from_bytes(bytes))
    }

    /// Decode an SCM model from an open source.
    pub fn read(source: &Source) -> Result<Self> {
        let header = ScmHeader::parse(source)?;
        let bones = read_bones(&header, source)?;
        let vertices = read_vertices(&header, &bones, source)?;
        let triangles = read_triangles(&header, &vertices, source)?;
        let info = read_info(&header, source)?;
        Ok(Model {
            name: String::new(),
            bones,
            vertices,
            triangles,
            info,
        })
    }
}

/// Read the bone records, then resolve parent links over the full array.
///
/// Names are not stored in the records themselves; each record carries the
/// absolute offset of its NUL-terminated name.
fn read_bones(header: &ScmHeader, source: &Source) -> Result<Vec<Bone>> {
    let count = header.bone_count as usize;
    let raw = source.read_bytes(header.bone_data_offset as u64, count * BONE_RECORD_SIZE)?;

    let mut bones = Vec::with_capacity(count);
    let mut raw_parents = Vec::with_capacity(count);
    for index in 0..count {
        let record = &raw[index * BONE_RECORD_SIZE..(index + 1) * BONE_RECORD_SIZE];
        let inverse_rest_pose = read_mat4_rows(&record[0..64]);
        let transform = Transform {
            position: read_vec3(&record[64..76]),
            rotation: read_quat_wxyz(&record[76..92]),
        };
        let name_offset = LittleEndian::read_u32(&record[92..96]);
        let parent = LittleEndian::read_i32(&record[96..100]);
        // record[100..108] holds two reserved i32 fields

        let name = source.read_cstring(name_offset as u64)?;
        debug!(bone = %name, parent, "read bone");
        raw_parents.push(parent);
        bones.push(Bone {
            name,
            index,
            parent: None,
            inverse_rest_pose,
            transform,
        });
    }

    for (bone, parent) in bones.iter_mut().zip(resolve_parents(&raw_parents)?) {
        bone.parent = parent;
    }

    debug!(count, "read bone hierarchy");
    Ok(bones)
}

/// Read the vertex records and resolve their skin slots against the bones.
///
/// A slot of 255 is unused; any other out-of-range value is skipped rather
/// than treated as fatal, since upstream tools emit sparse skinning data.
fn read_vertices(header: &ScmHeader, bones: &[Bone], source: &Source) -> Result<Vec<Vertex>> {
    let count = header.num_vertices as usize;
    let raw = source.read_bytes(header.vertices_offset as u64, count * VERTEX_RECORD_SIZE)?;

    let mut vertices = Vec::with_capacity(count);
    for index in 0..count {
        let record = &raw[index * VERTEX_RECORD_SIZE..(index + 1) * VERTEX_RECORD_SIZE];
        let skin = [record[64], record[65], record[66], record[67]];

        let mut resolved = SmallVec::new();
        for &slot in &skin {
            if slot == SKIN_UNUSED {
                continue;
            }
            if (slot as usize) < bones.len() {
                resolved.push(slot as usize);
            } else {
                warn!(vertex = index, bone = slot, "skin index out of range, skipping");
            }
        }

        vertices.push(Vertex {
            index,
            position: read_vec3(&record[0..12]),
            normal: read_vec3(&record[12..24]),
            tangent: read_vec3(&record[24..36]),
            binormal: read_vec3(&record[36..48]),
            uv: [read_vec2(&record[48..56]), read_vec2(&record[56..64])],
            skin,
            bones: resolved,
        });
    }

    debug!(count, "read vertices");
    Ok(vertices)
}

/// Read the triangle index triples and validate them against the vertices.
fn read_triangles(
    header: &ScmHeader,
    vertices: &[Vertex],
    source: &Source,
) -> Result<Vec<Triangle>> {
    let index_count = header.num_triangle_indexes as usize;
    if index_count % 3 != 0 {
        return Err(Error::IncompleteTriangle(format!(
            "index count {index_count} is not a multiple of 3"
        )));
    }

    let base = header.triangles_offset as u64;
    source.check_range(base, (index_count * TRIANGLE_INDEX_SIZE) as u64)?;

    let mut triangles = Vec::with_capacity(index_count / 3);
    for t in 0..index_count / 3 {
        let mut indices = [0u16; 3];
        for (corner, slot) in indices.iter_mut().enumerate() {
            let at = ((t * 3 + corner) * TRIANGLE_INDEX_SIZE) as u64;
            let index = source.read_u16(base + at)?;
            if index as usize >= vertices.len() {
                return Err(Error::IncompleteTriangle(format!(
                    "triangle {t} references vertex {index}, but only {} vertices exist",
                    vertices.len()
                )));
            }
            *slot = index;
        }
        triangles.push(Triangle { indices });
    }

    debug!(count = triangles.len(), "read triangles");
    Ok(triangles)
}

/// Read the fixed-length info blob, strictly ASCII.
fn read_info(header: &ScmHeader, source: &Source) -> Result<String> {
    let offset = header.info_string_offset as u64;
    let raw = source.read_bytes(offset, header.info_string_length as usize)?;
    for (i, &byte) in raw.iter().enumerate() {
        if !byte.is_ascii() {
            return Err(Error::Encoding {
                offset: offset + i as u64,
                byte,
            });
        }
    }
    Ok(raw.iter().map(|&b| b as char).collect())
}
