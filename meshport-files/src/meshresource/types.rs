use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::ResourceError;
use crate::common::reader::Parseable;
use crate::common::types::C3Vector;

/// A fully assembled mesh resource, ready to be serialized or just parsed
/// back from disk. Indices reference the vertex list; the submesh
/// descriptors slice the index list into one run per material.
///
/// On disk this is three length-prefixed blocks (vertices, indices,
/// submeshes), little-endian and unpadded. There is deliberately no magic
/// value or version field: the engine loader starts reading counts at
/// offset 0, and both sides would have to grow a header together.
#[derive(Debug, Clone)]
pub struct MeshResourceAsset {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
    pub submeshes: Vec<SubMesh>,
}

/// Interleaved vertex record: 6 f32 on disk, position first.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MeshVertex {
    pub position: C3Vector,
    pub normal: C3Vector,
}

impl Parseable<MeshVertex> for MeshVertex {
    fn parse<R: Read>(rdr: &mut R) -> Result<MeshVertex, ResourceError> {
        Ok(MeshVertex {
            position: C3Vector::parse(rdr)?,
            normal: C3Vector::parse(rdr)?,
        })
    }
}

/// One draw-call worth of indices. The owning material is not stored in the
/// file; the engine maps submeshes to materials by position.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SubMesh {
    pub index_start: u32,
    pub index_count: u32,
}

impl Parseable<SubMesh> for SubMesh {
    fn parse<R: Read>(rdr: &mut R) -> Result<SubMesh, ResourceError> {
        Ok(SubMesh {
            index_start: rdr.read_u32::<LittleEndian>()?,
            index_count: rdr.read_u32::<LittleEndian>()?,
        })
    }
}
