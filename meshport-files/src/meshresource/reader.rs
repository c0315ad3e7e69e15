use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::ResourceError;
use crate::common::reader::Parseable;
use crate::meshresource::types::{MeshResourceAsset, MeshVertex, SubMesh};

pub struct MeshResourceReader {}

impl MeshResourceReader {
    /// Reads an asset back the way the engine does: counts first, then the
    /// block that count describes. Additionally verifies that the submesh
    /// descriptors tile the index buffer without gaps or overlap.
    pub fn parse<R: Read>(rdr: &mut R) -> Result<MeshResourceAsset, ResourceError> {
        let vertices = MeshResourceReader::read_counted_block::<MeshVertex, R>(rdr)?;
        let indices = MeshResourceReader::read_counted_block::<u32, R>(rdr)?;
        let submeshes = MeshResourceReader::read_counted_block::<SubMesh, R>(rdr)?;

        let mut expected_start = 0u64;
        for submesh in &submeshes {
            if submesh.index_start as u64 != expected_start {
                return Err(ResourceError::FormatError {
                    reason: "submesh descriptors don't tile the index buffer",
                });
            }
            expected_start += submesh.index_count as u64;
        }
        if expected_start != indices.len() as u64 {
            return Err(ResourceError::FormatError {
                reason: "submesh descriptors don't cover the whole index buffer",
            });
        }

        Ok(MeshResourceAsset {
            vertices,
            indices,
            submeshes,
        })
    }

    fn read_counted_block<T: Parseable<T>, R: Read>(rdr: &mut R) -> Result<Vec<T>, ResourceError> {
        let count = rdr.read_u32::<LittleEndian>()? as usize;
        let mut list: Vec<T> = Vec::with_capacity(count);
        for _ in 0..count {
            list.push(T::parse(rdr)?);
        }

        Ok(list)
    }
}
