use std::io::Write;

use byteorder::{LittleEndian, WriteBytesExt};

use crate::ResourceError;
use crate::common::writer::Writable;
use crate::meshresource::types::{MeshResourceAsset, MeshVertex, SubMesh};

pub struct MeshResourceWriter {}

impl MeshResourceWriter {
    /// Serializes the asset in engine order: vertex block, index block,
    /// submesh block, each preceded by its u32 count. Purely sequential,
    /// no seeking; fails only when the sink does.
    pub fn write<W: Write>(asset: &MeshResourceAsset, wtr: &mut W) -> Result<(), ResourceError> {
        wtr.write_u32::<LittleEndian>(asset.vertices.len() as u32)?;
        for vertex in &asset.vertices {
            vertex.write(wtr)?;
        }

        wtr.write_u32::<LittleEndian>(asset.indices.len() as u32)?;
        for index in &asset.indices {
            index.write(wtr)?;
        }

        wtr.write_u32::<LittleEndian>(asset.submeshes.len() as u32)?;
        for submesh in &asset.submeshes {
            submesh.write(wtr)?;
        }

        Ok(())
    }
}

impl Writable for MeshVertex {
    fn write<W: Write>(&self, wtr: &mut W) -> Result<(), ResourceError> {
        self.position.write(wtr)?;
        self.normal.write(wtr)
    }
}

impl Writable for SubMesh {
    fn write<W: Write>(&self, wtr: &mut W) -> Result<(), ResourceError> {
        wtr.write_u32::<LittleEndian>(self.index_start)?;
        wtr.write_u32::<LittleEndian>(self.index_count)?;
        Ok(())
    }
}
