use std::fmt::{Debug, Formatter};

use glam::Vec3;

/// A triangulated mesh as handed over by the source-file glue, still in the
/// modeling tool's axis convention. Positions and normals are parallel
/// arrays; triangles reference them by index.
#[derive(Clone)]
pub struct Mesh {
    pub vertex_buffers: VertexBuffers,
    pub triangles: Vec<Triangle>,
}

impl Debug for Mesh {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ vertex_buffers: {:?}, ", self.vertex_buffers)?;
        write!(f, "triangles: [{}] }}", self.triangles.len())
    }
}

#[derive(Clone, Default)]
pub struct VertexBuffers {
    pub position_buffer: Vec<Vec3>,
    pub normals_buffer: Vec<Vec3>,
}

impl Debug for VertexBuffers {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{ position_buffer: [{}], ", self.position_buffer.len())?;
        write!(f, "normals_buffer: [{}] }}", self.normals_buffer.len())
    }
}

#[derive(Debug, Copy, Clone)]
pub struct Triangle {
    pub indices: [u32; 3],
    pub material_index: u32,
}
