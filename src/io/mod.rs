/// Wavefront OBJ source glue. The exporter itself only ever sees
/// [`crate::common::types::Mesh`], so everything OBJ specific stays in
/// here.
pub mod obj;
