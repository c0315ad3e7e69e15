/// Blender and the engine disagree about which axis is up and which is
/// forward, so every vector crossing the boundary goes through this module.
pub mod coordinate_systems;
/// Basic types (e.g. mesh) to abstract away from both the source file format
/// and the resource encoding.
pub mod types;
