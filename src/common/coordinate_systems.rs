use glam::Vec3;

/// Blender is RH, Up: +Z, Forward: +Y, Right: +X.
/// The engine wants Up: +Y, Forward: -Z, Right: +X.
/// An axis permutation plus one sign flip, so lengths (and unit normals)
/// survive untouched.
#[inline]
pub fn blender_to_engine(source: Vec3) -> Vec3 {
    Vec3::new(source.x, source.z, -source.y)
}
