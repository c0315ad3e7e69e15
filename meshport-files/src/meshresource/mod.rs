/// Parses a `.meshresource` back into [`types::MeshResourceAsset`],
/// the way the engine loader reads it.
pub mod reader;
/// The resource model: interleaved vertex records, the index buffer, and
/// the submesh descriptors slicing it into per-material runs.
pub mod types;
/// Serializes a [`types::MeshResourceAsset`] in the exact engine layout.
pub mod writer;

#[cfg(test)]
mod tests;
