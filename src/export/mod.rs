/// Turns a host-side [`crate::common::types::Mesh`] into an engine
/// `.meshresource`: axis conversion, per-material index grouping, and the
/// staged file write.
pub mod exporter;
