use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use itertools::Itertools;
use log::{debug, info, warn};

use meshport_files::common::types::C3Vector;
use meshport_files::meshresource::types::{MeshResourceAsset, MeshVertex, SubMesh};
use meshport_files::meshresource::writer::MeshResourceWriter;

use crate::common::coordinate_systems::blender_to_engine;
use crate::common::types::Mesh;

/// The options the exporter recognizes. Only `destination` influences the
/// written bytes; `direct_write` skips the staging file and writes the
/// destination in place.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub destination: PathBuf,
    pub direct_write: bool,
}

pub struct MeshExporter {}

impl MeshExporter {
    /// Converts and writes in one go. All-or-nothing: by default the bytes
    /// are staged into a `.tmp` sibling and renamed over the destination
    /// only once fully written, so a failing export never leaves a
    /// truncated file where the engine would pick it up.
    pub fn export(mesh: &Mesh, settings: &ExportSettings) -> Result<(), anyhow::Error> {
        let asset = MeshExporter::convert(mesh)?;
        info!(
            "Writing {} vertices, {} indices, {} submeshes to {}",
            asset.vertices.len(),
            asset.indices.len(),
            asset.submeshes.len(),
            settings.destination.display()
        );

        if settings.direct_write {
            return MeshExporter::write_to_path(&asset, &settings.destination);
        }

        let staging = MeshExporter::staging_path(&settings.destination);
        if let Err(error) = MeshExporter::write_to_path(&asset, &staging) {
            let _ = fs::remove_file(&staging);
            return Err(error);
        }

        fs::rename(&staging, &settings.destination)
            .with_context(|| format!("failed to move {} into place", staging.display()))
    }

    /// The pure half of the pipeline: maps every position and normal into
    /// engine space and regroups the triangle indices into one contiguous
    /// run per material.
    pub fn convert(mesh: &Mesh) -> Result<MeshResourceAsset, anyhow::Error> {
        let buffers = &mesh.vertex_buffers;
        if buffers.position_buffer.len() != buffers.normals_buffer.len() {
            bail!(
                "mesh has {} positions but {} normals",
                buffers.position_buffer.len(),
                buffers.normals_buffer.len()
            );
        }

        for triangle in &mesh.triangles {
            for &index in &triangle.indices {
                if index as usize >= buffers.position_buffer.len() {
                    bail!(
                        "triangle references vertex {} but the mesh only has {}",
                        index,
                        buffers.position_buffer.len()
                    );
                }
            }
        }

        if mesh.triangles.is_empty() {
            warn!("Exporting a mesh without triangles");
        }

        let vertices = buffers
            .position_buffer
            .iter()
            .zip(&buffers.normals_buffer)
            .map(|(&position, &normal)| {
                let position = blender_to_engine(position);
                let normal = blender_to_engine(normal);
                MeshVertex {
                    position: C3Vector {
                        x: position.x,
                        y: position.y,
                        z: position.z,
                    },
                    normal: C3Vector {
                        x: normal.x,
                        y: normal.y,
                        z: normal.z,
                    },
                }
            })
            .collect_vec();

        // Stable grouping: triangles keep their relative order within a
        // material, while the map key order fixes the submesh order to
        // ascending material index, independent of the order materials
        // first appear in.
        let mut groups: BTreeMap<u32, Vec<u32>> = BTreeMap::new();
        for triangle in &mesh.triangles {
            groups
                .entry(triangle.material_index)
                .or_default()
                .extend_from_slice(&triangle.indices);
        }

        let mut indices = Vec::with_capacity(3 * mesh.triangles.len());
        let mut submeshes = Vec::with_capacity(groups.len());
        let mut index_start = 0u32;
        for (material_index, group) in &groups {
            debug!(
                "Material {}: {} indices starting at {}",
                material_index,
                group.len(),
                index_start
            );
            submeshes.push(SubMesh {
                index_start,
                index_count: group.len() as u32,
            });
            index_start += group.len() as u32;
            indices.extend_from_slice(group);
        }

        Ok(MeshResourceAsset {
            vertices,
            indices,
            submeshes,
        })
    }

    fn staging_path(destination: &Path) -> PathBuf {
        let mut staging = destination.as_os_str().to_os_string();
        staging.push(".tmp");
        PathBuf::from(staging)
    }

    fn write_to_path(asset: &MeshResourceAsset, path: &Path) -> Result<(), anyhow::Error> {
        let file = File::create(path).with_context(|| format!("cannot create {}", path.display()))?;
        let mut wtr = BufWriter::new(file);
        MeshResourceWriter::write(asset, &mut wtr)?;
        // BufWriter's Drop swallows flush errors.
        wtr.flush()?;
        Ok(())
    }
}
