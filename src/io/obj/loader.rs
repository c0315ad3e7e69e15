use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, bail};
use glam::Vec3;
use log::debug;

use crate::common::types::{Mesh, Triangle, VertexBuffers};

pub struct ObjLoader {}

impl ObjLoader {
    pub fn load_from_path(path: &Path) -> Result<Mesh, anyhow::Error> {
        let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
        ObjLoader::load(BufReader::new(file))
    }

    /// Reads a Wavefront OBJ into the transfer mesh. Faces may be polygons,
    /// they get fanned into triangles here so downstream only ever sees
    /// triangle lists. `usemtl` names become dense material indices in
    /// first-use order, mirroring the material slots they came from.
    ///
    /// OBJ indexes positions and normals independently while the engine
    /// wants a single index space, so vertices are welded on their
    /// (position, normal) reference pair.
    pub fn load<R: BufRead>(rdr: R) -> Result<Mesh, anyhow::Error> {
        let mut positions: Vec<Vec3> = Vec::new();
        let mut normals: Vec<Vec3> = Vec::new();

        let mut material_slots: HashMap<String, u32> = HashMap::new();
        let mut current_material = 0u32;

        let mut welded: HashMap<(usize, usize), u32> = HashMap::new();
        let mut buffers = VertexBuffers::default();
        let mut triangles: Vec<Triangle> = Vec::new();

        for (line_index, line) in rdr.lines().enumerate() {
            let line = line?;
            let line_number = line_index + 1;
            let mut tokens = line.split_whitespace();

            match tokens.next() {
                Some("v") => positions.push(ObjLoader::parse_vec3(&mut tokens, line_number)?),
                Some("vn") => normals.push(ObjLoader::parse_vec3(&mut tokens, line_number)?),
                Some("usemtl") => {
                    let name = tokens
                        .next()
                        .with_context(|| format!("usemtl without a material name in line {}", line_number))?;
                    let next_slot = material_slots.len() as u32;
                    current_material = *material_slots.entry(name.to_string()).or_insert(next_slot);
                }
                Some("f") => {
                    let mut face_indices = Vec::new();
                    for token in tokens {
                        let (position, normal) =
                            ObjLoader::parse_vertex_ref(token, positions.len(), normals.len(), line_number)?;

                        let index = match welded.entry((position, normal)) {
                            Entry::Occupied(entry) => *entry.get(),
                            Entry::Vacant(entry) => {
                                let index = buffers.position_buffer.len() as u32;
                                buffers.position_buffer.push(positions[position]);
                                buffers.normals_buffer.push(normals[normal]);
                                *entry.insert(index)
                            }
                        };
                        face_indices.push(index);
                    }

                    if face_indices.len() < 3 {
                        bail!("face with fewer than 3 vertices in line {}", line_number);
                    }

                    for k in 1..face_indices.len() - 1 {
                        triangles.push(Triangle {
                            indices: [face_indices[0], face_indices[k], face_indices[k + 1]],
                            material_index: current_material,
                        });
                    }
                }
                // comments, groups, smoothing markers, mtllib, vt, ...
                _ => (),
            }
        }

        debug!(
            "OBJ: {} positions, {} normals, {} welded vertices, {} triangles, {} named materials",
            positions.len(),
            normals.len(),
            buffers.position_buffer.len(),
            triangles.len(),
            material_slots.len()
        );

        Ok(Mesh {
            vertex_buffers: buffers,
            triangles,
        })
    }

    fn parse_vec3<'a>(tokens: &mut impl Iterator<Item = &'a str>, line_number: usize) -> Result<Vec3, anyhow::Error> {
        let mut components = [0.0f32; 3];
        for component in &mut components {
            *component = tokens
                .next()
                .with_context(|| format!("vector with fewer than 3 components in line {}", line_number))?
                .parse()
                .with_context(|| format!("unparseable vector component in line {}", line_number))?;
        }

        Ok(Vec3::from_array(components))
    }

    /// A face vertex is `v`, `v/vt`, `v//vn` or `v/vt/vn` with 1-based
    /// indices. The engine vertex layout requires a normal, so the forms
    /// without a normal reference are an input error rather than something
    /// to guess around.
    fn parse_vertex_ref(
        token: &str,
        position_count: usize,
        normal_count: usize,
        line_number: usize,
    ) -> Result<(usize, usize), anyhow::Error> {
        let mut parts = token.split('/');

        let position = ObjLoader::resolve_index(parts.next(), position_count, line_number)
            .with_context(|| format!("bad position reference '{}' in line {}", token, line_number))?;
        let _texcoord = parts.next(); // UVs are not part of the output format
        let normal = ObjLoader::resolve_index(parts.next(), normal_count, line_number)
            .with_context(|| format!("missing or bad normal reference '{}' in line {} (re-export with normals)", token, line_number))?;

        Ok((position, normal))
    }

    fn resolve_index(part: Option<&str>, count: usize, line_number: usize) -> Result<usize, anyhow::Error> {
        let raw: i64 = part.filter(|p| !p.is_empty()).context("missing index")?.parse()?;
        if raw < 0 {
            bail!("negative (relative) OBJ indices are not supported, found {} in line {}", raw, line_number);
        }

        let index = (raw as usize)
            .checked_sub(1)
            .with_context(|| format!("OBJ indices are 1-based, found 0 in line {}", line_number))?;
        if index >= count {
            bail!("index {} out of range in line {}, only {} elements", raw, line_number, count);
        }

        Ok(index)
    }
}
