use std::io::Cursor;

use crate::ResourceError;
use crate::common::types::C3Vector;
use crate::meshresource::reader::MeshResourceReader;
use crate::meshresource::types::{MeshResourceAsset, MeshVertex, SubMesh};
use crate::meshresource::writer::MeshResourceWriter;

fn vertex(position: [f32; 3], normal: [f32; 3]) -> MeshVertex {
    MeshVertex {
        position: C3Vector {
            x: position[0],
            y: position[1],
            z: position[2],
        },
        normal: C3Vector {
            x: normal[0],
            y: normal[1],
            z: normal[2],
        },
    }
}

fn single_triangle_asset() -> MeshResourceAsset {
    MeshResourceAsset {
        vertices: vec![
            vertex([0.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            vertex([1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            vertex([0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
        ],
        indices: vec![0, 1, 2],
        submeshes: vec![SubMesh {
            index_start: 0,
            index_count: 3,
        }],
    }
}

#[test]
fn empty_asset_is_twelve_zero_bytes() -> Result<(), anyhow::Error> {
    let asset = MeshResourceAsset {
        vertices: vec![],
        indices: vec![],
        submeshes: vec![],
    };

    let mut buf = Vec::new();
    MeshResourceWriter::write(&asset, &mut buf)?;

    assert_eq!(buf, vec![0u8; 12]);
    Ok(())
}

#[test]
fn layout_matches_the_engine_loader() -> Result<(), anyhow::Error> {
    let asset = single_triangle_asset();

    let mut buf = Vec::new();
    MeshResourceWriter::write(&asset, &mut buf)?;

    let mut expected = Vec::new();
    expected.extend_from_slice(&3u32.to_le_bytes());
    for vertex in &asset.vertices {
        for f in [
            vertex.position.x,
            vertex.position.y,
            vertex.position.z,
            vertex.normal.x,
            vertex.normal.y,
            vertex.normal.z,
        ] {
            expected.extend_from_slice(&f.to_le_bytes());
        }
    }
    expected.extend_from_slice(&3u32.to_le_bytes());
    for index in [0u32, 1, 2] {
        expected.extend_from_slice(&index.to_le_bytes());
    }
    expected.extend_from_slice(&1u32.to_le_bytes());
    expected.extend_from_slice(&0u32.to_le_bytes());
    expected.extend_from_slice(&3u32.to_le_bytes());

    assert_eq!(buf, expected);
    Ok(())
}

#[test]
fn parse_recovers_what_write_produced() -> Result<(), anyhow::Error> {
    let asset = single_triangle_asset();

    let mut buf = Vec::new();
    MeshResourceWriter::write(&asset, &mut buf)?;
    let parsed = MeshResourceReader::parse(&mut Cursor::new(buf))?;

    assert_eq!(parsed.vertices, asset.vertices);
    assert_eq!(parsed.indices, asset.indices);
    assert_eq!(parsed.submeshes, asset.submeshes);
    Ok(())
}

#[test]
fn truncated_source_is_an_io_error() -> Result<(), anyhow::Error> {
    let asset = single_triangle_asset();

    let mut buf = Vec::new();
    MeshResourceWriter::write(&asset, &mut buf)?;
    buf.truncate(buf.len() - 2);

    let result = MeshResourceReader::parse(&mut Cursor::new(buf));
    assert!(matches!(result, Err(ResourceError::IOError(_))));
    Ok(())
}

#[test]
fn gapped_descriptors_are_rejected() -> Result<(), anyhow::Error> {
    let mut asset = single_triangle_asset();
    asset.submeshes[0].index_start = 1;

    let mut buf = Vec::new();
    MeshResourceWriter::write(&asset, &mut buf)?;

    let result = MeshResourceReader::parse(&mut Cursor::new(buf));
    assert!(matches!(result, Err(ResourceError::FormatError { .. })));
    Ok(())
}

#[test]
fn short_descriptors_are_rejected() -> Result<(), anyhow::Error> {
    let mut asset = single_triangle_asset();
    asset.submeshes[0].index_count = 2;

    let mut buf = Vec::new();
    MeshResourceWriter::write(&asset, &mut buf)?;

    let result = MeshResourceReader::parse(&mut Cursor::new(buf));
    assert!(matches!(result, Err(ResourceError::FormatError { .. })));
    Ok(())
}
