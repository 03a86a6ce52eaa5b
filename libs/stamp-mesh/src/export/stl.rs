//! STL encoding (binary and ASCII).

use std::io::{self, Write};

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::mesh::Mesh;

/// Binary STL header size in bytes.
const HEADER_SIZE: usize = 80;

/// Solid name used in headers.
const SOLID_NAME: &str = "stamp";

/// On-disk STL flavor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StlFormat {
    #[default]
    Binary,
    Ascii,
}

/// Encodes `mesh` into `writer` with one facet per triangle.
///
/// Facet normals are recomputed from the winding; zero-area facets get a
/// zero normal.
pub fn write_stl_to<W: Write>(mesh: &Mesh, writer: &mut W, format: StlFormat) -> io::Result<()> {
    match format {
        StlFormat::Binary => write_binary(mesh, writer),
        StlFormat::Ascii => write_ascii(mesh, writer),
    }
}

fn write_binary<W: Write>(mesh: &Mesh, writer: &mut W) -> io::Result<()> {
    // 80-byte header, padded with spaces
    let mut header = [b' '; HEADER_SIZE];
    let text = b"binary STL: stamp";
    header[..text.len()].copy_from_slice(text);
    writer.write_all(&header)?;

    let count = u32::try_from(mesh.triangle_count())
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "too many triangles for STL"))?;
    writer.write_all(&count.to_le_bytes())?;

    for &tri in mesh.triangles() {
        write_vec_binary(writer, mesh.triangle_normal(tri))?;
        for v in mesh.triangle_positions(tri) {
            write_vec_binary(writer, v)?;
        }
        // Attribute byte count
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

/// Writes a vector as 3 little-endian f32s.
fn write_vec_binary<W: Write>(writer: &mut W, v: DVec3) -> io::Result<()> {
    for c in v.as_vec3().to_array() {
        writer.write_all(&c.to_le_bytes())?;
    }
    Ok(())
}

fn write_ascii<W: Write>(mesh: &Mesh, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "solid {SOLID_NAME}")?;

    for &tri in mesh.triangles() {
        let n = mesh.triangle_normal(tri);
        writeln!(writer, "  facet normal {:.6e} {:.6e} {:.6e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in mesh.triangle_positions(tri) {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid {SOLID_NAME}")
}
