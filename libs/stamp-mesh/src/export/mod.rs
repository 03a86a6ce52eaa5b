//! # Export
//!
//! Writes finished meshes to disk.

mod stl;

pub use stl::{write_stl_to, StlFormat};

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// Writes `mesh` as an STL file at `path`, creating missing parent
/// directories.
///
/// ## Errors
///
/// `EmptyMesh` for a mesh without triangles; `Io` when the file cannot be
/// written.
///
/// # Example
///
/// ```no_run
/// use stamp_mesh::export::{write_stl, StlFormat};
/// use stamp_mesh::primitives::create_slab;
///
/// write_stl(&create_slab(30.0, 7.0), "out/stamp.stl", StlFormat::Binary).unwrap();
/// ```
pub fn write_stl(mesh: &Mesh, path: impl AsRef<Path>, format: StlFormat) -> Result<(), MeshError> {
    let path = path.as_ref();
    if mesh.is_empty() {
        return Err(MeshError::EmptyMesh);
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(path)?);
    write_stl_to(mesh, &mut writer, format)?;
    writer.flush()?;

    debug!(path = %path.display(), ?format, triangles = mesh.triangle_count(), "stl written");
    Ok(())
}
