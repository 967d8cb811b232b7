use super::{Mesh, triangle_normal};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a mesh to a binary STL file for inspection in a model viewer
///
/// Binary STL format:
/// - 80 byte header
/// - 4 byte u32 triangle count (little endian)
/// - For each triangle:
///   - 3 x f32 normal (12 bytes)
///   - 3 x 3 x f32 vertices (36 bytes)
///   - 2 byte attribute (usually 0)
///
/// Vertex colours are not part of the format and are dropped.
pub fn write_stl(path: &Path, mesh: &Mesh) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create STL file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let mut header = [b' '; 80];
    let title = b"tile3d - extruded building mesh";
    header[..title.len()].copy_from_slice(title);
    writer.write_all(&header)?;

    let count = u32::try_from(mesh.triangle_count()).context("Too many triangles for STL")?;
    writer.write_all(&count.to_le_bytes())?;

    for tri in mesh.triangles() {
        let normal = triangle_normal(tri[0].position, tri[1].position, tri[2].position);
        for &n in &normal {
            writer.write_all(&n.to_le_bytes())?;
        }

        for vertex in tri {
            for &coord in &vertex.position {
                writer.write_all(&coord.to_le_bytes())?;
            }
        }

        writer.write_all(&[0u8, 0u8])?;
    }

    writer.flush()?;

    Ok(())
}

/// Get the file size of an STL with the given number of triangles
pub fn estimate_stl_size(triangle_count: usize) -> usize {
    // 80 (header) + 4 (count) + triangles * (12 normal + 36 vertices + 2 attribute)
    80 + 4 + triangle_count * 50
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn two_triangles() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.push_triangle(
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            [1.0, 1.0, 1.0],
        );
        mesh.push_triangle(
            [[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
            [1.0, 1.0, 1.0],
        );
        mesh
    }

    #[test]
    fn test_write_stl() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.stl");

        write_stl(&path, &two_triangles()).unwrap();

        let metadata = fs::metadata(&path).unwrap();
        assert_eq!(metadata.len(), estimate_stl_size(2) as u64);
    }

    #[test]
    fn test_written_stl_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("roundtrip.stl");
        write_stl(&path, &two_triangles()).unwrap();

        let mut file = File::open(&path).unwrap();
        let stl = stl_io::read_stl(&mut file).unwrap();
        assert_eq!(stl.faces.len(), 2);
        assert_eq!(stl.vertices.len(), 4);
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.stl");
        assert!(write_stl(&path, &two_triangles()).is_err());
    }

    #[test]
    fn test_estimate_size() {
        assert_eq!(estimate_stl_size(0), 84);
        assert_eq!(estimate_stl_size(1), 134);
    }
}
