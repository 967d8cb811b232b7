use bytemuck::{Pod, Zeroable};

use crate::config::Color;

/// One expanded vertex of the non-indexed triangle list
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Normalized position [x, y, height]
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Accumulator for a flat, non-indexed triangle mesh
///
/// Vertices are grouped in threes; nothing is shared between triangles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Vertex>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    /// Add a triangle with a single colour on all three corners
    pub fn push_triangle(&mut self, corners: [[f32; 3]; 3], color: Color) {
        self.vertices.extend(
            corners
                .into_iter()
                .map(|position| Vertex { position, color }),
        );
    }

    /// Append every triangle of another mesh
    pub fn append(&mut self, other: &mut Mesh) {
        self.vertices.append(&mut other.vertices);
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Get the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of triangles
    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn triangles(&self) -> impl Iterator<Item = &[Vertex]> {
        self.vertices.chunks_exact(3)
    }

    /// Flat position attribute, three floats per vertex
    pub fn positions(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.position).collect()
    }

    /// Flat colour attribute, parallel to [`Mesh::positions`]
    pub fn colors(&self) -> Vec<f32> {
        self.vertices.iter().flat_map(|v| v.color).collect()
    }

    /// Interleaved position/colour buffer for upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

/// Calculate the normal vector for a triangle using the cross product
pub fn triangle_normal(v0: [f32; 3], v1: [f32; 3], v2: [f32; 3]) -> [f32; 3] {
    let u = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
    let v = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];

    let nx = u[1] * v[2] - u[2] * v[1];
    let ny = u[2] * v[0] - u[0] * v[2];
    let nz = u[0] * v[1] - u[1] * v[0];

    let len = (nx * nx + ny * ny + nz * nz).sqrt();
    if len > 1e-10 {
        [nx / len, ny / len, nz / len]
    } else {
        [0.0, 0.0, 1.0] // Default to up for degenerate triangles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Color = [1.0, 0.0, 0.0];
    const BLUE: Color = [0.0, 0.0, 1.0];

    #[test]
    fn test_triangle_normal() {
        let normal = triangle_normal([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]);

        assert!((normal[0]).abs() < 0.001);
        assert!((normal[1]).abs() < 0.001);
        assert!((normal[2] - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_degenerate_normal() {
        let normal = triangle_normal([0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]);
        assert_eq!(normal, [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_push_triangle() {
        let mut mesh = Mesh::new();
        mesh.push_triangle([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], RED);
        mesh.push_triangle([[0.0, 0.0, 1.0], [1.0, 0.0, 1.0], [0.0, 1.0, 1.0]], BLUE);

        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangle_count(), 2);
        assert_eq!(mesh.vertices()[3].color, BLUE);
        assert_eq!(mesh.triangles().count(), 2);
    }

    #[test]
    fn test_parallel_attributes() {
        let mut mesh = Mesh::new();
        mesh.push_triangle([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.5]], RED);

        let positions = mesh.positions();
        let colors = mesh.colors();
        assert_eq!(positions.len(), 9);
        assert_eq!(colors.len(), 9);
        assert_eq!(&positions[6..], &[0.0, 1.0, 0.5]);
        assert_eq!(&colors[..3], &RED);
    }

    #[test]
    fn test_as_bytes_interleaves() {
        let mut mesh = Mesh::new();
        mesh.push_triangle([[1.0, 2.0, 3.0]; 3], BLUE);

        let bytes = mesh.as_bytes();
        assert_eq!(bytes.len(), 3 * 6 * 4);
        let floats: &[f32] = bytemuck::cast_slice(bytes);
        assert_eq!(&floats[..6], &[1.0, 2.0, 3.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_append() {
        let mut a = Mesh::new();
        let mut b = Mesh::new();
        a.push_triangle([[0.0; 3]; 3], RED);
        b.push_triangle([[1.0; 3]; 3], BLUE);
        a.append(&mut b);

        assert_eq!(a.triangle_count(), 2);
        assert!(b.is_empty());
    }
}
