//! Mesh diagnostics
//!
//! Reports problems in a generated mesh without touching it:
//! - Degenerate triangles (zero area), expected for flat walls
//! - NaN/Inf positions or colours

use super::{Mesh, Vertex};

/// Result of mesh validation
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Total number of triangles validated
    pub total: usize,
    /// Number of degenerate triangles (zero or near-zero area)
    pub degenerate: usize,
    /// Number of triangles with invalid coordinates (NaN/Inf)
    pub invalid_coords: usize,
    /// Warning messages for issues found
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Check if the mesh can be handed to a renderer
    pub fn is_valid(&self) -> bool {
        self.invalid_coords == 0
    }

    /// Check if the mesh has any issues at all
    pub fn has_issues(&self) -> bool {
        self.degenerate > 0 || self.invalid_coords > 0
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if !self.has_issues() {
            format!("Mesh valid: {} triangles, no issues", self.total)
        } else {
            format!(
                "Mesh issues: {} total, {} degenerate, {} invalid coords",
                self.total, self.degenerate, self.invalid_coords
            )
        }
    }
}

/// Minimum area for non-degenerate triangles, in normalized units
const MIN_TRIANGLE_AREA: f32 = 1e-12;

/// Validate a mesh and return a detailed report
pub fn validate_mesh(mesh: &Mesh) -> ValidationReport {
    let mut report = ValidationReport {
        total: mesh.triangle_count(),
        ..Default::default()
    };

    for (i, tri) in mesh.triangles().enumerate() {
        if has_invalid_coords(tri) {
            report.invalid_coords += 1;
            report
                .warnings
                .push(format!("Triangle {} has NaN/Inf coordinates", i));
            continue;
        }

        if triangle_area(tri) < MIN_TRIANGLE_AREA {
            report.degenerate += 1;
        }
    }

    if report.degenerate > 0 {
        report.warnings.push(format!(
            "{} degenerate triangles detected",
            report.degenerate
        ));
    }

    report
}

fn has_invalid_coords(tri: &[Vertex]) -> bool {
    tri.iter().any(|v| {
        v.position.iter().any(|c| !c.is_finite()) || v.color.iter().any(|c| !c.is_finite())
    })
}

fn triangle_area(tri: &[Vertex]) -> f32 {
    let v0 = tri[0].position;
    let v1 = tri[1].position;
    let v2 = tri[2].position;

    let edge_a = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
    let edge_b = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];

    let cx = edge_a[1] * edge_b[2] - edge_a[2] * edge_b[1];
    let cy = edge_a[2] * edge_b[0] - edge_a[0] * edge_b[2];
    let cz = edge_a[0] * edge_b[1] - edge_a[1] * edge_b[0];

    0.5 * (cx * cx + cy * cy + cz * cz).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

    fn vertex(position: [f32; 3]) -> Vertex {
        Vertex {
            position,
            color: WHITE,
        }
    }

    #[test]
    fn test_triangle_area() {
        let tri = [
            vertex([0.0, 0.0, 0.0]),
            vertex([1.0, 0.0, 0.0]),
            vertex([0.0, 1.0, 0.0]),
        ];
        assert!((triangle_area(&tri) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_invalid_coords() {
        let nan = [
            vertex([f32::NAN, 0.0, 0.0]),
            vertex([1.0, 0.0, 0.0]),
            vertex([0.0, 1.0, 0.0]),
        ];
        assert!(has_invalid_coords(&nan));

        let mut inf_color = nan;
        inf_color[0] = Vertex {
            position: [0.0, 0.0, 0.0],
            color: [f32::INFINITY, 0.0, 0.0],
        };
        assert!(has_invalid_coords(&inf_color));
    }

    #[test]
    fn test_validate_mesh() {
        let mut mesh = Mesh::new();
        mesh.push_triangle([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], WHITE);
        mesh.push_triangle([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]], WHITE);
        mesh.push_triangle([[0.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]], WHITE);

        let report = validate_mesh(&mesh);

        assert_eq!(report.total, 3);
        assert_eq!(report.degenerate, 1);
        assert_eq!(report.invalid_coords, 0);
        assert!(report.is_valid());
        assert!(report.has_issues());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_clean_mesh_summary() {
        let mut mesh = Mesh::new();
        mesh.push_triangle([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], WHITE);

        let report = validate_mesh(&mesh);
        assert!(!report.has_issues());
        assert_eq!(report.summary(), "Mesh valid: 1 triangles, no issues");
    }

    #[test]
    fn test_nan_mesh_is_invalid() {
        let mut mesh = Mesh::new();
        mesh.push_triangle([[f32::NAN, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], WHITE);

        let report = validate_mesh(&mesh);
        assert!(!report.is_valid());
        assert_eq!(report.degenerate, 0);
    }
}
