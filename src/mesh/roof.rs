use super::Mesh;
use crate::config::Color;
use crate::domain::Point2D;
use crate::geometry::Normalizer;

/// Emit roof triangles at `height` from an ear-clipping index list.
///
/// The index list is walked back to front. Each triangle is then wound
/// against `ring_area` (the signed area of the ring it covers), which is the
/// winding that matches the walls: roof and walls of one ring either all face
/// out or all face in. Triangles of a zero-area ring keep the reversed order.
pub fn generate_roof(
    mesh: &mut Mesh,
    points: &[Point2D],
    indices: &[usize],
    ring_area: f64,
    normalizer: &Normalizer,
    height: f64,
    color: Color,
) {
    for tri in indices.chunks_exact(3).rev() {
        let (a, mut b, mut c) = (points[tri[2]], points[tri[1]], points[tri[0]]);
        if signed_area(a, b, c) * ring_area > 0.0 {
            std::mem::swap(&mut b, &mut c);
        }

        mesh.push_triangle(
            [
                normalizer.vertex(a, height),
                normalizer.vertex(b, height),
                normalizer.vertex(c, height),
            ],
            color,
        );
    }
}

fn signed_area(a: Point2D, b: Point2D, c: Point2D) -> f64 {
    ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Ring;
    use crate::geometry::RingGeometry;
    use crate::mesh::{triangle_normal, triangulate_ring};

    const TAN: Color = [0.8, 0.7, 0.6];

    fn roof(coords: &[(f64, f64)], height: f64) -> Mesh {
        let ring = RingGeometry::from_ring(&Ring::from_coords(coords)).unwrap();
        let indices = triangulate_ring(&ring);
        let mut mesh = Mesh::new();
        generate_roof(
            &mut mesh,
            ring.points(),
            &indices,
            ring.signed_area(),
            &Normalizer::new(4096.0, 369.0),
            height,
            TAN,
        );
        mesh
    }

    fn normals(mesh: &Mesh) -> Vec<[f32; 3]> {
        mesh.triangles()
            .map(|t| triangle_normal(t[0].position, t[1].position, t[2].position))
            .collect()
    }

    const L_SHAPE: [(f64, f64); 7] = [
        (0.0, 0.0),
        (200.0, 0.0),
        (200.0, 100.0),
        (100.0, 100.0),
        (100.0, 200.0),
        (0.0, 200.0),
        (0.0, 0.0),
    ];

    #[test]
    fn test_roof_height_and_color() {
        let mesh = roof(&L_SHAPE, 73.8);
        assert_eq!(mesh.triangle_count(), 4);
        for v in mesh.vertices() {
            assert!((v.position[2] - 0.2).abs() < 1e-6);
            assert_eq!(v.color, TAN);
        }
    }

    #[test]
    fn test_positive_area_ring_roof_faces_up() {
        let mesh = roof(&L_SHAPE, 10.0);
        assert!(normals(&mesh).iter().all(|n| n[2] > 0.99));
    }

    #[test]
    fn test_negative_area_ring_roof_faces_down() {
        let mut reversed = L_SHAPE.to_vec();
        reversed.reverse();
        let mesh = roof(&reversed, 10.0);
        assert!(normals(&mesh).iter().all(|n| n[2] < -0.99));
    }

    #[test]
    fn test_reverse_walk() {
        let points = [
            Point2D::new(0.0, 0.0),
            Point2D::new(4096.0, 0.0),
            Point2D::new(0.0, 4096.0),
        ];
        let mut mesh = Mesh::new();
        // Zero ring area leaves the reversed order untouched
        generate_roof(
            &mut mesh,
            &points,
            &[0, 1, 2],
            0.0,
            &Normalizer::new(4096.0, 369.0),
            0.0,
            TAN,
        );
        let positions: Vec<[f32; 3]> = mesh.vertices().iter().map(|v| v.position).collect();
        assert_eq!(
            positions,
            vec![[-1.0, -1.0, 0.0], [1.0, 1.0, 0.0], [-1.0, 1.0, 0.0]]
        );
    }

    #[test]
    fn test_empty_indices() {
        let mut mesh = Mesh::new();
        generate_roof(
            &mut mesh,
            &[],
            &[],
            0.0,
            &Normalizer::new(4096.0, 369.0),
            10.0,
            TAN,
        );
        assert!(mesh.is_empty());
    }
}
