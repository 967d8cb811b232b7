use earcutr::earcut;

use crate::geometry::RingGeometry;

/// Ear-clip a single ring.
///
/// Returns index triples into `ring.points()`. Self-intersecting or otherwise
/// degenerate rings never fail; they may just yield a poor or empty cover.
pub fn triangulate_ring(ring: &RingGeometry) -> Vec<usize> {
    triangulate_with_holes(ring, &[])
}

/// Ear-clip an outer ring with holes cut out of it.
///
/// The returned indices address one combined point list: `outer.points()`
/// first, then each hole's points in the order the holes are given. Index
/// `outer.len()` is the first point of `holes[0]`. Callers emitting the roof
/// must build their point slice in exactly that order.
pub fn triangulate_with_holes(outer: &RingGeometry, holes: &[&RingGeometry]) -> Vec<usize> {
    if outer.len() < 3 {
        return Vec::new();
    }

    let mut vertices: Vec<f64> =
        Vec::with_capacity((outer.len() + holes.iter().map(|h| h.len()).sum::<usize>()) * 2);
    let mut hole_indices: Vec<usize> = Vec::with_capacity(holes.len());

    vertices.extend(outer.flat_coords());

    for hole in holes {
        hole_indices.push(vertices.len() / 2);
        vertices.extend(hole.flat_coords());
    }

    earcut(&vertices, &hole_indices, 2).unwrap_or_default()
}
