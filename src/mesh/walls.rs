use super::Mesh;
use crate::config::Color;
use crate::geometry::{Normalizer, RingGeometry};

/// Emit one vertical quad per ring edge, wrap edge included.
///
/// For edge `(a, b)` the quad is split into
/// `(a, top) (b, top) (a, base)` and `(a, base) (b, top) (b, base)`.
/// The quad faces to the left of the edge direction in rendering space. With
/// the y flip that makes walls face outward on rings with positive signed area
/// in tile coordinates. `height == min_height` still emits both triangles.
pub fn generate_walls(
    mesh: &mut Mesh,
    ring: &RingGeometry,
    normalizer: &Normalizer,
    height: f64,
    min_height: f64,
    color: Color,
) {
    for (a, b) in ring.edges() {
        let a_top = normalizer.vertex(a, height);
        let b_top = normalizer.vertex(b, height);
        let a_base = normalizer.vertex(a, min_height);
        let b_base = normalizer.vertex(b, min_height);

        mesh.push_triangle([a_top, b_top, a_base], color);
        mesh.push_triangle([a_base, b_top, b_base], color);
    }
}
