pub mod assembler;
pub mod builder;
pub mod roof;
pub mod stl;
pub mod triangulation;
pub mod validation;
pub mod walls;

pub use assembler::{MeshAssembler, SceneStats, SkippedRing, TileMesh, generate_tile_mesh};
pub use builder::{Mesh, Vertex, triangle_normal};
pub use roof::generate_roof;
pub use stl::{estimate_stl_size, write_stl};
pub use triangulation::{triangulate_ring, triangulate_with_holes};
pub use validation::{ValidationReport, validate_mesh};
pub use walls::generate_walls;
