//! tile3d - Extrude vector tile building footprints into GPU-ready 3D triangle meshes
//!
//! Feed the decoded buildings of one tile to [`MeshAssembler::assemble`] and
//! hand the resulting non-indexed triangle list to the renderer.

pub mod config;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod mesh;

pub use config::{MeshConfig, RingMode};
pub use domain::{Building, BuildingRecord, Point2D, Ring, parse_records};
pub use error::{BuildingError, ConfigError, GeometryError, RecordError};
pub use mesh::{Mesh, MeshAssembler, SceneStats, TileMesh, Vertex, generate_tile_mesh};
