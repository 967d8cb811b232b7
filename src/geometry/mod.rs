pub mod bounds;
pub mod normalize;
pub mod ring;
pub mod tile;

pub use bounds::Bounds;
pub use normalize::Normalizer;
pub use ring::RingGeometry;
pub use tile::{TileCoord, lat_to_tile_y, lon_to_tile_x};
