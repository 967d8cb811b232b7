pub mod building;
pub mod record;

pub use building::{Building, Footprint, Point2D, Ring};
pub use record::{BuildingRecord, parse_records};
