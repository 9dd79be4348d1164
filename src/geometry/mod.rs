pub mod extent;
pub mod planar;
pub mod projection;
pub mod snap;

pub use extent::Extent;
pub use projection::{METERS_PER_DEGREE, Projector};
pub use snap::{DEFAULT_GRID_SIZE, snap_ring, snap_to_grid};
