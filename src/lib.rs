pub mod error;
pub mod geometry;
pub mod parameters;
pub mod raster;
pub mod steps;
pub mod tin;

/// sentinel written to raster cells with no valid estimate
pub const NODATA: f64 = -9999.;

pub use error::{Error, Result};
pub use geometry::{PointCloud, PointLaz};
pub use raster::{Dfm, GridSpec};
pub use steps::{compute_dsm, compute_dtm};
pub use tin::{GroundTin, TinMesh};
