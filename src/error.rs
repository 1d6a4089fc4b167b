use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// crate specific Error enum
#[derive(Error, Debug)]
pub enum Error {
    #[error("The point cloud contains no points")]
    EmptyPointCloud,
    #[error("The area contains no ground points")]
    NoGroundPoints,
    #[error("Invalid raster cell size {0}, the cell size must be positive")]
    InvalidCellSize(f64),
    #[error("Invalid idw parameter {name}: {value}")]
    InvalidIdwParameter { name: &'static str, value: f64 },
    #[error("Cannot triangulate {num_points} ground points, all points are colinear")]
    DegenerateTriangulation { num_points: usize },
    #[error(transparent)]
    TriangulationError(#[from] spade::InsertionError),
}
