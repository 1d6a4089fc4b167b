use crate::geometry::PointCloud;
use crate::parameters::RasterParameters;
use crate::{Error, Result};

use geo::Coord;

/// raster geometry derived from a point cloud's planar bounding box,
/// immutable once derived
///
/// the grid footprint is centered on the bounding box and rounded up to
/// whole cells, so it may overshoot the extent by less than one cell in
/// each direction
#[derive(Clone, Debug, PartialEq)]
pub struct GridSpec {
    /// cell edge length
    pub size: f64,
    pub cols: usize,
    pub rows: usize,
    /// lower-left anchor
    pub origin: Coord,
    /// upper-left anchor, what a geotiff writer wants
    pub ul_origin: Coord,
    /// carried through untouched for the raster writer
    pub epsg: Option<u16>,
}

impl GridSpec {
    pub fn derive(cloud: &PointCloud, params: &RasterParameters) -> Result<GridSpec> {
        let size = params.cell_size;
        if !(size > 0.) {
            return Err(Error::InvalidCellSize(size));
        }
        let (min, max) = cloud.planar_extent().ok_or(Error::EmptyPointCloud)?;

        let cols = ((max.x - min.x) / size).ceil() as usize;
        let rows = ((max.y - min.y) / size).ceil() as usize;

        let center = Coord {
            x: (min.x + max.x) / 2.,
            y: (min.y + max.y) / 2.,
        };

        let origin = Coord {
            x: center.x - (size / 2.) * cols as f64,
            y: center.y - (size / 2.) * rows as f64,
        };
        let ul_origin = Coord {
            x: origin.x,
            y: center.y + (size / 2.) * rows as f64,
        };

        log::debug!(
            "derived {}x{} raster grid at {:?} from {} points",
            cols,
            rows,
            origin,
            cloud.len()
        );

        Ok(GridSpec {
            size,
            cols,
            rows,
            origin,
            ul_origin,
            epsg: params.output_epsg,
        })
    }

    pub fn num_cells(&self) -> usize {
        self.cols * self.rows
    }

    /// center of cell (yi, xi), row index grows northward from the origin
    #[inline]
    pub fn cell_center(&self, yi: usize, xi: usize) -> Coord {
        Coord {
            x: self.origin.x + (xi as f64 + 0.5) * self.size,
            y: self.origin.y + (yi as f64 + 0.5) * self.size,
        }
    }

    #[inline]
    pub fn cell_spade(&self, yi: usize, xi: usize) -> spade::Point2<f64> {
        let c = self.cell_center(yi, xi);
        spade::Point2 { x: c.x, y: c.y }
    }
}
