use crate::geometry::PointCloud;
use crate::parameters::TinMethod;
use crate::raster::{Dfm, GridSpec};
use crate::tin::GroundTin;
use crate::{Error, Result, NODATA};

/// terrain model from the ground points, a triangulated surface
/// evaluated at every cell center
///
/// the triangulation is returned alongside the raster for mesh export
pub fn compute_dtm(
    cloud: &PointCloud,
    grid: &GridSpec,
    method: TinMethod,
) -> Result<(Dfm, GroundTin)> {
    let ground = cloud.ground_points();
    if ground.is_empty() {
        return Err(Error::NoGroundPoints);
    }

    let tin = GroundTin::bulk_load(ground.points)?;
    let sampler = tin.sampler(method);

    let mut dtm = Dfm::new(grid);
    for yi in 0..grid.rows {
        for xi in 0..grid.cols {
            let coords = grid.cell_spade(yi, xi);

            // cells outside the ground hull stay without an estimate
            dtm[(yi, xi)] = match sampler.interpolate(coords) {
                Some(elev) => elev,
                None => NODATA,
            };
        }
    }

    let nodata = dtm.nodata_cells();
    if nodata == grid.num_cells() && grid.num_cells() > 0 {
        log::warn!("{method} raster is all nodata, the grid lies outside the ground hull");
    } else {
        log::info!(
            "{method} raster over {} ground points: {nodata} of {} cells nodata",
            tin.num_vertices(),
            grid.num_cells()
        );
    }

    Ok((dtm, tin))
}
