use crate::geometry::PointCloud;
use crate::parameters::{IdwParameters, SearchMode};
use crate::raster::{Dfm, GridSpec};
use crate::{Error, Result, NODATA};

use geo::Coord;
use kiddo::{immutable::float::kdtree::ImmutableKdTree, NearestNeighbour, SquaredEuclidean};

use std::num::NonZero;

type SurfaceTree = ImmutableKdTree<f64, usize, 2, 32>;

/// surface model from all returns except noise, an adaptively growing
/// quadrant-balanced neighborhood idw per cell
///
/// cells whose neighborhood never balances stay nodata, the raster
/// itself always gets produced
pub fn compute_dsm(cloud: &PointCloud, grid: &GridSpec, params: &IdwParameters) -> Result<Dfm> {
    params.validate()?;

    let surface = cloud.surface_points();
    if surface.is_empty() {
        return Err(Error::EmptyPointCloud);
    }

    let tree: SurfaceTree = ImmutableKdTree::new_from_slice(&surface.to_2d_slice());

    let mut dsm = Dfm::new(grid);
    for yi in 0..grid.rows {
        for xi in 0..grid.cols {
            let center = grid.cell_center(yi, xi);

            dsm[(yi, xi)] = match balanced_search(&tree, &surface, center, params) {
                Some(candidates) => idw_estimate(&candidates, &surface, center, params.power),
                None => NODATA,
            };
        }
    }

    let nodata = dsm.nodata_cells();
    if nodata == grid.num_cells() && grid.num_cells() > 0 {
        log::warn!(
            "{} idw raster is all nodata, no cell satisfied the quadrant balance",
            params.search_mode
        );
    } else {
        log::info!(
            "{} idw raster over {} surface points: {nodata} of {} cells nodata",
            params.search_mode,
            surface.len(),
            grid.num_cells()
        );
    }

    Ok(dsm)
}

/// bounded-retry neighborhood search around one cell center
///
/// grows the radius (or k) by `increment` until every strict quadrant
/// holds at least `min_per_quadrant` candidates, giving up after
/// `max_iterations` growth steps
///
/// candidates exactly on a dividing axis count towards no quadrant but
/// stay in the returned set
pub(crate) fn balanced_search(
    tree: &SurfaceTree,
    surface: &PointCloud,
    center: Coord,
    params: &IdwParameters,
) -> Option<Vec<NearestNeighbour<f64, usize>>> {
    let mut rk = params.start_radius_or_k;

    for _ in 0..=params.max_iterations {
        let candidates = match params.search_mode {
            SearchMode::Radial => tree.within::<SquaredEuclidean>(&[center.x, center.y], rk * rk),
            SearchMode::KNearest => {
                let k = NonZero::new((rk as usize).max(1)).unwrap();
                tree.nearest_n::<SquaredEuclidean>(&[center.x, center.y], k)
            }
        };

        let mut quadrants = [0usize; 4];
        for n in candidates.iter() {
            let p = &surface.points[n.item].0;
            if p.x < center.x && p.y < center.y {
                quadrants[0] += 1;
            } else if p.x > center.x && p.y < center.y {
                quadrants[1] += 1;
            } else if p.x < center.x && p.y > center.y {
                quadrants[2] += 1;
            } else if p.x > center.x && p.y > center.y {
                quadrants[3] += 1;
            }
        }

        if quadrants.iter().all(|&q| q >= params.min_per_quadrant) {
            return Some(candidates);
        }

        rk += params.increment;
    }

    None
}

/// inverse-distance weighting over a balanced candidate set
///
/// a candidate on the cell center short-circuits to its own elevation,
/// the weight would otherwise divide by zero
fn idw_estimate(
    candidates: &[NearestNeighbour<f64, usize>],
    surface: &PointCloud,
    center: Coord,
    power: f64,
) -> f64 {
    let mut weighted_sum = 0.;
    let mut weight_sum = 0.;

    for n in candidates {
        let p = &surface.points[n.item];
        let dist = p.coords() - center;
        let dist = (dist.x * dist.x + dist.y * dist.y).sqrt();

        if dist == 0. {
            return p.0.z;
        }

        let weight = 1. / dist.powf(power);
        weighted_sum += p.0.z * weight;
        weight_sum += weight;
    }

    weighted_sum / weight_sum
}
