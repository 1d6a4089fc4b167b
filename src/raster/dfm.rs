use super::GridSpec;
use crate::NODATA;

use std::ops::{Index, IndexMut};

/// a digital field model, one elevation value per grid cell
///
/// row-major with row 0 at the southern edge, so the row index grows
/// with increasing y from the grid origin
#[derive(Clone, Debug)]
pub struct Dfm {
    pub field: Vec<f64>,
    pub grid: GridSpec,
}

impl Dfm {
    /// zero-filled raster over the grid, every cell still unwritten
    pub fn new(grid: &GridSpec) -> Dfm {
        Dfm {
            field: vec![0.; grid.num_cells()],
            grid: grid.clone(),
        }
    }

    pub fn is_nodata(value: f64) -> bool {
        value == NODATA
    }

    /// aggregate count for diagnostics, nodata cells are silent data
    pub fn nodata_cells(&self) -> usize {
        self.field.iter().filter(|&&v| Dfm::is_nodata(v)).count()
    }
}

impl Index<(usize, usize)> for Dfm {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.field[index.0 * self.grid.cols + index.1]
    }
}

impl IndexMut<(usize, usize)> for Dfm {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.field[index.0 * self.grid.cols + index.1]
    }
}
