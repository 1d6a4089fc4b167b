use crate::{Error, Result};
use std::fmt::Display;

/// raster geometry configuration, the cell size and an optional
/// EPSG code passed through to the raster writer
#[derive(Clone, Debug)]
pub struct RasterParameters {
    pub cell_size: f64,
    pub output_epsg: Option<u16>,
}

impl Default for RasterParameters {
    fn default() -> Self {
        Self {
            cell_size: 0.5,
            output_epsg: None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum TinMethod {
    Linear,
    #[default]
    Laplace,
}

impl Display for TinMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TinMethod::Linear => f.write_str("TIN-linear"),
            TinMethod::Laplace => f.write_str("Laplace"),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum SearchMode {
    #[default]
    Radial,
    KNearest,
}

impl Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Radial => f.write_str("radial"),
            SearchMode::KNearest => f.write_str("k-nearest"),
        }
    }
}

/// quadrant idw configuration
///
/// `start_radius_or_k` and `increment` are read as a search radius in
/// radial mode and as a neighbor count in k-nearest mode
#[derive(Clone, Debug)]
pub struct IdwParameters {
    pub start_radius_or_k: f64,
    pub power: f64,
    pub min_per_quadrant: usize,
    pub increment: f64,
    pub search_mode: SearchMode,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for IdwParameters {
    fn default() -> Self {
        Self {
            start_radius_or_k: 10.,
            power: 2.,
            min_per_quadrant: 1,
            increment: 5.,
            search_mode: SearchMode::Radial,
            tolerance: 0.,
            max_iterations: 8,
        }
    }
}

impl IdwParameters {
    pub fn validate(&self) -> Result<()> {
        if !(self.start_radius_or_k > 0.) {
            return Err(Error::InvalidIdwParameter {
                name: "start_radius_or_k",
                value: self.start_radius_or_k,
            });
        }
        if self.min_per_quadrant == 0 {
            return Err(Error::InvalidIdwParameter {
                name: "min_per_quadrant",
                value: 0.,
            });
        }
        if !(self.increment >= 0.) {
            return Err(Error::InvalidIdwParameter {
                name: "increment",
                value: self.increment,
            });
        }
        if !(self.tolerance >= 0.) {
            return Err(Error::InvalidIdwParameter {
                name: "tolerance",
                value: self.tolerance,
            });
        }
        Ok(())
    }
}
