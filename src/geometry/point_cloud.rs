use super::PointLaz;

use geo::Coord;
use las::point::Classification;

/// read-only snapshot of a classified point cloud, the interpolators
/// never mutate the source points
#[derive(Clone, Default)]
pub struct PointCloud {
    pub points: Vec<PointLaz>,
}

impl PointCloud {
    pub fn new(points: Vec<PointLaz>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// planar bounding box over every point, regardless of classification
    pub fn planar_extent(&self) -> Option<(Coord, Coord)> {
        let mut min = Coord {
            x: f64::MAX,
            y: f64::MAX,
        };
        let mut max = Coord {
            x: f64::MIN,
            y: f64::MIN,
        };

        for p in self.points.iter() {
            min.x = min.x.min(p.0.x);
            min.y = min.y.min(p.0.y);
            max.x = max.x.max(p.0.x);
            max.y = max.y.max(p.0.y);
        }

        (!self.is_empty()).then_some((min, max))
    }

    /// the terrain subset used by the triangulated surface
    pub fn ground_points(&self) -> PointCloud {
        PointCloud::new(
            self.points
                .iter()
                .filter(|p| !p.0.is_withheld && p.0.classification == Classification::Ground)
                .cloned()
                .collect(),
        )
    }

    /// everything except withheld and low-noise returns,
    /// the denser subset used by the idw surface
    pub fn surface_points(&self) -> PointCloud {
        PointCloud::new(
            self.points
                .iter()
                .filter(|p| !p.0.is_withheld && p.0.classification != Classification::LowPoint)
                .cloned()
                .collect(),
        )
    }

    pub fn to_2d_slice(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.0.x, p.0.y]).collect()
    }
}
