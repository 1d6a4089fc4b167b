use geo::Coord;
use las::point::Classification;
use spade::{HasPosition, Point2};

/// a lidar point record, triangulated by its planar position
/// with the elevation carried along as vertex data
#[derive(Clone, Debug)]
pub struct PointLaz(pub las::Point);

impl PointLaz {
    /// a synthetic ground point, for tests and ghost points
    pub fn new(x: f64, y: f64, z: f64) -> PointLaz {
        PointLaz(las::Point {
            x,
            y,
            z,
            classification: Classification::Ground,
            is_synthetic: true,
            ..Default::default()
        })
    }

    pub fn classified(x: f64, y: f64, z: f64, classification: Classification) -> PointLaz {
        let mut p = PointLaz::new(x, y, z);
        p.0.classification = classification;
        p
    }

    pub fn coords(&self) -> Coord {
        Coord {
            x: self.0.x,
            y: self.0.y,
        }
    }
}

impl HasPosition for PointLaz {
    type Scalar = f64;

    fn position(&self) -> Point2<Self::Scalar> {
        Point2::new(self.0.x, self.0.y)
    }
}
