use crate::geometry::PointLaz;
use crate::parameters::TinMethod;
use crate::{Error, Result};

use spade::{
    Barycentric, DelaunayTriangulation, FloatTriangulation, NaturalNeighbor, Point2, Triangulation,
};

/// delaunay triangulation over the ground points, built once and
/// queried read-only while rastering
///
/// every spade specific call lives here so the interpolation step
/// stays independent of the triangulation library
pub struct GroundTin {
    dt: DelaunayTriangulation<PointLaz>,
}

/// vertex positions and triangle index triples for an external
/// mesh writer
pub struct TinMesh {
    pub vertices: Vec<[f64; 3]>,
    pub triangles: Vec<[usize; 3]>,
}

impl GroundTin {
    /// bulk insert, keyed on (x, y) with the elevation as vertex data
    ///
    /// fails when the points admit no triangle at all, a colinear
    /// cluster cannot be rastered
    pub fn bulk_load(points: Vec<PointLaz>) -> Result<GroundTin> {
        let num_points = points.len();
        let dt = DelaunayTriangulation::<PointLaz>::bulk_load_stable(points)?;

        if dt.num_inner_faces() == 0 {
            return Err(Error::DegenerateTriangulation { num_points });
        }

        Ok(GroundTin { dt })
    }

    pub fn num_vertices(&self) -> usize {
        self.dt.num_vertices()
    }

    pub fn sampler(&self, method: TinMethod) -> TinSampler<'_> {
        match method {
            TinMethod::Linear => TinSampler::Linear(self.dt.barycentric()),
            TinMethod::Laplace => TinSampler::Laplace(self.dt.natural_neighbor()),
        }
    }

    /// topology export, vertex order matches the stable bulk load
    pub fn mesh(&self) -> TinMesh {
        let vertices = self
            .dt
            .vertices()
            .map(|v| {
                let p = &v.data().0;
                [p.x, p.y, p.z]
            })
            .collect();

        let triangles = self
            .dt
            .inner_faces()
            .map(|f| f.vertices().map(|v| v.fix().index()))
            .collect();

        TinMesh {
            vertices,
            triangles,
        }
    }
}

/// one surface evaluation strategy over a borrowed triangulation
pub enum TinSampler<'a> {
    Linear(Barycentric<'a, DelaunayTriangulation<PointLaz>>),
    Laplace(NaturalNeighbor<'a, DelaunayTriangulation<PointLaz>>),
}

impl TinSampler<'_> {
    /// None outside the triangulation hull
    pub fn interpolate(&self, position: Point2<f64>) -> Option<f64> {
        match self {
            TinSampler::Linear(barycentric) => {
                barycentric.interpolate(|v| v.data().0.z, position)
            }
            TinSampler::Laplace(nn) => nn.interpolate(|v| v.data().0.z, position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square_tin() -> GroundTin {
        GroundTin::bulk_load(vec![
            PointLaz::new(0., 0., 0.),
            PointLaz::new(1., 0., 0.),
            PointLaz::new(0., 1., 1.),
            PointLaz::new(1., 1., 1.),
        ])
        .unwrap()
    }

    #[test]
    fn test_linear_is_exact_at_vertices() {
        let tin = unit_square_tin();
        let sampler = tin.sampler(TinMethod::Linear);

        let z = sampler.interpolate(Point2::new(0., 1.)).unwrap();
        assert!((z - 1.).abs() < 1e-12);
        let z = sampler.interpolate(Point2::new(1., 0.)).unwrap();
        assert!(z.abs() < 1e-12);
    }

    #[test]
    fn test_both_methods_reproduce_a_plane() {
        // z = y over the square, linear everywhere
        let tin = unit_square_tin();
        for method in [TinMethod::Linear, TinMethod::Laplace] {
            let sampler = tin.sampler(method);
            let z = sampler.interpolate(Point2::new(0.5, 0.5)).unwrap();
            assert!((z - 0.5).abs() < 1e-6, "{method} off the plane: {z}");
            let z = sampler.interpolate(Point2::new(0.25, 0.75)).unwrap();
            assert!((z - 0.75).abs() < 1e-6, "{method} off the plane: {z}");
        }
    }

    #[test]
    fn test_outside_hull_is_none() {
        let tin = unit_square_tin();
        for method in [TinMethod::Linear, TinMethod::Laplace] {
            let sampler = tin.sampler(method);
            assert!(sampler.interpolate(Point2::new(2., 2.)).is_none());
            assert!(sampler.interpolate(Point2::new(-0.1, 0.5)).is_none());
        }
    }

    #[test]
    fn test_colinear_points_are_degenerate() {
        let points = (0..5).map(|i| PointLaz::new(i as f64, 0., 1.)).collect();
        assert!(matches!(
            GroundTin::bulk_load(points),
            Err(Error::DegenerateTriangulation { num_points: 5 })
        ));
    }

    #[test]
    fn test_mesh_export() {
        let tin = unit_square_tin();
        let mesh = tin.mesh();

        assert_eq!(mesh.vertices.len(), 4);
        // a triangulated square has two triangles
        assert_eq!(mesh.triangles.len(), 2);
        for t in mesh.triangles.iter() {
            assert!(t.iter().all(|&i| i < mesh.vertices.len()));
        }
    }
}
