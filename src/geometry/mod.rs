pub mod point_cloud;
pub mod point_lidar;

pub use self::point_cloud::PointCloud;
pub use self::point_lidar::PointLaz;
