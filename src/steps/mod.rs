pub mod compute_dsm;
pub mod compute_dtm;

pub use self::compute_dsm::compute_dsm;
pub use self::compute_dtm::compute_dtm;
