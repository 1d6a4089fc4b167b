pub mod dfm;
pub mod grid_spec;

pub use self::dfm::Dfm;
pub use self::grid_spec::GridSpec;
