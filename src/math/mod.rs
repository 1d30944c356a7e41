pub mod geometry;
pub mod kepler;
pub mod root_finding;
