pub mod astro;
pub mod consts;
pub mod error;
pub mod gui;
pub mod math;

pub use error::Error;
