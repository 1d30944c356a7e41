mod elements;
mod projection;
mod triad;

pub use elements::{OrbitPoint, OrbitalElements};
pub use projection::{SkyPoint, ThieleInnes};
pub use triad::NormalTriad;
