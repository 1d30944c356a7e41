//! Default parameters for the interactive demo, shared with the tests.

/// Semimajor axis of the demo orbit, in arbitrary length units.
pub const DEMO_SEMIMAJOR_AXIS: f64 = 2.0;

/// Eccentricity of the demo orbit. High enough that the ellipse is visibly
/// lopsided, low enough that the solver is nowhere near its stress regime.
pub const DEMO_ECCENTRICITY: f64 = 0.6;

/// One full revolution of the animated body takes this long.
pub const ANIMATION_PERIOD_SECONDS: f64 = 4.0;

/// The window clear color. Anything drawn must contrast with this.
pub const BACKGROUND_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
