//! Evacuation guidance: where things are, which routes leave a hazard, and
//! the arrows that show them.

pub mod locations;
pub mod markers;
pub mod routes;

pub use locations::LocationRegistry;
pub use markers::{DirectionalMarker, MarkerColor, MarkerStyle, RouteRenderer};
pub use routes::{Route, RouteTable};
