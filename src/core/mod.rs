pub mod config;
pub mod intro;
pub mod parallax;
pub mod particle;
pub mod starfield;

pub use config::*;
pub use parallax::Parallax;
pub use particle::{Particle, StarColor};
pub use starfield::{Glow, Starfield};
