pub mod animator;
pub mod canvas;
pub mod config;
pub mod constants;
pub mod easing;
pub mod error;
pub mod field;
pub mod graph;
pub mod overlay;
pub mod particle;
pub mod section;
pub mod surface;

pub use animator::*;
pub use canvas::*;
pub use config::*;
pub use constants::*;
pub use easing::*;
pub use error::*;
pub use field::*;
pub use graph::*;
pub use particle::*;
pub use section::*;
pub use surface::*;
