pub mod collision;
pub mod input;
pub mod movement;
pub mod powerup;
pub mod scoring;

pub use collision::*;
pub use input::*;
pub use movement::*;
pub use powerup::*;
pub use scoring::*;
