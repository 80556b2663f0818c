// Arena game layer
//
// - `class`: body color classes and their spawn presets
// - `arena`: population owner that applies driver commands and ticks physics

pub mod arena;
pub mod class;

pub use arena::{Arena, ArenaStats, CommandOutcome};
pub use class::{BodyClass, BODY_RADIUS};
