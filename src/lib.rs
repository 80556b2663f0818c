//! Bouncing arena: circular bodies in a bounded 2D arena under two physics
//! regimes, free flight with elastic impulses and gravity with coalescing
//! contacts.
//!
//! The physics kernel lives in [`engine::physics`] and knows nothing about
//! input or presentation. [`game::Arena`] owns the population and applies
//! driver commands between ticks.

pub mod config;
pub mod core;
pub mod engine;
pub mod game;

pub use config::{ArenaConfig, ConfigError};
pub use engine::physics::{step, ArenaBounds, Body, BodyError};
pub use game::Arena;
