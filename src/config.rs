// Driver configuration

use crate::game::class::BODY_RADIUS;
use clap::Parser;
use thiserror::Error;

/// Errors raised while validating the configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("arena size must be finite, got {width}x{height}")]
    NonFinite { width: f64, height: f64 },

    #[error("arena {width}x{height} is too small for bodies of radius {radius}")]
    ArenaTooSmall { width: f64, height: f64, radius: f64 },

    #[error("tick rate must be positive")]
    InvalidTickRate,
}

/// Headless bouncing-ball arena
///
/// Every flag can also be set through its `ARENA_*` environment variable.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "bouncing-arena", version, about)]
pub struct ArenaConfig {
    /// Arena width in pixels
    #[arg(long, env = "ARENA_WIDTH", default_value_t = 800.0)]
    pub width: f64,

    /// Arena height in pixels
    #[arg(long, env = "ARENA_HEIGHT", default_value_t = 600.0)]
    pub height: f64,

    /// Simulation ticks per second
    #[arg(long, env = "ARENA_TICK_RATE", default_value_t = 60)]
    pub tick_rate: u32,

    /// Seed for spawning and boosts (random when omitted)
    #[arg(long, env = "ARENA_SEED")]
    pub seed: Option<u64>,

    /// Stop after this many ticks (run until quit when omitted)
    #[arg(long, env = "ARENA_MAX_TICKS")]
    pub max_ticks: Option<u64>,

    /// Ticks between status log lines, 0 disables them
    #[arg(long, env = "ARENA_REPORT_INTERVAL", default_value_t = 60)]
    pub report_interval: u64,

    /// Read commands from stdin
    #[arg(
        long,
        env = "ARENA_INTERACTIVE",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub interactive: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            tick_rate: 60,
            seed: None,
            max_ticks: None,
            report_interval: 60,
            interactive: true,
        }
    }
}

impl ArenaConfig {
    /// Check that the arena can hold a body and the clock can tick
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::InvalidTickRate);
        }

        // Also rejects NaN, which is not finite either
        if !self.width.is_finite() || !self.height.is_finite() {
            return Err(ConfigError::NonFinite {
                width: self.width,
                height: self.height,
            });
        }

        let diameter = 2.0 * BODY_RADIUS;
        if self.width <= diameter || self.height <= diameter {
            return Err(ConfigError::ArenaTooSmall {
                width: self.width,
                height: self.height,
                radius: BODY_RADIUS,
            });
        }

        Ok(())
    }
}
