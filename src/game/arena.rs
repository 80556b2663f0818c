// Arena - owns the body population and the physics regime
//
// The arena is the only place where bodies are created or destroyed. All
// structural changes go through `&mut self` methods that cannot run while a
// step is in progress, so the kernel never sees the collection change size.

use glam::DVec2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::class::{BodyClass, BODY_RADIUS};
use crate::config::ArenaConfig;
use crate::engine::input::Command;
use crate::engine::physics::{self, ArenaBounds, Body, BodyError, StepStats};

/// Margin kept between spawn positions and the arena edge
const SPAWN_MARGIN: f64 = 100.0;

/// Half-width of the velocity range for bodies added at runtime
const ADDED_BODY_SPEED: f64 = 2.0;

/// Half-width of the per-axis velocity boost applied when gravity turns off
const GRAVITY_OFF_BOOST: f64 = 2.0;

/// Aggregate quantities of the current population
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArenaStats {
    pub population: usize,
    pub kinetic_energy: f64,
    pub momentum: DVec2,
}

/// What applying a command asks of the driver loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    TogglePause,
    Quit,
}

/// The simulated arena
pub struct Arena {
    bounds: ArenaBounds,
    gravity_enabled: bool,

    /// Bodies handed to the physics step
    bodies: Vec<Body>,

    /// Presentation class of `bodies[i]`, kept index-aligned
    classes: Vec<BodyClass>,

    rng: SmallRng,
    ticks: u64,
}

impl Arena {
    /// Create an empty arena
    pub fn new(bounds: ArenaBounds, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        Self {
            bounds,
            gravity_enabled: false,
            bodies: Vec::new(),
            classes: Vec::new(),
            rng,
            ticks: 0,
        }
    }

    /// Create an arena from the driver configuration and fill it
    pub fn from_config(config: &ArenaConfig) -> Result<Self, BodyError> {
        let mut arena = Self::new(ArenaBounds::new(config.width, config.height), config.seed);
        arena.populate()?;
        Ok(arena)
    }

    /// Spawn the starting population, class by class
    pub fn populate(&mut self) -> Result<(), BodyError> {
        for class in BodyClass::ALL {
            let spread = class.preset().initial_speed;
            for _ in 0..class.initial_count() {
                let velocity = self.random_velocity(spread);
                self.spawn(class, velocity)?;
            }
        }
        log::debug!("Spawned initial population of {}", self.bodies.len());
        Ok(())
    }

    /// Add one body of a random class
    pub fn add_random_body(&mut self) -> Result<BodyClass, BodyError> {
        let class = BodyClass::ALL[self.rng.gen_range(0..BodyClass::ALL.len())];
        let velocity = self.random_velocity(ADDED_BODY_SPEED);
        self.spawn(class, velocity)?;
        log::debug!(
            "Added {} body (rgb {:?}), population {}",
            class,
            class.color(),
            self.bodies.len()
        );
        Ok(class)
    }

    /// Remove one body chosen at random; returns None when the arena is empty
    pub fn remove_random_body(&mut self) -> Option<(Body, BodyClass)> {
        if self.bodies.is_empty() {
            return None;
        }
        let index = self.rng.gen_range(0..self.bodies.len());
        let body = self.bodies.remove(index);
        let class = self.classes.remove(index);
        log::debug!("Removed {} body, population {}", class, self.bodies.len());
        Some((body, class))
    }

    /// Flip the physics regime
    ///
    /// Leaving gravity mode kicks every body with a random velocity boost so
    /// bodies resting on the floor start moving again.
    pub fn toggle_gravity(&mut self) {
        self.gravity_enabled = !self.gravity_enabled;
        if !self.gravity_enabled {
            for i in 0..self.bodies.len() {
                let boost = self.random_velocity(GRAVITY_OFF_BOOST);
                self.bodies[i].velocity += boost;
            }
        }
        log::info!("{}", self.status());
    }

    /// Apply a driver command between ticks
    pub fn apply(&mut self, command: Command) -> Result<CommandOutcome, BodyError> {
        match command {
            Command::ToggleGravity => self.toggle_gravity(),
            Command::AddBody => {
                self.add_random_body()?;
            }
            Command::RemoveBody => {
                if self.remove_random_body().is_none() {
                    log::debug!("Nothing to remove");
                }
            }
            Command::Pause => return Ok(CommandOutcome::TogglePause),
            Command::Quit => return Ok(CommandOutcome::Quit),
        }
        Ok(CommandOutcome::Continue)
    }

    /// Advance the simulation by one tick
    pub fn tick(&mut self) -> StepStats {
        self.ticks += 1;
        physics::step(&mut self.bodies, self.bounds, self.gravity_enabled)
    }

    /// Status line shown to the user
    pub fn status(&self) -> &'static str {
        if self.gravity_enabled {
            "Gravity: ON"
        } else {
            "Gravity: OFF"
        }
    }

    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            population: self.bodies.len(),
            kinetic_energy: self.bodies.iter().map(Body::kinetic_energy).sum(),
            momentum: self.bodies.iter().map(Body::momentum).sum(),
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Bodies paired with their presentation class
    pub fn iter(&self) -> impl Iterator<Item = (&Body, BodyClass)> {
        self.bodies.iter().zip(self.classes.iter().copied())
    }

    pub fn bounds(&self) -> ArenaBounds {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: ArenaBounds) {
        self.bounds = bounds;
    }

    pub fn gravity_enabled(&self) -> bool {
        self.gravity_enabled
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    fn spawn(&mut self, class: BodyClass, velocity: DVec2) -> Result<(), BodyError> {
        let position = self.random_position();
        let body = Body::new(BODY_RADIUS, position, velocity, class.max_speed())?;
        self.bodies.push(body);
        self.classes.push(class);
        Ok(())
    }

    fn random_position(&mut self) -> DVec2 {
        DVec2::new(
            random_coordinate(&mut self.rng, self.bounds.width),
            random_coordinate(&mut self.rng, self.bounds.height),
        )
    }

    fn random_velocity(&mut self, spread: f64) -> DVec2 {
        DVec2::new(
            self.rng.gen_range(-spread..spread),
            self.rng.gen_range(-spread..spread),
        )
    }
}

/// Uniform coordinate inside the spawn margin, or the center of a small axis
///
/// rand panics on a non-finite range, so an unbounded axis falls back too.
fn random_coordinate(rng: &mut impl Rng, extent: f64) -> f64 {
    let low = SPAWN_MARGIN;
    let high = extent - SPAWN_MARGIN;
    if high > low && high.is_finite() {
        rng.gen_range(low..high)
    } else {
        extent / 2.0
    }
}
