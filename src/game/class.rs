// Body classes - presentation tag plus spawn presets
// The kernel never sees the class; the arena keeps it alongside each body

use std::fmt;

/// Radius shared by every spawned body
pub const BODY_RADIUS: f64 = 15.0;

/// Spawn parameters for one class
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassPreset {
    /// Speed cap applied every tick
    pub max_speed: f64,
    /// Half-width of the initial per-axis velocity range
    pub initial_speed: f64,
    /// Display color as RGB
    pub color: [u8; 3],
}

/// Color class of a body; faster classes have a higher speed cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyClass {
    Red,
    Blue,
    Green,
}

const RED: ClassPreset = ClassPreset {
    max_speed: 7.0,
    initial_speed: 4.0,
    color: [255, 0, 0],
};

const BLUE: ClassPreset = ClassPreset {
    max_speed: 5.0,
    initial_speed: 2.5,
    color: [0, 0, 255],
};

const GREEN: ClassPreset = ClassPreset {
    max_speed: 3.0,
    initial_speed: 1.5,
    color: [0, 255, 0],
};

impl BodyClass {
    pub const ALL: [BodyClass; 3] = [BodyClass::Red, BodyClass::Blue, BodyClass::Green];

    pub fn preset(self) -> ClassPreset {
        match self {
            Self::Red => RED,
            Self::Blue => BLUE,
            Self::Green => GREEN,
        }
    }

    pub fn max_speed(self) -> f64 {
        self.preset().max_speed
    }

    /// Display color as RGB
    pub fn color(self) -> [u8; 3] {
        self.preset().color
    }

    /// Number of bodies of this class in the starting population
    pub fn initial_count(self) -> usize {
        match self {
            Self::Red => 4,
            Self::Blue | Self::Green => 3,
        }
    }
}

impl fmt::Display for BodyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
        };
        f.write_str(name)
    }
}
