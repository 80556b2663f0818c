// Engine modules: physics kernel, tick clock, input

pub mod game_loop;
pub mod input;
pub mod physics;
