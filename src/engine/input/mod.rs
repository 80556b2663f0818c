// Input handling for the headless driver
//
// - `action`: driver commands and their key bindings
// - `buffer`: command queue and the stdin reader thread feeding it
//
// Commands are only ever applied by the simulation thread between ticks, so
// the body collection is never resized while a step is running.

pub mod action;
pub mod buffer;

pub use action::{Command, KeyBindings};
pub use buffer::{CommandQueue, ConsoleInput};
