// Driver command definitions and key mappings

use std::collections::HashMap;

/// Represents everything the driver can be asked to do between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Physics regime
    ToggleGravity,

    // Population
    AddBody,
    RemoveBody,

    // Meta
    Pause,
    Quit,
}

/// Escape character, bound to Quit alongside `q`
pub const ESCAPE: char = '\u{1b}';

/// Default key bindings
pub fn default_bindings() -> Vec<(char, Command)> {
    vec![
        ('g', Command::ToggleGravity),
        ('a', Command::AddBody),
        ('r', Command::RemoveBody),
        ('p', Command::Pause),
        ('q', Command::Quit),
        (ESCAPE, Command::Quit),
    ]
}

/// Key to command lookup table
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<char, Command>,
}

impl KeyBindings {
    /// Create a table from a list of bindings; later entries win
    pub fn from_bindings(bindings: Vec<(char, Command)>) -> Self {
        let mut table = HashMap::with_capacity(bindings.len());
        for (key, command) in bindings {
            table.insert(key.to_ascii_lowercase(), command);
        }
        Self { bindings: table }
    }

    /// Get the command bound to a key, ignoring case
    pub fn get(&self, key: char) -> Option<Command> {
        self.bindings.get(&key.to_ascii_lowercase()).copied()
    }

    /// Translate one console line into commands
    ///
    /// Every non-whitespace character is looked up on its own, so `"aag"`
    /// adds two bodies and then toggles gravity. Unknown keys are skipped.
    pub fn parse_line(&self, line: &str) -> Vec<Command> {
        line.chars()
            .filter(|c| !c.is_whitespace())
            .filter_map(|c| {
                let command = self.get(c);
                if command.is_none() {
                    log::warn!("Ignoring unbound key {:?}", c);
                }
                command
            })
            .collect()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::from_bindings(default_bindings())
    }
}
