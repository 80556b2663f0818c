// Command queue fed by the console reader

use super::action::{Command, KeyBindings};
use std::collections::VecDeque;
use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

/// Maximum number of pending commands to keep
const MAX_QUEUE_SIZE: usize = 64;

/// FIFO of commands waiting to be applied between ticks
#[derive(Debug, Default)]
pub struct CommandQueue {
    queue: VecDeque<Command>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::with_capacity(MAX_QUEUE_SIZE),
        }
    }

    /// Add a command, dropping the oldest one when the queue is full
    pub fn push(&mut self, command: Command) {
        if self.queue.len() == MAX_QUEUE_SIZE {
            if let Some(dropped) = self.queue.pop_front() {
                log::warn!("Command queue full, dropping {:?}", dropped);
            }
        }
        self.queue.push_back(command);
    }

    /// Take every pending command in arrival order
    pub fn drain(&mut self) -> Vec<Command> {
        self.queue.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Receiving end of the console reader thread
pub struct ConsoleInput {
    receiver: Receiver<Command>,
    closed: bool,
}

impl ConsoleInput {
    /// Spawn a thread that reads lines from stdin and forwards their commands
    ///
    /// End of input is forwarded as `Command::Quit`.
    pub fn spawn(bindings: KeyBindings) -> std::io::Result<Self> {
        Self::spawn_reader(bindings, || std::io::stdin().lock())
    }

    fn spawn_reader<R, F>(bindings: KeyBindings, open: F) -> std::io::Result<Self>
    where
        R: BufRead,
        F: FnOnce() -> R + Send + 'static,
    {
        let (sender, receiver) = mpsc::channel();
        thread::Builder::new()
            .name("console-input".into())
            .spawn(move || {
                let reader = open();
                for line in reader.lines() {
                    let line = match line {
                        Ok(line) => line,
                        Err(e) => {
                            log::warn!("Console read failed: {}", e);
                            break;
                        }
                    };
                    for command in bindings.parse_line(&line) {
                        if sender.send(command).is_err() {
                            return;
                        }
                    }
                }
                // Receiver may already be gone during shutdown
                let _ = sender.send(Command::Quit);
            })?;

        Ok(Self {
            receiver,
            closed: false,
        })
    }

    /// Move every command received so far into `queue` without blocking
    pub fn poll_into(&mut self, queue: &mut CommandQueue) {
        if self.closed {
            return;
        }
        loop {
            match self.receiver.try_recv() {
                Ok(command) => queue.push(command),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    self.closed = true;
                    break;
                }
            }
        }
    }
}
