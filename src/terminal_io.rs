use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::{error, info};

/// What the player asked for during one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Controls {
    pub row_direction: i8,
    pub column_direction: i8,
    pub fire: bool,
    pub quit: bool,
}

impl Controls {
    pub fn new(row_direction: i8, column_direction: i8, fire: bool) -> Self {
        Controls { row_direction, column_direction, fire, quit: false }
    }

    fn apply(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up => self.row_direction = -1,
            KeyCode::Down => self.row_direction = 1,
            KeyCode::Left => self.column_direction = -1,
            KeyCode::Right => self.column_direction = 1,
            KeyCode::Char(' ') => self.fire = true,
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            _ => {}
        }
    }
}

/// Non-blocking source of player controls, polled once per tick.
pub trait InputSource {
    fn read_controls(&mut self, tick: u64) -> io::Result<Controls>;
}

/// Reads the real keyboard, draining every event queued since the last tick.
#[derive(Debug, Default)]
pub struct KeyboardInput;

impl InputSource for KeyboardInput {
    fn read_controls(&mut self, _tick: u64) -> io::Result<Controls> {
        let mut controls = Controls::default();
        while event::poll(Duration::ZERO).map_err(|e| { error!("Failed to poll event: {}", e); e })? {
            let event = event::read().map_err(|e| { error!("Failed to read event: {}", e); e })?;
            if let Event::Key(key_event) = event {
                if key_event.kind != KeyEventKind::Release {
                    controls.apply(key_event.code);
                }
            }
        }
        if controls.quit {
            info!("Quit key pressed.");
        }
        Ok(controls)
    }
}

// --- ScriptedInput for headless runs and tests ---
pub struct ScriptedInput {
    script: HashMap<u64, Controls>,
    fallback: Controls,
}

impl ScriptedInput {
    pub fn new(script: HashMap<u64, Controls>) -> Self {
        ScriptedInput { script, fallback: Controls::default() }
    }

    /// The same controls on every tick.
    pub fn constant(controls: Controls) -> Self {
        ScriptedInput { script: HashMap::new(), fallback: controls }
    }
}

impl InputSource for ScriptedInput {
    fn read_controls(&mut self, tick: u64) -> io::Result<Controls> {
        Ok(self.script.remove(&tick).unwrap_or(self.fallback))
    }
}
