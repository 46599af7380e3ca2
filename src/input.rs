//! Input snapshot and the key-hold tracker that produces it.
//!
//! Terminals report key presses (and OS auto-repeat) but often no releases,
//! so "held" is inferred: a key counts as held if its last press or repeat
//! arrived within [`HOLD_WINDOW`] ticks. Terminals with keyboard enhancement
//! also send `Release`, which drops the key immediately.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// 4 ticks at 60 Hz ≈ 67 ms, shorter than any OS repeat interval once the
/// initial repeat delay has passed.
pub const HOLD_WINDOW: u64 = 4;

/// Per-tick action state read by the simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
}

/// Edge-triggered requests for the host, delivered once per key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostCommand {
    TogglePause,
    Quit,
}

#[derive(Debug, Default)]
pub struct KeyTracker {
    // Key -> tick it was last seen pressed or repeated.
    last_seen: HashMap<KeyCode, u64>,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key event observed during tick `frame`.
    pub fn handle(&mut self, event: &KeyEvent, frame: u64) -> Option<HostCommand> {
        let code = normalize(event.code);
        match event.kind {
            KeyEventKind::Press => {
                self.last_seen.insert(code, frame);
                command_for(code, event.modifiers)
            }
            KeyEventKind::Repeat => {
                self.last_seen.insert(code, frame);
                None
            }
            KeyEventKind::Release => {
                self.last_seen.remove(&code);
                None
            }
        }
    }

    pub fn is_held(&self, code: KeyCode, frame: u64) -> bool {
        self.last_seen
            .get(&normalize(code))
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
            .unwrap_or(false)
    }

    pub fn snapshot(&self, frame: u64) -> InputSnapshot {
        InputSnapshot {
            move_left: self.is_held(KeyCode::Left, frame)
                || self.is_held(KeyCode::Char('a'), frame),
            move_right: self.is_held(KeyCode::Right, frame)
                || self.is_held(KeyCode::Char('d'), frame),
            fire: self.is_held(KeyCode::Char(' '), frame),
        }
    }

    /// Forget every key, e.g. when leaving the pause overlay.
    pub fn clear(&mut self) {
        self.last_seen.clear();
    }
}

// Shift is irrelevant for game keys, so 'A' and 'a' are the same key.
fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

fn command_for(code: KeyCode, modifiers: KeyModifiers) -> Option<HostCommand> {
    match code {
        KeyCode::Esc | KeyCode::Char('p') => Some(HostCommand::TogglePause),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(HostCommand::Quit),
        KeyCode::Char('q') => Some(HostCommand::Quit),
        _ => None,
    }
}
