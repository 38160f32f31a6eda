//! Input actions and per-tick snapshots
//!
//! Device handling lives outside the simulation. Whatever produces input
//! reduces it to the three recognised actions; the physics step reads one
//! `InputState` copy per tick.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// Recognised player actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
}

impl Action {
    /// Map a keyboard code (DOM `KeyboardEvent.code` names) to an action
    pub fn from_key_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Action::MoveLeft),
            "ArrowRight" | "KeyD" => Some(Action::MoveRight),
            "Space" | "ArrowUp" | "KeyW" => Some(Action::Jump),
            _ => None,
        }
    }
}

/// Which actions are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

impl InputState {
    /// State with exactly the given actions held
    pub fn with(actions: &[Action]) -> Self {
        let mut state = Self::default();
        for &action in actions {
            state.set(action, true);
        }
        state
    }

    pub fn set(&mut self, action: Action, held: bool) {
        match action {
            Action::MoveLeft => self.move_left = held,
            Action::MoveRight => self.move_right = held,
            Action::Jump => self.jump = held,
        }
    }

    pub fn is_held(&self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left,
            Action::MoveRight => self.move_right,
            Action::Jump => self.jump,
        }
    }

    /// Apply a raw key press/release. Unknown codes are ignored; returns
    /// whether the code was recognised.
    pub fn apply_key(&mut self, code: &str, pressed: bool) -> bool {
        match Action::from_key_code(code) {
            Some(action) => {
                self.set(action, pressed);
                true
            }
            None => false,
        }
    }
}

/// Anything the scheduler can read an input snapshot from
pub trait InputSource {
    fn snapshot(&self) -> InputState;
}

impl InputSource for InputState {
    fn snapshot(&self) -> InputState {
        *self
    }
}

/// Input state shared with an asynchronous producer (e.g. an event thread)
///
/// Writers and the per-tick snapshot take the same lock, so a tick never
/// sees a half-applied update.
#[derive(Debug, Clone, Default)]
pub struct SharedInput {
    inner: Arc<Mutex<InputState>>,
}

impl SharedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, action: Action, held: bool) {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .set(action, held);
    }

    pub fn apply_key(&self, code: &str, pressed: bool) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .apply_key(code, pressed)
    }
}

impl InputSource for SharedInput {
    fn snapshot(&self) -> InputState {
        // Plain Copy data, so a poisoned lock still holds a usable value
        *self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
