//! Raw input events and their translation into gameplay intents.
//!
//! The window backend converts its native events into [`RawEvent`]s, which are
//! queued and drained once per frame. [`InputMapper::translate`] is stateless per
//! event: it only needs the window's pixel size to normalize pointer positions.
//!
//! - **Pointer:** pixel `(px, py)` maps to `x = (px+0.5)/w*2-1`,
//!   `y = (py+0.5)/h*-2+1`, so up is positive and the window spans `[-1, 1]`.
//!
//! - **Key repeat:** the OS re-sends presses while a key is held. Direction keys
//!   pass repeats through (the press simply re-applies); jump, run and ability
//!   keys drop them so a held key acts once per press edge.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    D,
    Q,
    E,
    LeftShift,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseBtn {
    Left,
    Right,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbilityMode {
    #[default]
    Throw,
    Shoot,
}

/// Backend-independent device event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawEvent {
    PointerMoved { x: f64, y: f64 },
    MouseButton { button: MouseBtn, state: KeyState },
    Key { key: Key, state: KeyState, repeat: bool },
    Quit,
}

/// Discrete action signal consumed by the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    PointerMoved { x: f32, y: f32 },
    Quit,
    Jump,
    MoveLeft(KeyState),
    MoveRight(KeyState),
    Run(KeyState),
    SetAbilityMode(AbilityMode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputMapper {
    width: u32,
    height: u32,
}

impl InputMapper {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
        }
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    pub fn translate(&self, event: &RawEvent) -> Option<Intent> {
        match *event {
            RawEvent::PointerMoved { x, y } => {
                let (nx, ny) = self.normalize_pointer(x, y);
                Some(Intent::PointerMoved { x: nx, y: ny })
            }
            RawEvent::MouseButton { .. } => None,
            RawEvent::Quit => Some(Intent::Quit),
            RawEvent::Key { key, state, repeat } => match (key, state) {
                (Key::Escape, KeyState::Pressed) => Some(Intent::Quit),
                (Key::W, KeyState::Pressed) if !repeat => Some(Intent::Jump),
                (Key::A, state) => Some(Intent::MoveLeft(state)),
                (Key::D, state) => Some(Intent::MoveRight(state)),
                (Key::LeftShift, state) if !repeat => Some(Intent::Run(state)),
                (Key::Q, KeyState::Pressed) if !repeat => {
                    Some(Intent::SetAbilityMode(AbilityMode::Throw))
                }
                (Key::E, KeyState::Pressed) if !repeat => {
                    Some(Intent::SetAbilityMode(AbilityMode::Shoot))
                }
                _ => None,
            },
        }
    }

    /// Pixel position to normalized device coordinates, y up.
    pub fn normalize_pointer(&self, px: f64, py: f64) -> (f32, f32) {
        let x = (px as f32 + 0.5) / self.width as f32 * 2.0 - 1.0;
        let y = (py as f32 + 0.5) / self.height as f32 * -2.0 + 1.0;
        (x, y)
    }
}
