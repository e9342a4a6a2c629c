//! Keyboard and mouse input state.
//!
//! The engine takes one [`InputSnapshot`] from the window per frame and
//! feeds it to [`InputState`], which keeps the previous frame's key set
//! around so press and release edges fall out of a set difference. That
//! keeps edge detection independent of the windowing backend and
//! testable without a window.

use std::collections::HashSet;

pub use minifb::{Key, MouseButton};

/// Everything the window reports about input for one frame.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    /// Keys currently held down.
    pub keys: Vec<Key>,
    /// Mouse position relative to the window, `(0, 0)` top-left.
    pub mouse_pos: Option<(f32, f32)>,
    /// Mouse buttons currently held down: left, middle, right.
    pub buttons: [bool; 3],
    /// Scroll wheel movement this frame.
    pub scroll: Option<(f32, f32)>,
}

/// Per-frame input state with edge detection.
#[derive(Debug, Default)]
pub struct InputState {
    down: HashSet<Key>,
    previous: HashSet<Key>,
    mouse_pos: Option<(f32, f32)>,
    buttons: [bool; 3],
    scroll: Option<(f32, f32)>,
}

impl InputState {
    /// Create an idle input state: no keys down, no mouse position.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rotate in a new frame's snapshot. The current key set becomes
    /// the previous one, so `pressed`/`released` report edges against
    /// the frame before this call.
    pub fn begin_frame(&mut self, snapshot: InputSnapshot) {
        self.previous = std::mem::take(&mut self.down);
        self.down = snapshot.keys.into_iter().collect();
        self.mouse_pos = snapshot.mouse_pos;
        self.buttons = snapshot.buttons;
        self.scroll = snapshot.scroll;
    }

    /// Return to the idle state, clearing both frames.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check if the key is currently down.
    #[must_use]
    pub fn is_down(&self, key: Key) -> bool {
        self.down.contains(&key)
    }

    /// Check if the key went down this frame (down now, up last frame).
    /// A key held across frames reports `pressed` only once.
    #[must_use]
    pub fn pressed(&self, key: Key) -> bool {
        self.down.contains(&key) && !self.previous.contains(&key)
    }

    /// Check if the key went up this frame (up now, down last frame).
    #[must_use]
    pub fn released(&self, key: Key) -> bool {
        !self.down.contains(&key) && self.previous.contains(&key)
    }

    /// All keys currently down, in no particular order.
    #[must_use]
    pub fn keys_down(&self) -> Vec<Key> {
        self.down.iter().copied().collect()
    }

    /// Mouse position relative to the window, `(0, 0)` top-left, or
    /// `None` when no window is tracked.
    #[must_use]
    pub fn mouse_pos(&self) -> Option<(f32, f32)> {
        self.mouse_pos
    }

    /// Check if the mouse button is currently down.
    #[must_use]
    pub fn mouse_button_down(&self, button: MouseButton) -> bool {
        let index = match button {
            MouseButton::Left => 0,
            MouseButton::Middle => 1,
            MouseButton::Right => 2,
        };
        self.buttons[index]
    }

    /// Scroll wheel movement this frame, if any.
    #[must_use]
    pub fn scroll_wheel(&self) -> Option<(f32, f32)> {
        self.scroll
    }
}
