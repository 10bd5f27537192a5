//! Per-player input session: mouse mode, armed order, double-click timer.

use skirmish_core::enums::{MouseMode, OrderKind};

/// Remembers when the last group move was issued.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DoubleClickTimer {
    /// `None` until the first call.
    last: Option<f64>,
}

impl DoubleClickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// When the last click happened, if ever.
    pub fn last_click(&self) -> Option<f64> {
        self.last
    }

    /// Record a click at `now` (seconds). True when the previous click came
    /// less than `window` seconds earlier. The first click is never a double.
    pub fn double_clicked(&mut self, now: f64, window: f64) -> bool {
        let previous = self.last.replace(now);
        match previous {
            Some(last) => now - last < window,
            None => false,
        }
    }
}

/// What a click resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Run the armed order at the click point.
    Execute(OrderKind),
    /// The armed order was dropped.
    Cancelled,
    /// Plain secondary click: move the selection there.
    MoveUnits,
    /// Nothing to do.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSession {
    mouse_mode: MouseMode,
    armed: Option<OrderKind>,
    double_click: DoubleClickTimer,
}

impl InputSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mouse_mode(&self) -> MouseMode {
        self.mouse_mode
    }

    pub fn armed(&self) -> Option<OrderKind> {
        self.armed
    }

    pub fn double_click(&self) -> &DoubleClickTimer {
        &self.double_click
    }

    pub fn double_click_mut(&mut self) -> &mut DoubleClickTimer {
        &mut self.double_click
    }

    /// Wait for a target point for `order`. Replaces any order already armed.
    pub fn arm(&mut self, order: OrderKind) {
        self.mouse_mode = MouseMode::Command;
        self.armed = Some(order);
    }

    /// Back to standard mode with nothing armed.
    pub fn disarm(&mut self) {
        self.mouse_mode = MouseMode::Standard;
        self.armed = None;
    }

    /// In command mode, hands out the armed order and returns to standard.
    pub fn primary_click(&mut self) -> ClickOutcome {
        match (self.mouse_mode, self.armed) {
            (MouseMode::Command, Some(order)) => {
                self.disarm();
                ClickOutcome::Execute(order)
            }
            _ => {
                self.disarm();
                ClickOutcome::Ignored
            }
        }
    }

    /// In command mode, cancels; otherwise asks for a move.
    pub fn secondary_click(&mut self) -> ClickOutcome {
        match self.mouse_mode {
            MouseMode::Command => {
                self.disarm();
                ClickOutcome::Cancelled
            }
            MouseMode::Standard => ClickOutcome::MoveUnits,
        }
    }
}
