use crate::{WindowFlags, WindowHint, WindowType, WINDOW_TYPES};

/// Tracks the user's choice of window type and hints.
///
/// There is always exactly one active window type, never none.
/// The hints are an independent subset of the hint catalog.
/// The combined flag value is derived from this state on demand and
/// never stored separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSelection {
    window_type: WindowType,
    hints: WindowFlags,
}

impl Default for FlagSelection {
    fn default() -> Self {
        Self {
            window_type: WINDOW_TYPES[0],
            hints: WindowFlags::empty(),
        }
    }
}

impl FlagSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The active window type.
    pub fn window_type(&self) -> WindowType {
        self.window_type
    }

    /// Set the active window type, replacing the previous one.
    pub fn set_type(&mut self, window_type: WindowType) {
        self.window_type = window_type;
    }

    /// Is the hint active?
    pub fn hint_active(&self, hint: WindowHint) -> bool {
        self.hints.contains(hint.bits())
    }

    /// Activate/deactivate a hint. Idempotent.
    pub fn toggle_hint(&mut self, hint: WindowHint, active: bool) {
        self.hints.set(hint.bits(), active);
    }

    /// The active type pattern OR-ed with all active hint bits.
    pub fn combined_flags(&self) -> WindowFlags {
        self.window_type.bits() | self.hints
    }
}
