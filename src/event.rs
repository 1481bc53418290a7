//! Key events as delivered to the surface.
//!
//! `SurfaceEvent` wraps a crossterm `KeyEvent` with the two flags a handler
//! may set: whether the host's default handling is suppressed, and whether
//! the event may continue to ancestors.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceEvent {
    key: KeyEvent,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl SurfaceEvent {
    pub const fn new(key: KeyEvent) -> Self {
        Self {
            key,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Shorthand for a press of `code` with `mods`.
    pub fn key(code: KeyCode, mods: KeyModifiers) -> Self {
        Self::new(KeyEvent::new(code, mods))
    }

    pub fn key_event(&self) -> &KeyEvent {
        &self.key
    }

    pub fn code(&self) -> KeyCode {
        self.key.code
    }

    pub fn shift_key(&self) -> bool {
        self.key.code == KeyCode::BackTab || self.key.modifiers.contains(KeyModifiers::SHIFT)
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

impl From<KeyEvent> for SurfaceEvent {
    fn from(key: KeyEvent) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backtab_counts_as_shift() {
        assert!(SurfaceEvent::key(KeyCode::BackTab, KeyModifiers::NONE).shift_key());
        assert!(SurfaceEvent::key(KeyCode::Tab, KeyModifiers::SHIFT).shift_key());
        assert!(!SurfaceEvent::key(KeyCode::Tab, KeyModifiers::NONE).shift_key());
    }

    #[test]
    fn flags_start_clear() {
        let mut ev = SurfaceEvent::key(KeyCode::Esc, KeyModifiers::NONE);
        assert!(!ev.default_prevented());
        assert!(!ev.propagation_stopped());
        ev.stop_propagation();
        assert!(ev.propagation_stopped());
        assert!(!ev.default_prevented());
    }
}
