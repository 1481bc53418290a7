use crate::screen::ScreenCallbacks;
use crate::window_state::WindowState;

/// Host-side owner of the window flags.
///
/// The screen only requests transitions; this type applies them and records
/// that a new render must be committed. The dirty bit is also raised for
/// content updates so the post-commit hook runs for those renders too.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostState {
    window: WindowState,
    dirty: bool,
    unread: u32,
}

impl HostState {
    pub fn new(initial: WindowState) -> Self {
        Self {
            window: initial,
            dirty: false,
            unread: 0,
        }
    }

    pub fn window(&self) -> WindowState {
        self.window
    }

    /// Apply new flags. `triggered` selects the mounted presentation (header
    /// or close button) and is kept as it was at mount.
    pub fn set_window(&mut self, next: WindowState) {
        let triggered = self.window.triggered();
        if next.triggered() != triggered {
            tracing::warn!(triggered, "triggered is fixed at mount; change ignored");
        }
        let next = next.with_triggered(triggered);
        if self.window == next {
            return;
        }
        self.window = next;
        self.dirty = true;
    }

    pub fn set_minimized(&mut self, minimized: bool) {
        self.set_window(self.window.with_minimized(minimized));
    }

    pub fn toggle_windowed(&mut self) {
        self.set_window(self.window.with_windowed(!self.window.windowed()));
    }

    pub fn toggle_expanded(&mut self) {
        self.set_window(self.window.with_expanded(!self.window.expanded()));
    }

    /// Content changed without touching the flags.
    pub fn mark_content_updated(&mut self) {
        self.dirty = true;
    }

    /// The state to commit, once per change.
    pub fn take_change(&mut self) -> Option<WindowState> {
        if self.dirty {
            self.dirty = false;
            Some(self.window)
        } else {
            None
        }
    }

    pub fn unread(&self) -> u32 {
        self.unread
    }

    /// Count an incoming message; only counted while the chat is hidden.
    pub fn note_incoming(&mut self) {
        if self.window.minimized() {
            self.unread = self.unread.saturating_add(1);
        }
    }
}

impl ScreenCallbacks for HostState {
    fn on_minimize(&mut self) {
        self.set_minimized(true);
    }

    fn on_restore(&mut self) {
        self.unread = 0;
        self.set_minimized(false);
    }

    fn on_open_window(&mut self) {
        self.set_window(self.window.with_windowed(true));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_changes_are_taken_once() {
        let mut s = HostState::new(WindowState::new());
        s.set_minimized(false);
        // no change -> None
        assert!(s.take_change().is_none());
        s.on_minimize();
        assert_eq!(s.take_change(), Some(WindowState::new().with_minimized(true)));
        // consumed
        assert!(s.take_change().is_none());
        s.mark_content_updated();
        assert!(s.take_change().is_some());
    }

    #[test]
    fn triggered_cannot_change_after_mount() {
        let mut s = HostState::new(WindowState::new());
        s.set_window(WindowState::new().with_triggered(true));
        assert!(!s.window().triggered());
        assert!(s.take_change().is_none());

        let mut s = HostState::new(WindowState::new().with_triggered(true));
        s.set_window(WindowState::new().with_minimized(true));
        assert_eq!(
            s.take_change(),
            Some(WindowState::new().with_minimized(true).with_triggered(true))
        );
    }

    #[test]
    fn unread_counts_only_while_minimized() {
        let mut s = HostState::new(WindowState::new());
        s.note_incoming();
        assert_eq!(s.unread(), 0);
        s.on_minimize();
        s.note_incoming();
        s.note_incoming();
        assert_eq!(s.unread(), 2);
        s.on_restore();
        assert_eq!(s.unread(), 0);
        assert!(!s.window().minimized());
    }
}
