//! Visibility and layout flags of the chat surface.
//!
//! `WindowState` is supplied by the host on every render and is never mutated
//! by the controller. The derived [`ScreenMode`] decides which keyboard
//! behaviours are live.

/// The four independent presentation flags.
///
/// - `minimized`: only the toggle button is interactive.
/// - `expanded`: the surface takes the full available size.
/// - `windowed`: the surface is presented in a separate window and dismissed
///   from outside, never by Escape.
/// - `triggered`: inline presentation opened by an external trigger; the
///   header is replaced by a dedicated close button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WindowState {
    minimized: bool,
    expanded: bool,
    windowed: bool,
    triggered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenMode {
    /// Neither the focus trap nor Escape dismissal is active.
    Minimized,
    /// Focus trap and Escape dismissal are both active.
    OpenTrapped,
    /// Focus trap is active, Escape dismissal is not.
    OpenWindowed,
}

impl WindowState {
    pub const fn new() -> Self {
        Self {
            minimized: false,
            expanded: false,
            windowed: false,
            triggered: false,
        }
    }

    pub const fn minimized(&self) -> bool {
        self.minimized
    }

    pub const fn expanded(&self) -> bool {
        self.expanded
    }

    pub const fn windowed(&self) -> bool {
        self.windowed
    }

    pub const fn triggered(&self) -> bool {
        self.triggered
    }

    pub const fn with_minimized(mut self, minimized: bool) -> Self {
        self.minimized = minimized;
        self
    }

    pub const fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub const fn with_windowed(mut self, windowed: bool) -> Self {
        self.windowed = windowed;
        self
    }

    pub const fn with_triggered(mut self, triggered: bool) -> Self {
        self.triggered = triggered;
        self
    }

    pub const fn mode(&self) -> ScreenMode {
        if self.minimized {
            ScreenMode::Minimized
        } else if self.windowed {
            ScreenMode::OpenWindowed
        } else {
            ScreenMode::OpenTrapped
        }
    }

    /// Whether the surface is interactively visible.
    pub const fn is_interactive(&self) -> bool {
        !self.minimized
    }

    pub const fn traps_focus(&self) -> bool {
        !self.minimized
    }

    pub const fn escape_dismisses(&self) -> bool {
        !self.minimized && !self.windowed
    }

    /// In triggered mode the header is replaced by a close button.
    pub const fn shows_header(&self) -> bool {
        !self.triggered
    }

    pub const fn shows_close_button(&self) -> bool {
        self.triggered
    }

    /// Every combination of the four flags, used by exhaustive checks.
    pub fn all() -> impl Iterator<Item = WindowState> {
        (0u8..16).map(|bits| WindowState {
            minimized: bits & 1 != 0,
            expanded: bits & 2 != 0,
            windowed: bits & 4 != 0,
            triggered: bits & 8 != 0,
        })
    }
}

/// How a committed state relates to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateTransition {
    Restored,
    Minimized,
    /// `expanded`, `windowed` or `triggered` changed while visibility did not.
    LayoutChanged,
    Unchanged,
}

impl StateTransition {
    pub fn between(prev: WindowState, next: WindowState) -> Self {
        match (prev.minimized, next.minimized) {
            (true, false) => StateTransition::Restored,
            (false, true) => StateTransition::Minimized,
            _ if prev != next => StateTransition::LayoutChanged,
            _ => StateTransition::Unchanged,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_follows_minimized_then_windowed() {
        for state in WindowState::all() {
            let expected = match (state.minimized(), state.windowed()) {
                (true, _) => ScreenMode::Minimized,
                (false, true) => ScreenMode::OpenWindowed,
                (false, false) => ScreenMode::OpenTrapped,
            };
            assert_eq!(state.mode(), expected, "{state:?}");
            assert_eq!(
                state.escape_dismisses(),
                expected == ScreenMode::OpenTrapped
            );
            assert_eq!(state.traps_focus(), !state.minimized());
        }
    }

    #[test]
    fn all_enumerates_sixteen_distinct_states() {
        let states: std::collections::HashSet<_> = WindowState::all().collect();
        assert_eq!(states.len(), 16);
    }

    #[test]
    fn transitions_classify_visibility_changes() {
        let open = WindowState::new();
        let minimized = open.with_minimized(true);
        assert_eq!(
            StateTransition::between(minimized, open),
            StateTransition::Restored
        );
        assert_eq!(
            StateTransition::between(open, minimized),
            StateTransition::Minimized
        );
        assert_eq!(
            StateTransition::between(open, open.with_expanded(true)),
            StateTransition::LayoutChanged
        );
        assert_eq!(
            StateTransition::between(open, open),
            StateTransition::Unchanged
        );
    }

    #[test]
    fn triggered_swaps_header_for_close_button() {
        let state = WindowState::new().with_triggered(true);
        assert!(!state.shows_header());
        assert!(state.shows_close_button());
    }
}
