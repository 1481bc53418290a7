//! Single keydown entry point of the surface.

use crate::dom::ElementTree;
use crate::event::SurfaceEvent;
use crate::focus::{FocusTrapController, TabDirection};
use crate::keybindings::{Action, KeyBindings};
use crate::window_state::{ScreenMode, WindowState};

/// A state change the router asks its owner to carry out. The router never
/// flips window flags itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionRequest {
    Minimize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SurfaceKey {
    Tab(TabDirection),
    Escape,
    Other,
}

#[derive(Debug, Clone)]
pub struct KeyRouter {
    bindings: KeyBindings,
}

impl Default for KeyRouter {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

impl KeyRouter {
    pub fn new(bindings: KeyBindings) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    fn classify(&self, event: &SurfaceEvent) -> SurfaceKey {
        let key = event.key_event();
        if self.bindings.matches(Action::FocusPrev, key) {
            SurfaceKey::Tab(TabDirection::Backward)
        } else if self.bindings.matches(Action::FocusNext, key) {
            SurfaceKey::Tab(TabDirection::Forward)
        } else if self.bindings.matches(Action::Dismiss, key) {
            SurfaceKey::Escape
        } else {
            SurfaceKey::Other
        }
    }

    /// Handle one keydown that reached the surface.
    ///
    /// Propagation is always stopped since the surface is modal. Tab runs the
    /// focus trap unless minimized; Escape asks for a minimize only in
    /// [`ScreenMode::OpenTrapped`]. Any focus move happens before returning.
    pub fn handle_key_down(
        &self,
        state: &WindowState,
        tree: &mut ElementTree,
        trap: &FocusTrapController,
        event: &mut SurfaceEvent,
    ) -> Option<TransitionRequest> {
        event.stop_propagation();
        let mode = state.mode();
        match (self.classify(event), mode) {
            (SurfaceKey::Tab(_), ScreenMode::Minimized) => None,
            (SurfaceKey::Tab(direction), _) => {
                let outcome = trap.handle_tab_key(tree, event, direction);
                tracing::trace!(?mode, ?outcome, "tab handled");
                None
            }
            (SurfaceKey::Escape, ScreenMode::OpenTrapped) => {
                tracing::debug!("escape requests minimize");
                Some(TransitionRequest::Minimize)
            }
            (SurfaceKey::Escape, _) => {
                tracing::debug!(?mode, "escape ignored");
                None
            }
            (SurfaceKey::Other, _) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::{Element, ElementId};
    use crossterm::event::{KeyCode, KeyModifiers};

    fn fixture() -> (ElementTree, FocusTrapController, Vec<ElementId>) {
        let mut tree = ElementTree::new();
        let root = tree.insert_root(Element::container());
        let ids = ["a", "b", "c"]
            .into_iter()
            .map(|label| tree.append(root, Element::button(label)).unwrap())
            .collect();
        let mut trap = FocusTrapController::new();
        trap.handle_root_ref(Some(root)).unwrap();
        (tree, trap, ids)
    }

    #[test]
    fn every_key_stops_propagation() {
        let (mut tree, trap, _) = fixture();
        let router = KeyRouter::default();
        for state in WindowState::all() {
            for code in [KeyCode::Tab, KeyCode::Esc, KeyCode::Char('x'), KeyCode::Enter] {
                let mut ev = SurfaceEvent::key(code, KeyModifiers::NONE);
                router.handle_key_down(&state, &mut tree, &trap, &mut ev);
                assert!(ev.propagation_stopped(), "{state:?} {code:?}");
            }
        }
    }

    #[test]
    fn minimized_ignores_tab() {
        let (mut tree, trap, ids) = fixture();
        let router = KeyRouter::default();
        tree.focus(ids[2]);
        let state = WindowState::new().with_minimized(true);
        let mut ev = SurfaceEvent::key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(router.handle_key_down(&state, &mut tree, &trap, &mut ev), None);
        assert!(!ev.default_prevented());
        assert_eq!(tree.active_element(), Some(ids[2]));
    }

    #[test]
    fn windowed_still_traps_tab() {
        let (mut tree, trap, ids) = fixture();
        let router = KeyRouter::default();
        tree.focus(ids[2]);
        let state = WindowState::new().with_windowed(true);
        let mut ev = SurfaceEvent::key(KeyCode::Tab, KeyModifiers::NONE);
        router.handle_key_down(&state, &mut tree, &trap, &mut ev);
        assert!(ev.default_prevented());
        assert_eq!(tree.active_element(), Some(ids[0]));
    }

    #[test]
    fn escape_requests_minimize_only_when_trapped() {
        let (mut tree, trap, _) = fixture();
        let router = KeyRouter::default();
        for state in WindowState::all() {
            let mut ev = SurfaceEvent::key(KeyCode::Esc, KeyModifiers::NONE);
            let request = router.handle_key_down(&state, &mut tree, &trap, &mut ev);
            let expected = (!state.minimized() && !state.windowed())
                .then_some(TransitionRequest::Minimize);
            assert_eq!(request, expected, "{state:?}");
        }
    }
}
