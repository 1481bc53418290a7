use crate::dom::{ElementId, ElementTree, MountError, RefHandle};
use crate::event::SurfaceEvent;

use super::scanner::scan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabDirection {
    Forward,
    Backward,
}

impl TabDirection {
    pub fn from_event(event: &SurfaceEvent) -> Self {
        if event.shift_key() {
            TabDirection::Backward
        } else {
            TabDirection::Forward
        }
    }
}

/// What the trap did with a Tab press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabOutcome {
    /// Nothing focusable under the root; the event is untouched.
    Empty,
    /// A single focusable element keeps focus; default prevented.
    Pinned(ElementId),
    /// Focus wrapped from one end of the ring to the other; default prevented.
    Wrapped(ElementId),
    /// Focus is inside the ring; the host's native order applies.
    Native,
}

/// Keeps Tab focus inside the surface subtree.
///
/// The controller owns the surface root reference and rescans on every call,
/// so content mounted or removed between keystrokes is always accounted for.
#[derive(Debug, Clone)]
pub struct FocusTrapController {
    root: RefHandle<ElementId>,
}

impl Default for FocusTrapController {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusTrapController {
    pub const fn new() -> Self {
        Self {
            root: RefHandle::new("surface root"),
        }
    }

    pub fn root(&self) -> &RefHandle<ElementId> {
        &self.root
    }

    pub fn handle_root_ref(&mut self, root: Option<ElementId>) -> Result<(), MountError> {
        self.root.handle_ref(root)
    }

    pub fn focusable_elements(&self, tree: &ElementTree) -> Vec<ElementId> {
        scan(tree, &self.root)
    }

    /// Focus the first focusable element, if there is one.
    pub fn add_focus_first_element(&self, tree: &mut ElementTree) -> bool {
        match self.focusable_elements(tree).first() {
            Some(&first) => tree.focus(first),
            None => false,
        }
    }

    pub fn handle_tab_key(
        &self,
        tree: &mut ElementTree,
        event: &mut SurfaceEvent,
        direction: TabDirection,
    ) -> TabOutcome {
        let focusable = self.focusable_elements(tree);
        let (Some(&first), Some(&last)) = (focusable.first(), focusable.last()) else {
            return TabOutcome::Empty;
        };

        if focusable.len() == 1 {
            tree.focus(first);
            event.prevent_default();
            return TabOutcome::Pinned(first);
        }

        let active = tree.active_element();
        let target = match direction {
            TabDirection::Forward if active == Some(last) => first,
            TabDirection::Backward if active == Some(first) => last,
            _ => return TabOutcome::Native,
        };
        tree.focus(target);
        event.prevent_default();
        tracing::debug!(?direction, element = target.index(), "focus wrapped");
        TabOutcome::Wrapped(target)
    }
}
