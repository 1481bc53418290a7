use crate::dom::{ElementId, ElementTree, MountError, RefHandle};

use super::trap::FocusTrapController;

/// Restores focus across minimize/restore transitions.
///
/// Holds the anchor control (the chat toggle button) so focus has somewhere
/// visible to land once the surface is hidden.
#[derive(Debug, Clone)]
pub struct RefocusManager {
    anchor: RefHandle<ElementId>,
}

impl Default for RefocusManager {
    fn default() -> Self {
        Self::new()
    }
}

impl RefocusManager {
    pub const fn new() -> Self {
        Self {
            anchor: RefHandle::new("anchor control"),
        }
    }

    pub fn anchor(&self) -> &RefHandle<ElementId> {
        &self.anchor
    }

    pub fn handle_anchor_ref(&mut self, anchor: Option<ElementId>) -> Result<(), MountError> {
        self.anchor.handle_ref(anchor)
    }

    /// Surface went from minimized to open.
    pub fn on_restore(&self, tree: &mut ElementTree, trap: &FocusTrapController) -> bool {
        trap.add_focus_first_element(tree)
    }

    /// Surface went from open to minimized.
    pub fn on_minimize(&self, tree: &mut ElementTree) -> bool {
        let Some(anchor) = self.anchor.get() else {
            // anchor must mount before the first minimize
            tracing::warn!("minimize requested before the anchor control mounted");
            return false;
        };
        tree.focus(anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    #[test]
    fn minimize_without_anchor_keeps_focus() {
        let mut tree = ElementTree::new();
        let root = tree.insert_root(Element::container());
        let a = tree.append(root, Element::button("a")).unwrap();
        tree.focus(a);
        let refocus = RefocusManager::new();
        assert!(!refocus.on_minimize(&mut tree));
        assert_eq!(tree.active_element(), Some(a));
    }

    #[test]
    fn minimize_focuses_anchor() {
        let mut tree = ElementTree::new();
        let root = tree.insert_root(Element::container());
        let a = tree.append(root, Element::button("a")).unwrap();
        let anchor = tree.append(root, Element::button("chat")).unwrap();
        tree.focus(a);
        let mut refocus = RefocusManager::new();
        refocus.handle_anchor_ref(Some(anchor)).unwrap();
        assert!(refocus.on_minimize(&mut tree));
        assert_eq!(tree.active_element(), Some(anchor));
    }
}
