use crate::dom::{Element, ElementId, ElementTree, RefHandle};

/// Focusable elements under `root` in document order.
///
/// Nothing is cached: the tree may have changed since the previous call. An
/// unmounted root, a root that no longer exists, or a subtree with no matches
/// all produce an empty list.
pub fn scan(tree: &ElementTree, root: &RefHandle<ElementId>) -> Vec<ElementId> {
    let Some(root) = root.get() else {
        return Vec::new();
    };
    tree.descendants(root)
        .into_iter()
        .filter(|id| tree.get(*id).is_some_and(Element::is_focusable))
        .collect()
}
