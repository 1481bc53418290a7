//! In-process element tree standing in for a document.
//!
//! Elements live in an arena and keep their children in insertion order, so a
//! pre-order walk yields document order. The tree also owns the single
//! active-element slot that every focus move writes to.

mod element;
pub mod refs;

pub use element::{Element, ElementKind, InputType};
pub use refs::{MountError, RefHandle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(usize);

impl ElementId {
    pub const fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
struct Node {
    element: Element,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

#[derive(Debug, Clone, Default)]
pub struct ElementTree {
    nodes: Vec<Node>,
    roots: Vec<ElementId>,
    active: Option<ElementId>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn insert_root(&mut self, element: Element) -> ElementId {
        let id = self.push_node(element, None);
        self.roots.push(id);
        id
    }

    /// Append `element` as the last child of `parent`. Returns `None` when the
    /// parent does not exist.
    pub fn append(&mut self, parent: ElementId, element: Element) -> Option<ElementId> {
        if !self.contains(parent) {
            return None;
        }
        let id = self.push_node(element, Some(parent));
        self.nodes[parent.0].children.push(id);
        Some(id)
    }

    fn push_node(&mut self, element: Element, parent: Option<ElementId>) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(Node {
            element,
            parent,
            children: Vec::new(),
        });
        id
    }

    pub fn contains(&self, id: ElementId) -> bool {
        id.0 < self.nodes.len()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.nodes.get(id.0).map(|node| &node.element)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.nodes.get_mut(id.0).map(|node| &mut node.element)
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.nodes.get(id.0).and_then(|node| node.parent)
    }

    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.nodes
            .get(id.0)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    /// Number of ancestors between `id` and its root.
    pub fn depth(&self, id: ElementId) -> usize {
        let mut depth = 0;
        let mut cursor = self.parent(id);
        while let Some(parent) = cursor {
            depth += 1;
            cursor = self.parent(parent);
        }
        depth
    }

    /// Whether `id` is `ancestor` or lies somewhere beneath it.
    pub fn is_within(&self, id: ElementId, ancestor: ElementId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = self.parent(current);
        }
        false
    }

    /// All descendants of `root` in document order, `root` itself excluded.
    pub fn descendants(&self, root: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        if !self.contains(root) {
            return out;
        }
        // explicit stack; children pushed in reverse to pop in order
        let mut stack: Vec<ElementId> = self.children(root).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }

    /// Every element of the document in document order.
    pub fn document_order(&self) -> Vec<ElementId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        for &root in &self.roots {
            out.push(root);
            out.extend(self.descendants(root));
        }
        out
    }

    /// Whether `id` and every ancestor are unhidden.
    pub fn is_rendered(&self, id: ElementId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            match self.get(current) {
                Some(element) if !element.hidden() => cursor = self.parent(current),
                _ => return false,
            }
        }
        true
    }

    pub fn find_by_dom_id(&self, dom_id: &str) -> Option<ElementId> {
        self.document_order()
            .into_iter()
            .find(|id| self.get(*id).and_then(Element::dom_id) == Some(dom_id))
    }

    pub fn active_element(&self) -> Option<ElementId> {
        self.active
    }

    pub fn is_active(&self, id: ElementId) -> bool {
        self.active == Some(id)
    }

    /// Move focus to `id`. Unknown ids leave focus untouched.
    pub fn focus(&mut self, id: ElementId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if self.active != Some(id) {
            tracing::trace!(element = id.index(), "focus");
        }
        self.active = Some(id);
        true
    }

    pub fn blur(&mut self) {
        self.active = None;
    }

    /// Default tab navigation over the rendered part of the document, used
    /// when a key event reaches the host without its default prevented.
    /// Wraps at both ends.
    pub fn advance_native_focus(&mut self, forward: bool) -> Option<ElementId> {
        let order: Vec<ElementId> = self
            .document_order()
            .into_iter()
            .filter(|id| {
                self.get(*id).is_some_and(Element::is_focusable) && self.is_rendered(*id)
            })
            .collect();
        if order.is_empty() {
            return None;
        }
        let next = match self
            .active
            .and_then(|active| order.iter().position(|id| *id == active))
        {
            Some(idx) => {
                let step = if forward { 1isize } else { -1isize };
                let next = (idx as isize + step).rem_euclid(order.len() as isize) as usize;
                order[next]
            }
            None if forward => order[0],
            None => order[order.len() - 1],
        };
        self.focus(next);
        Some(next)
    }
}
