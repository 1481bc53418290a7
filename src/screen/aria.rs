//! Dialog semantics of the surface.
//!
//! The attribute names and values are read by assistive technology and must
//! stay exactly as emitted here.

use std::fmt;

use crate::dom::{ElementId, ElementTree};
use crate::window_state::WindowState;

use super::config::ScreenConfig;

pub const ROLE_DIALOG: &str = "dialog";
pub const ARIA_MODAL_TRUE: &str = "true";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogAttributes<'a> {
    labelled_by: &'a str,
}

impl<'a> DialogAttributes<'a> {
    pub const fn new(labelled_by: &'a str) -> Self {
        Self { labelled_by }
    }

    pub const fn role(&self) -> &'static str {
        ROLE_DIALOG
    }

    pub const fn aria_modal(&self) -> &'static str {
        ARIA_MODAL_TRUE
    }

    pub const fn labelled_by(&self) -> &'a str {
        self.labelled_by
    }

    pub fn pairs(&self) -> [(&'static str, &'a str); 3] {
        [
            ("role", ROLE_DIALOG),
            ("aria-modal", ARIA_MODAL_TRUE),
            ("aria-labelledby", self.labelled_by),
        ]
    }

    /// The element `aria-labelledby` points at, when it is mounted.
    pub fn label_target(&self, tree: &ElementTree) -> Option<ElementId> {
        tree.find_by_dom_id(self.labelled_by)
    }
}

impl fmt::Display for DialogAttributes<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .pairs()
            .iter()
            .map(|(name, value)| format!("{name}=\"{value}\""))
            .collect();
        write!(f, "{}", rendered.join(" "))
    }
}

/// Attributes for the dialog wrapper, or `None` while minimized.
pub fn dialog_attributes<'a>(
    state: &WindowState,
    config: &'a ScreenConfig,
) -> Option<DialogAttributes<'a>> {
    if !state.is_interactive() {
        return None;
    }
    if state.triggered() && !config.dialog_when_triggered() {
        return None;
    }
    Some(DialogAttributes::new(config.title_id()))
}
