/// Input element variants. Only a subset of these takes part in keyboard focus
/// containment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputType {
    Text,
    Radio,
    Checkbox,
    Password,
    Email,
    Number,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Container,
    Heading,
    Text,
    Anchor,
    Button,
    TextArea,
    Input(InputType),
    Select,
}

/// A node of the element tree.
///
/// `dom_id` is the document-unique identifier other elements refer to (for
/// example through `aria-labelledby`); `label` is the visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    kind: ElementKind,
    dom_id: Option<String>,
    label: String,
    href: Option<String>,
    content_editable: bool,
    hidden: bool,
}

impl Element {
    pub fn new(kind: ElementKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            dom_id: None,
            label: label.into(),
            href: None,
            content_editable: false,
            hidden: false,
        }
    }

    pub fn container() -> Self {
        Self::new(ElementKind::Container, "")
    }

    pub fn heading(label: impl Into<String>) -> Self {
        Self::new(ElementKind::Heading, label)
    }

    pub fn text(label: impl Into<String>) -> Self {
        Self::new(ElementKind::Text, label)
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::new(ElementKind::Button, label)
    }

    /// An anchor with an optional `href`. Anchors without one are not focusable.
    pub fn anchor(label: impl Into<String>, href: Option<&str>) -> Self {
        let mut element = Self::new(ElementKind::Anchor, label);
        element.href = href.map(str::to_string);
        element
    }

    pub fn text_area(label: impl Into<String>) -> Self {
        Self::new(ElementKind::TextArea, label)
    }

    pub fn input(input_type: InputType, label: impl Into<String>) -> Self {
        Self::new(ElementKind::Input(input_type), label)
    }

    pub fn select(label: impl Into<String>) -> Self {
        Self::new(ElementKind::Select, label)
    }

    pub fn with_id(mut self, dom_id: impl Into<String>) -> Self {
        self.dom_id = Some(dom_id.into());
        self
    }

    pub fn with_content_editable(mut self, editable: bool) -> Self {
        self.content_editable = editable;
        self
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn dom_id(&self) -> Option<&str> {
        self.dom_id.as_deref()
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn href(&self) -> Option<&str> {
        self.href.as_deref()
    }

    pub fn content_editable(&self) -> bool {
        self.content_editable
    }

    /// Hidden elements and their subtrees are skipped by native Tab order.
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    /// Whether this element belongs to the focusable set: anchors with an
    /// href, buttons, text areas, text/radio/checkbox inputs, selects, and
    /// containers explicitly marked editable.
    ///
    /// Hidden state is not consulted here; see [`super::ElementTree::is_rendered`].
    pub fn is_focusable(&self) -> bool {
        match self.kind {
            ElementKind::Anchor => self.href.is_some(),
            ElementKind::Button | ElementKind::TextArea | ElementKind::Select => true,
            ElementKind::Input(input_type) => matches!(
                input_type,
                InputType::Text | InputType::Radio | InputType::Checkbox
            ),
            ElementKind::Container => self.content_editable,
            ElementKind::Heading | ElementKind::Text => false,
        }
    }
}
