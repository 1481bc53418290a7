//! Host application around a single chat screen.
//!
//! `ChatApp` plays the part of the page embedding the widget: it owns the
//! element tree and the window flags, commits new state once per change, and
//! applies the default action of any key the surface did not prevent.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::constants::{
    CHAT_BUTTON_ID, CLOSE_BUTTON_ID, COMPOSER_ID, DIALOG_TITLE_ID, HEADER_MINIMIZE_ID,
    HEADER_POPOUT_ID, SEND_BUTTON_ID,
};
use crate::dom::{Element, ElementId, ElementTree};
use crate::error::ChatError;
use crate::event::SurfaceEvent;
use crate::event_loop::ControlFlow;
use crate::keybindings::{Action, KeyBindings};
use crate::screen::chat_button::{LABEL_CLOSE_CHAT, LABEL_OPEN_CHAT};
use crate::screen::{Screen, ScreenConfig};
use crate::state::HostState;
use crate::theme::Theme;
use crate::window_state::{StateTransition, WindowState};

const AGENT_GREETING: &str = "Agent: Hi! How can we help you today?";
const AGENT_REPLY: &str = "Agent: Thanks, someone will be with you shortly.";
const POWERED_BY_URL: &str = "https://github.com/jzombie/chat-screen";

#[derive(Debug, Clone)]
pub struct ChatOptions {
    pub title: String,
    pub state: WindowState,
    pub config: ScreenConfig,
    pub theme: Theme,
    pub agent_avatar: Option<String>,
}

impl Default for ChatOptions {
    fn default() -> Self {
        Self {
            title: "Need help?".to_string(),
            state: WindowState::new(),
            config: ScreenConfig::default(),
            theme: Theme::default(),
            agent_avatar: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Control {
    ChatButton,
    Minimize,
    PopOut,
    Send,
}

impl Control {
    fn from_dom_id(dom_id: &str) -> Option<Self> {
        match dom_id {
            CHAT_BUTTON_ID => Some(Control::ChatButton),
            CLOSE_BUTTON_ID | HEADER_MINIMIZE_ID => Some(Control::Minimize),
            HEADER_POPOUT_ID => Some(Control::PopOut),
            SEND_BUTTON_ID => Some(Control::Send),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Mounted {
    root: ElementId,
    inner: ElementId,
    close: Option<ElementId>,
    anchor: ElementId,
    messages: ElementId,
    composer: ElementId,
}

#[derive(Debug)]
pub struct ChatApp {
    tree: ElementTree,
    screen: Screen,
    host: HostState,
    bindings: KeyBindings,
    options: ChatOptions,
    mounted: Mounted,
    draft: String,
}

impl ChatApp {
    pub fn new(options: ChatOptions) -> Result<Self, ChatError> {
        let mut tree = ElementTree::new();
        let mounted = build_tree(&mut tree, &options)?;
        let mut screen = Screen::new(options.config.clone(), options.state);
        screen.handle_screen_ref(Some(mounted.root))?;
        screen.handle_button_ref(Some(mounted.anchor))?;
        let mut app = Self {
            tree,
            screen,
            host: HostState::new(options.state),
            bindings: KeyBindings::default(),
            options,
            mounted,
            draft: String::new(),
        };
        app.sync_presentation();
        // first commit after mount
        app.host.mark_content_updated();
        app.commit_pending();
        Ok(app)
    }

    pub fn tree(&self) -> &ElementTree {
        &self.tree
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn host(&self) -> &HostState {
        &self.host
    }

    pub fn options(&self) -> &ChatOptions {
        &self.options
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn anchor(&self) -> ElementId {
        self.mounted.anchor
    }

    pub fn composer(&self) -> ElementId {
        self.mounted.composer
    }

    /// Commit the host's pending state, if any, running the post-commit hook.
    pub fn commit_pending(&mut self) -> Option<StateTransition> {
        let next = self.host.take_change()?;
        let transition = self.screen.commit(&mut self.tree, next);
        self.sync_presentation();
        Some(transition)
    }

    /// An incoming message from the agent side.
    pub fn receive(&mut self, text: &str) {
        self.tree.append(self.mounted.messages, Element::text(text));
        self.host.note_incoming();
        self.host.mark_content_updated();
    }

    pub fn handle_event(&mut self, event: Event) -> ControlFlow {
        match event {
            Event::Key(key) => self.handle_key(key),
            _ => ControlFlow::Continue,
        }
    }

    /// Handle one key and commit whatever state change it caused, so the next
    /// key is routed against the new state even without a frame in between.
    pub fn handle_key(&mut self, key: KeyEvent) -> ControlFlow {
        let flow = self.dispatch_key(key);
        self.commit_pending();
        flow
    }

    fn dispatch_key(&mut self, key: KeyEvent) -> ControlFlow {
        if self.bindings.matches(Action::Quit, &key) {
            return ControlFlow::Quit;
        }
        // page-level shortcuts standing in for the external window controls
        if self.bindings.matches(Action::ToggleWindowed, &key) {
            self.host.toggle_windowed();
            return ControlFlow::Continue;
        }
        if self.bindings.matches(Action::ToggleExpanded, &key) {
            self.host.toggle_expanded();
            return ControlFlow::Continue;
        }

        let mut event = SurfaceEvent::new(key);
        if self.reaches_surface() {
            let request = self
                .screen
                .handle_key_down(&mut self.tree, &mut event, &mut self.host);
            if let Some(request) = request {
                tracing::debug!(?request, "surface requested transition");
            }
        }
        if !event.default_prevented() {
            self.default_action(&event);
        }
        ControlFlow::Continue
    }

    fn reaches_surface(&self) -> bool {
        self.tree
            .active_element()
            .is_some_and(|active| self.tree.is_within(active, self.mounted.root))
    }

    fn default_action(&mut self, event: &SurfaceEvent) {
        let key = event.key_event();
        if self.bindings.matches(Action::FocusNext, key) {
            self.tree.advance_native_focus(true);
            return;
        }
        if self.bindings.matches(Action::FocusPrev, key) {
            self.tree.advance_native_focus(false);
            return;
        }
        let active = self.tree.active_element();
        if active == Some(self.mounted.composer) {
            match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.draft.push(c);
                    return;
                }
                KeyCode::Backspace => {
                    self.draft.pop();
                    return;
                }
                KeyCode::Enter => {
                    self.send_draft();
                    return;
                }
                _ => {}
            }
        }
        if self.bindings.matches(Action::Activate, key)
            && let Some(active) = active
        {
            self.activate(active);
        }
    }

    /// Click handler dispatch for the controls of the surface.
    pub fn activate(&mut self, id: ElementId) {
        let Some(control) = self
            .tree
            .get(id)
            .and_then(Element::dom_id)
            .and_then(Control::from_dom_id)
        else {
            return;
        };
        match control {
            Control::ChatButton => self
                .screen
                .handle_chat_button_click(&mut self.tree, &mut self.host),
            Control::Minimize => self
                .screen
                .handle_on_minimize(&mut self.tree, &mut self.host),
            Control::PopOut => self.screen.handle_open_window(&mut self.host),
            Control::Send => self.send_draft(),
        }
    }

    fn send_draft(&mut self) {
        let text = self.draft.trim();
        if text.is_empty() {
            return;
        }
        let line = format!("You: {text}");
        self.draft.clear();
        self.tree.append(self.mounted.messages, Element::text(line));
        self.receive(AGENT_REPLY);
    }

    /// Mirror the committed state onto the tree: the anchor label, and the
    /// surface controls hidden from native Tab order while minimized.
    fn sync_presentation(&mut self) {
        let minimized = self.screen.state().minimized();
        let key = if minimized {
            LABEL_OPEN_CHAT
        } else {
            LABEL_CLOSE_CHAT
        };
        if let Some(anchor) = self.tree.get_mut(self.mounted.anchor) {
            anchor.set_label(key);
        }
        for id in [Some(self.mounted.inner), self.mounted.close]
            .into_iter()
            .flatten()
        {
            if let Some(element) = self.tree.get_mut(id) {
                element.set_hidden(minimized);
            }
        }
    }
}

fn child(
    tree: &mut ElementTree,
    parent: ElementId,
    element: Element,
) -> Result<ElementId, ChatError> {
    tree.append(parent, element)
        .ok_or(ChatError::MissingParent(parent))
}

fn build_tree(tree: &mut ElementTree, options: &ChatOptions) -> Result<Mounted, ChatError> {
    let state = options.state;
    let root = tree.insert_root(Element::container().with_id("screen"));
    let close = if state.shows_close_button() {
        Some(child(
            tree,
            root,
            Element::button("Close").with_id(CLOSE_BUTTON_ID),
        )?)
    } else {
        None
    };
    let inner = child(tree, root, Element::container().with_id("screen__inner"))?;
    if state.shows_header() {
        let header = child(tree, inner, Element::container().with_id("header"))?;
        child(
            tree,
            header,
            Element::heading(options.title.clone()).with_id(DIALOG_TITLE_ID),
        )?;
        child(
            tree,
            header,
            Element::button("Minimize").with_id(HEADER_MINIMIZE_ID),
        )?;
        child(
            tree,
            header,
            Element::button("Pop out").with_id(HEADER_POPOUT_ID),
        )?;
    }
    let messages = child(tree, inner, Element::container().with_id("screen__main"))?;
    child(tree, messages, Element::text(AGENT_GREETING))?;
    let footer = child(tree, inner, Element::container().with_id("footer"))?;
    let composer = child(
        tree,
        footer,
        Element::text_area("Type your message").with_id(COMPOSER_ID),
    )?;
    child(tree, footer, Element::button("Send").with_id(SEND_BUTTON_ID))?;
    child(
        tree,
        footer,
        Element::anchor("Powered by chat-screen", Some(POWERED_BY_URL)),
    )?;
    let anchor = child(
        tree,
        root,
        Element::button(options.title.clone()).with_id(CHAT_BUTTON_ID),
    )?;
    Ok(Mounted {
        root,
        inner,
        close,
        anchor,
        messages,
        composer,
    })
}
