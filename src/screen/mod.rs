//! The modal chat surface.
//!
//! `Screen` owns the surface root and anchor references, the focus trap and
//! the key router. The host owns the element tree and the window flags; it
//! hands both in on every call and learns about requested transitions
//! through [`ScreenCallbacks`].

pub mod aria;
pub mod chat_button;
pub mod class_name;
mod config;

pub use aria::{DialogAttributes, dialog_attributes};
pub use chat_button::{ChatButton, ChatIcon};
pub use class_name::create_class_name;
pub use config::ScreenConfig;

use crate::dom::{ElementId, ElementTree, MountError};
use crate::event::SurfaceEvent;
use crate::focus::{FocusTrapController, RefocusManager};
use crate::key_router::{KeyRouter, TransitionRequest};
use crate::keybindings::KeyBindings;
use crate::window_state::{ScreenMode, StateTransition, WindowState};

/// Host callbacks. The screen requests transitions through these and never
/// flips window flags itself.
pub trait ScreenCallbacks {
    fn on_minimize(&mut self);
    fn on_restore(&mut self);
    fn on_open_window(&mut self) {}
}

impl<T: ScreenCallbacks + ?Sized> ScreenCallbacks for &mut T {
    fn on_minimize(&mut self) {
        (**self).on_minimize()
    }

    fn on_restore(&mut self) {
        (**self).on_restore()
    }

    fn on_open_window(&mut self) {
        (**self).on_open_window()
    }
}

#[derive(Debug, Clone)]
pub struct Screen {
    config: ScreenConfig,
    props: WindowState,
    trap: FocusTrapController,
    refocus: RefocusManager,
    router: KeyRouter,
}

impl Screen {
    pub fn new(config: ScreenConfig, initial: WindowState) -> Self {
        Self {
            config,
            props: initial,
            trap: FocusTrapController::new(),
            refocus: RefocusManager::new(),
            router: KeyRouter::default(),
        }
    }

    pub fn with_key_bindings(mut self, bindings: KeyBindings) -> Self {
        self.router = KeyRouter::new(bindings);
        self
    }

    pub fn config(&self) -> &ScreenConfig {
        &self.config
    }

    /// The last committed window state.
    pub fn state(&self) -> WindowState {
        self.props
    }

    pub fn mode(&self) -> ScreenMode {
        self.props.mode()
    }

    pub fn handle_screen_ref(&mut self, root: Option<ElementId>) -> Result<(), MountError> {
        self.trap.handle_root_ref(root)
    }

    pub fn handle_button_ref(&mut self, anchor: Option<ElementId>) -> Result<(), MountError> {
        self.refocus.handle_anchor_ref(anchor)
    }

    pub fn surface_root(&self) -> Option<ElementId> {
        self.trap.root().get()
    }

    pub fn anchor(&self) -> Option<ElementId> {
        self.refocus.anchor().get()
    }

    pub fn focusable_elements(&self, tree: &ElementTree) -> Vec<ElementId> {
        self.trap.focusable_elements(tree)
    }

    pub fn add_focus_first_element(&self, tree: &mut ElementTree) -> bool {
        self.trap.add_focus_first_element(tree)
    }

    /// Keydown handler attached to the surface root.
    ///
    /// Returns the transition carried out because of the key, if any.
    pub fn handle_key_down<C: ScreenCallbacks + ?Sized>(
        &self,
        tree: &mut ElementTree,
        event: &mut SurfaceEvent,
        callbacks: &mut C,
    ) -> Option<TransitionRequest> {
        let request = self
            .router
            .handle_key_down(&self.props, tree, &self.trap, event)?;
        match request {
            TransitionRequest::Minimize => self.handle_on_minimize(tree, callbacks),
        }
        Some(request)
    }

    /// Ask the host to minimize, then park focus on the anchor control.
    pub fn handle_on_minimize<C: ScreenCallbacks + ?Sized>(
        &self,
        tree: &mut ElementTree,
        callbacks: &mut C,
    ) {
        callbacks.on_minimize();
        self.refocus.on_minimize(tree);
    }

    /// Ask the host to restore, then focus the first focusable element.
    pub fn handle_on_restore<C: ScreenCallbacks + ?Sized>(
        &self,
        tree: &mut ElementTree,
        callbacks: &mut C,
    ) {
        callbacks.on_restore();
        self.refocus.on_restore(tree, &self.trap);
    }

    pub fn handle_chat_button_click<C: ScreenCallbacks + ?Sized>(
        &self,
        tree: &mut ElementTree,
        callbacks: &mut C,
    ) {
        if self.props.minimized() {
            self.handle_on_restore(tree, callbacks);
        } else {
            self.handle_on_minimize(tree, callbacks);
        }
    }

    pub fn handle_open_window<C: ScreenCallbacks + ?Sized>(&self, callbacks: &mut C) {
        callbacks.on_open_window();
    }

    /// Accept freshly rendered props and run the post-commit hook.
    pub fn commit(&mut self, tree: &mut ElementTree, next: WindowState) -> StateTransition {
        let prev = self.props;
        self.props = next;
        self.did_update(tree, prev, next);
        StateTransition::between(prev, next)
    }

    /// Post-commit hook: whenever the committed state is interactive the first
    /// focusable element receives focus, whatever caused the render.
    pub fn did_update(&self, tree: &mut ElementTree, prev: WindowState, next: WindowState) -> bool {
        let transition = StateTransition::between(prev, next);
        let mode = next.mode();
        if transition != StateTransition::Unchanged {
            tracing::debug!(?transition, ?mode, "window state committed");
        }
        let refocus = match mode {
            ScreenMode::OpenTrapped => true,
            ScreenMode::OpenWindowed => self.config.refocus_windowed(),
            ScreenMode::Minimized => false,
        };
        refocus && self.trap.add_focus_first_element(tree)
    }

    pub fn dialog_attributes(&self) -> Option<DialogAttributes<'_>> {
        dialog_attributes(&self.props, &self.config)
    }

    pub fn class_name(&self) -> String {
        create_class_name(
            "screen",
            &[
                ("minimized", self.props.minimized()),
                ("expanded", self.props.expanded()),
                ("windowed", self.props.windowed()),
                ("triggered", self.props.triggered()),
            ],
            &[],
        )
    }

    pub fn inner_class_name(&self, extra: &[&str]) -> String {
        create_class_name(
            "screen__inner",
            &[("fitTextSize", self.props.triggered())],
            extra,
        )
    }

    pub fn content_class_name(&self, nopadding: bool) -> String {
        create_class_name(
            "screen__main",
            &[
                ("nopadding", nopadding),
                ("triggered", self.props.triggered()),
            ],
            &[],
        )
    }

    pub fn chat_button<'a>(
        &self,
        title: &'a str,
        unread: Option<u32>,
        avatar: Option<&'a str>,
    ) -> ChatButton<'a> {
        ChatButton::new(&self.props, title, unread, avatar)
    }
}
