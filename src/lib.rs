//! Modal chat screen for terminal UIs.
//!
//! The heart of the crate is the [`screen::Screen`] controller: it keeps
//! keyboard focus inside the chat surface while it is open, dismisses it on
//! Escape unless it is windowed, and puts focus back on the chat button or the
//! first control when the surface is minimized or restored.

pub mod app;
pub mod cli;
pub mod constants;
pub mod dom;
pub mod drivers;
pub mod error;
pub mod event;
pub mod event_loop;
pub mod focus;
pub mod key_router;
pub mod keybindings;
pub mod screen;
pub mod state;
pub mod theme;
pub mod tracing_sub;
pub mod view;
pub mod window_state;

pub use error::ChatError;
pub use screen::{Screen, ScreenCallbacks, ScreenConfig};
pub use window_state::{ScreenMode, WindowState};
