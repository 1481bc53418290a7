//! Keyboard focus containment for the chat surface.
//!
//! - [`scanner`] lists the focusable elements under a root, fresh per call.
//! - [`trap`] turns that list into a closed Tab ring.
//! - [`refocus`] moves focus on minimize/restore transitions.

pub mod refocus;
pub mod scanner;
pub mod trap;

pub use refocus::RefocusManager;
pub use scanner::scan;
pub use trap::{FocusTrapController, TabDirection, TabOutcome};
