//! Shared crate-wide constants.

/// Identifier of the header title element. The dialog wrapper points
/// `aria-labelledby` at it, so it must match the rendered title exactly.
pub const DIALOG_TITLE_ID: &str = "header__title-id";

/// Element identifiers of the controls the host wires to screen handlers.
pub const CHAT_BUTTON_ID: &str = "screen__chat-button";
pub const CLOSE_BUTTON_ID: &str = "screen__chat-close-button";
pub const HEADER_MINIMIZE_ID: &str = "header__minimize";
pub const HEADER_POPOUT_ID: &str = "header__popout";
pub const COMPOSER_ID: &str = "footer__composer";
pub const SEND_BUTTON_ID: &str = "footer__send";

/// Default input poll interval of the demo host, in milliseconds.
///
/// Short enough for responsive focus movement while keeping the idle loop
/// cheap.
pub const DEFAULT_POLL_MS: u64 = 16;
