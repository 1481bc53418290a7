use crate::window_state::WindowState;

use super::class_name::create_class_name;

/// Localization key for the toggle label while the chat is closed.
pub const LABEL_OPEN_CHAT: &str = "open_chat";
/// Localization key for the toggle label while the chat is open.
pub const LABEL_CLOSE_CHAT: &str = "close_chat";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatIcon {
    Chat,
    Close,
}

/// Presentation of the anchor control that opens and closes the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatButton<'a> {
    icon: ChatIcon,
    label_key: &'static str,
    text: &'a str,
    badge: Option<u32>,
    avatar: Option<&'a str>,
}

impl<'a> ChatButton<'a> {
    /// `avatar` is only used in triggered mode.
    pub fn new(
        state: &WindowState,
        text: &'a str,
        unread: Option<u32>,
        avatar: Option<&'a str>,
    ) -> Self {
        let icon = if state.minimized() || state.triggered() {
            ChatIcon::Chat
        } else {
            ChatIcon::Close
        };
        let label_key = if state.minimized() {
            LABEL_OPEN_CHAT
        } else {
            LABEL_CLOSE_CHAT
        };
        Self {
            icon,
            label_key,
            text,
            badge: unread,
            avatar: avatar.filter(|_| state.triggered()),
        }
    }

    pub fn icon(&self) -> ChatIcon {
        self.icon
    }

    pub fn label_key(&self) -> &'static str {
        self.label_key
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn avatar(&self) -> Option<&'a str> {
        self.avatar
    }

    /// Zero unread messages shows no badge.
    pub fn badge_text(&self) -> Option<String> {
        self.badge.filter(|n| *n > 0).map(|n| n.to_string())
    }

    /// An avatar replaces the icon and text content.
    pub fn shows_content(&self) -> bool {
        self.avatar.is_none()
    }

    pub fn class_name(&self) -> String {
        create_class_name(
            "button",
            &[("icon", true), ("img", self.avatar.is_some())],
            &["screen__chat-button"],
        )
    }
}
