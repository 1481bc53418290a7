use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indoc::indoc;

use crate::app::ChatOptions;
use crate::constants::DEFAULT_POLL_MS;
use crate::error::ChatError;
use crate::screen::ScreenConfig;
use crate::theme::{Theme, parse_hex_color};
use crate::window_state::WindowState;

const KEYS_HELP: &str = indoc! {"
    Keys:
      Tab / Shift+Tab   move focus, wrapping inside the open surface
      Esc               minimize (ignored while windowed)
      Enter / Space     activate the focused control
      Ctrl+W            toggle windowed mode
      Ctrl+E            toggle expanded mode
      Ctrl+Q            quit
"};

#[derive(Parser, Debug)]
#[command(
    name = "chat-screen",
    version = env!("CARGO_PKG_VERSION"),
    about = "Modal chat screen with keyboard focus containment",
    after_help = KEYS_HELP
)]
pub struct ChatCli {
    /// Title shown in the header and on the chat button.
    #[arg(long, default_value = "Need help?")]
    pub title: String,

    /// Start with the surface open instead of minimized.
    #[arg(long)]
    pub start_open: bool,

    /// Start expanded to the full terminal.
    #[arg(long)]
    pub expanded: bool,

    /// Start in windowed mode (Escape does not dismiss).
    #[arg(long)]
    pub windowed: bool,

    /// Inline presentation: close button instead of the header.
    #[arg(long)]
    pub triggered: bool,

    /// Also move focus to the first control after renders in windowed mode.
    #[arg(long)]
    pub refocus_windowed: bool,

    /// Drop the dialog role and aria attributes in triggered mode.
    #[arg(long)]
    pub no_dialog_when_triggered: bool,

    /// Accent color as #rrggbb.
    #[arg(long, value_name = "HEX")]
    pub color: Option<String>,

    /// Header text color as #rrggbb.
    #[arg(long, value_name = "HEX")]
    pub font_color: Option<String>,

    /// Button icon color as #rrggbb.
    #[arg(long, value_name = "HEX")]
    pub icon_color: Option<String>,

    /// Avatar image shown on the chat button in triggered mode.
    #[arg(long, value_name = "URL")]
    pub agent_avatar: Option<String>,

    /// Append logs to this file; logs are discarded otherwise.
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log at trace level.
    #[arg(short, long)]
    pub verbose: bool,

    /// Input poll interval.
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_POLL_MS)]
    pub poll_ms: u64,
}

impl ChatCli {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_ms.max(1))
    }
}

fn parse_optional(value: Option<&str>) -> Result<Option<ratatui::style::Color>, ChatError> {
    value
        .map(parse_hex_color)
        .transpose()
        .map_err(ChatError::from)
}

impl TryFrom<&ChatCli> for ChatOptions {
    type Error = ChatError;

    fn try_from(cli: &ChatCli) -> Result<Self, Self::Error> {
        let state = WindowState::new()
            .with_minimized(!cli.start_open)
            .with_expanded(cli.expanded)
            .with_windowed(cli.windowed)
            .with_triggered(cli.triggered);
        let config = ScreenConfig::default()
            .with_refocus_windowed(cli.refocus_windowed)
            .with_dialog_when_triggered(!cli.no_dialog_when_triggered);
        let theme = Theme {
            color: parse_optional(cli.color.as_deref())?,
            font_color: parse_optional(cli.font_color.as_deref())?,
            icon_color: parse_optional(cli.icon_color.as_deref())?,
        };
        Ok(Self {
            title: cli.title.clone(),
            state,
            config,
            theme,
            agent_avatar: cli.agent_avatar.clone(),
        })
    }
}
