use crate::constants::DIALOG_TITLE_ID;

/// Presentation decisions the host makes once per screen.
///
/// - `title_id`: identifier of the visible title element referenced by
///   `aria-labelledby`.
/// - `refocus_windowed`: also run the post-commit refocus while windowed.
/// - `dialog_when_triggered`: keep the dialog ARIA attributes in triggered
///   mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenConfig {
    title_id: String,
    refocus_windowed: bool,
    dialog_when_triggered: bool,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            title_id: DIALOG_TITLE_ID.to_string(),
            refocus_windowed: false,
            dialog_when_triggered: true,
        }
    }
}

impl ScreenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title_id(&self) -> &str {
        &self.title_id
    }

    pub fn refocus_windowed(&self) -> bool {
        self.refocus_windowed
    }

    pub fn dialog_when_triggered(&self) -> bool {
        self.dialog_when_triggered
    }

    pub fn with_title_id(mut self, title_id: impl Into<String>) -> Self {
        self.title_id = title_id.into();
        self
    }

    pub fn with_refocus_windowed(mut self, refocus: bool) -> Self {
        self.refocus_windowed = refocus;
        self
    }

    pub fn with_dialog_when_triggered(mut self, dialog: bool) -> Self {
        self.dialog_when_triggered = dialog;
        self
    }
}
