pub const BUILDER_READY: &str = "Ready. 1-8 adds a field, Ctrl+S saves, Ctrl+Q quits.";
pub const RESPOND_READY: &str = "Fill the form. Ctrl+S submits, Ctrl+Q quits.";

/// One-line status message with a surface-specific resting text.
#[derive(Debug, Clone)]
pub struct StatusLine {
    message: String,
    home: &'static str,
}

impl StatusLine {
    pub fn new(home: &'static str) -> Self {
        Self {
            message: home.to_string(),
            home,
        }
    }

    pub fn set_raw(&mut self, msg: impl Into<String>) {
        self.message = msg.into();
    }

    pub fn ready(&mut self) {
        self.message = self.home.to_string();
    }

    pub fn editing(&mut self, label: &str) {
        self.message = format!("Editing {label}");
    }

    pub fn pending_quit(&mut self) {
        self.message =
            "Unsaved changes. Press Ctrl+Q again to quit without saving.".to_string();
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
