use crate::egui_app::ui::style;
use egui::Color32;

/// Maximum number of entries kept in the rolling status log.
pub const STATUS_LOG_LIMIT: usize = 50;

/// Status badge + text shown in the footer.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusBarState {
    /// Main status message text.
    pub text: String,
    /// Badge label shown next to the status.
    pub badge_label: String,
    /// Badge color.
    pub badge_color: Color32,
    /// Rolling status log entries, oldest first.
    pub log: Vec<String>,
}

impl StatusBarState {
    /// Status shown before anything has happened.
    pub fn idle() -> Self {
        Self {
            text: "Enter the student's metrics and press Predict".into(),
            badge_label: style::status_badge_label(style::StatusTone::Idle).into(),
            badge_color: style::status_badge_color(style::StatusTone::Idle),
            log: Vec::new(),
        }
    }

    /// Replace the visible status and append it to the log.
    pub fn set(&mut self, text: String, tone: style::StatusTone) {
        self.badge_label = style::status_badge_label(tone).into();
        self.badge_color = style::status_badge_color(tone);
        self.log.push(format!("[{}] {text}", self.badge_label));
        if self.log.len() > STATUS_LOG_LIMIT {
            let excess = self.log.len() - STATUS_LOG_LIMIT;
            self.log.drain(..excess);
        }
        self.text = text;
    }

    /// Concatenate log entries into a single displayable string.
    pub fn log_text(&self) -> String {
        self.log.join("\n")
    }
}
