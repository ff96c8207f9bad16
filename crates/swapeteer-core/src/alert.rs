//! Alert directives (toast notifications rendered by the client loader).
//!
//! Colors are fixed per severity; only the five named constructors produce
//! an [`Alert`].

use serde::Serialize;

use crate::envelope::{Envelope, Payload, KIND_ALERT};

/// Display time (ms) the client loader uses when none is given.
pub const DEFAULT_ALERT_DURATION_MS: i64 = 5000;

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Danger,
    Success,
    Warning,
    Dark,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Info => "info",
            Level::Danger => "danger",
            Level::Success => "success",
            Level::Warning => "warning",
            Level::Dark => "dark",
        }
    }

    /// Accent color (Tailwind palette name).
    pub fn primary_color(self) -> &'static str {
        match self {
            Level::Info => "blue",
            Level::Danger => "red",
            Level::Success => "green",
            Level::Warning => "yellow",
            Level::Dark => "gray",
        }
    }

    pub fn button_text_color(self) -> &'static str {
        match self {
            Level::Warning => "gray-800",
            _ => "white",
        }
    }
}

/// Payload of an `alert` envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    level: Level,
    title: String,
    message: String,
    /// Milliseconds; 0 disables auto-dismiss.
    duration: i64,
    primary_color: &'static str,
    button_text_color: &'static str,
}

impl Alert {
    fn with_level(level: Level, title: String, message: String, duration: i64) -> Self {
        Self {
            level,
            title,
            message,
            duration,
            primary_color: level.primary_color(),
            button_text_color: level.button_text_color(),
        }
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn duration(&self) -> i64 {
        self.duration
    }

    pub fn primary_color(&self) -> &'static str {
        self.primary_color
    }

    pub fn button_text_color(&self) -> &'static str {
        self.button_text_color
    }
}

pub fn info(title: impl Into<String>, message: impl Into<String>, duration: i64) -> Alert {
    Alert::with_level(Level::Info, title.into(), message.into(), duration)
}

pub fn danger(title: impl Into<String>, message: impl Into<String>, duration: i64) -> Alert {
    Alert::with_level(Level::Danger, title.into(), message.into(), duration)
}

pub fn success(title: impl Into<String>, message: impl Into<String>, duration: i64) -> Alert {
    Alert::with_level(Level::Success, title.into(), message.into(), duration)
}

pub fn warning(title: impl Into<String>, message: impl Into<String>, duration: i64) -> Alert {
    Alert::with_level(Level::Warning, title.into(), message.into(), duration)
}

pub fn dark(title: impl Into<String>, message: impl Into<String>, duration: i64) -> Alert {
    Alert::with_level(Level::Dark, title.into(), message.into(), duration)
}

/// Wrap `data` as an `alert` envelope. The payload is not checked, so a
/// custom JSON value is accepted as well.
pub fn new_alert(data: impl Into<Payload>) -> Envelope {
    Envelope::new(KIND_ALERT, data)
}

impl From<Alert> for Envelope {
    fn from(alert: Alert) -> Self {
        new_alert(alert)
    }
}
