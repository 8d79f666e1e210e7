use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Top-level tabs of the app.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Feed,
    Lab,
}

impl View {
    pub fn key(&self) -> &'static str {
        match self {
            View::Feed => "feed",
            View::Lab => "lab",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            View::Feed => "The Culture Feed",
            View::Lab => "The Lab (Tools)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "feed" | "gist" | "culture" => Ok(View::Feed),
            "lab" | "tools" => Ok(View::Lab),
            other => Err(UnknownView(other.to_string())),
        }
    }
}

/// Tracks the active tab. `switch_to` is the callback handed to feed cards
/// that link into the lab.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    current: View,
}

impl Navigator {
    pub fn new(start: View) -> Self {
        Self { current: start }
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn switch_to(&mut self, view: View) {
        if self.current != view {
            tracing::debug!(from = ?self.current, to = ?view, "switching view");
        }
        self.current = view;
    }
}
