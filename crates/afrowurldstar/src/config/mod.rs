use crate::navigation::View;
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub ui: UiConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let start_view = match env::var("APP_START_VIEW") {
            Ok(raw) => raw
                .parse::<View>()
                .map_err(|_| ConfigError::InvalidStartView { value: raw })?,
            Err(_) => View::default(),
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            ui: UiConfig { start_view },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Presentation defaults applied when a session starts.
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub start_view: View,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidStartView { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidStartView { value } => {
                write!(f, "APP_START_VIEW must be 'feed' or 'lab' (got '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
