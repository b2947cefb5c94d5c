//! App Configuration
//!
//! Compile-time defaults, with the log level overridable through the
//! `ACTIVITY_LOG` environment variable at build time.

use std::time::Duration;

use log::LevelFilter;

/// localStorage key holding the activity list
pub const STORAGE_KEY: &str = "todos";

/// How long the "added" banner stays up
pub const SUCCESS_BANNER_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppConfig {
    pub storage_key: &'static str,
    pub success_banner: Duration,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY,
            success_banner: SUCCESS_BANNER_DURATION,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

impl AppConfig {
    /// Defaults plus whatever `ACTIVITY_LOG` held when the app was built
    pub fn from_build_env() -> Self {
        Self::default().with_log_level(option_env!("ACTIVITY_LOG"))
    }

    /// Override the log level; unrecognized values keep the current one
    pub fn with_log_level(mut self, raw: Option<&str>) -> Self {
        if let Some(level) = raw.and_then(|value| value.trim().parse::<LevelFilter>().ok()) {
            self.log_level = level;
        }
        self
    }

    /// Banner duration in milliseconds, as browser timers expect
    pub fn success_banner_millis(&self) -> u32 {
        u32::try_from(self.success_banner.as_millis()).unwrap_or(u32::MAX)
    }
}
