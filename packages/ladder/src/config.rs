//! Engine configuration.

use time::format_description::FormatItem;
use time::macros::format_description;
use time::Date;

use crate::error::EngineError;

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Default cap on window spans: two full seasons.
pub const DEFAULT_MAX_WINDOW_DAYS: u32 = 730;

/// Tuning knobs for the engine.
///
/// `season_start` overrides the default standings window start (the earliest
/// fixture known to the fixture store). `max_window_days` bounds how many
/// days a single audit/standings/validation scan may span; requests beyond
/// it are rejected before any store access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub season_start: Option<Date>,
    pub max_window_days: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            season_start: None,
            max_window_days: DEFAULT_MAX_WINDOW_DAYS,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the environment.
    ///
    /// - `LADDER_SEASON_START`: ISO date (`YYYY-MM-DD`), optional.
    /// - `LADDER_MAX_WINDOW_DAYS`: positive integer, optional.
    ///
    /// Unset variables fall back to defaults; malformed values are rejected
    /// rather than silently ignored.
    pub fn from_env() -> Result<Self, EngineError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("LADDER_SEASON_START") {
            let date = Date::parse(&raw, DATE_FORMAT).map_err(|e| {
                EngineError::config(format!(
                    "LADDER_SEASON_START must be YYYY-MM-DD, got '{raw}': {e}"
                ))
            })?;
            config.season_start = Some(date);
        }

        if let Ok(raw) = std::env::var("LADDER_MAX_WINDOW_DAYS") {
            let days: u32 = raw.parse().map_err(|_| {
                EngineError::config(format!(
                    "LADDER_MAX_WINDOW_DAYS must be a positive integer, got '{raw}'"
                ))
            })?;
            if days == 0 {
                return Err(EngineError::config(
                    "LADDER_MAX_WINDOW_DAYS must be at least 1",
                ));
            }
            config.max_window_days = days;
        }

        Ok(config)
    }
}
