//! Error codes surfaced at the engine boundary.
//!
//! Add new codes here; never pass ad-hoc strings as error codes. All codes
//! are SCREAMING_SNAKE_CASE and map 1:1 to the strings the embedding
//! application shows administrators or writes to logs.

use core::fmt;

/// Centralized machine-readable error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Both default flags set on one game result
    BothSidesDefaulted,
    /// Window start after window end
    InvalidWindow,
    /// Window spans more days than the configured bound
    WindowTooLarge,
    /// Team name empty after trimming
    EmptyTeamName,
    /// General validation error
    ValidationError,

    // Resource not found
    /// Team not present in the registry
    TeamNotFound,
    /// Fixture not present in the fixture store
    FixtureNotFound,
    /// General not found error
    NotFound,

    // Store errors
    /// Store operation timed out
    StoreTimeout,
    /// Store unavailable
    StoreUnavailable,
    /// Data corruption detected
    DataCorruption,
    /// General store error
    StoreError,

    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BothSidesDefaulted => "BOTH_SIDES_DEFAULTED",
            Self::InvalidWindow => "INVALID_WINDOW",
            Self::WindowTooLarge => "WINDOW_TOO_LARGE",
            Self::EmptyTeamName => "EMPTY_TEAM_NAME",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::TeamNotFound => "TEAM_NOT_FOUND",
            Self::FixtureNotFound => "FIXTURE_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::StoreTimeout => "STORE_TIMEOUT",
            Self::StoreUnavailable => "STORE_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::StoreError => "STORE_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
