//! Helpers for generating unique test data.
//!
//! ULID-based so concurrently running test binaries never collide on
//! registry keys.

use ulid::Ulid;

/// A unique string in the format `{prefix}-{ulid}`.
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// A unique team name in the format `{prefix} {ulid}`.
pub fn unique_team_name(prefix: &str) -> String {
    format!("{} {}", prefix, Ulid::new())
}
