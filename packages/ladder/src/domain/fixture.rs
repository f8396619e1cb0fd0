//! Scheduled fixtures.

use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;

/// Unique fixture identifier, assigned by the importing application.
pub type FixtureId = i64;

/// A scheduled match between two teams at a given field and kick-off time.
///
/// Fixtures are created by import and treated as immutable here; whether a
/// fixture has been played is determined solely by the presence of a
/// [`GameResult`](crate::domain::GameResult) in the result store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: FixtureId,
    pub home_team: String,
    pub away_team: String,
    pub field: String,
    /// League-local kick-off; the league runs in a single timezone.
    pub start: PrimitiveDateTime,
}
