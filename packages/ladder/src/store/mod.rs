//! Store seams consumed by the engine.
//!
//! The engine reads teams, fixtures and results through these traits and
//! never persists anything itself. The surrounding application supplies
//! database-backed implementations; [`MemorySeasonStore`] backs the CLI and
//! tests.
//!
//! Every trait carries a `revision()` stamp: a counter that increases on
//! each write to that store, used by the standings cache to detect staleness
//! without inspecting contents.

mod memory;

use time::Date;

pub use memory::MemorySeasonStore;

use crate::domain::{DateWindow, Fixture, FixtureId, GameResult, Team};
use crate::errors::domain::DomainError;

/// Current-state team registry: division assignment plus opening balance.
pub trait TeamStore: Send + Sync {
    fn list_teams(&self) -> Result<Vec<Team>, DomainError>;

    /// Monotonically increasing stamp, bumped on every registry write.
    fn revision(&self) -> u64;
}

/// Scheduled fixtures, as imported by the surrounding application.
pub trait FixtureStore: Send + Sync {
    /// Fixtures whose start date falls inside `window`, in store order.
    fn list_fixtures(&self, window: &DateWindow) -> Result<Vec<Fixture>, DomainError>;

    /// Start date of the earliest fixture known, if any. Defines the default
    /// season start for standings windows.
    fn earliest_fixture_date(&self) -> Result<Option<Date>, DomainError>;

    /// Start date of the latest fixture known, if any. Used by callers that
    /// need a default cutoff date for the season.
    fn latest_fixture_date(&self) -> Result<Option<Date>, DomainError>;

    fn revision(&self) -> u64;
}

/// Recorded results, at most one per fixture.
pub trait ResultStore: Send + Sync {
    fn get_result(&self, fixture_id: FixtureId) -> Result<Option<GameResult>, DomainError>;

    /// Atomic upsert with last-writer-wins semantics.
    ///
    /// Must reject a result with both default flags set, leaving any prior
    /// record for the fixture untouched.
    fn upsert_result(&self, fixture_id: FixtureId, result: GameResult) -> Result<(), DomainError>;

    fn revision(&self) -> u64;
}
