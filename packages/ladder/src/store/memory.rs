//! In-memory season store backing the CLI and tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use time::Date;

use crate::domain::{DateWindow, Fixture, FixtureId, GameResult, Team};
use crate::errors::domain::{DomainError, NotFoundKind, ValidationKind};
use crate::store::{FixtureStore, ResultStore, TeamStore};

#[derive(Debug, Default)]
struct SeasonState {
    teams: BTreeMap<String, Team>,
    fixtures: BTreeMap<FixtureId, Fixture>,
    results: HashMap<FixtureId, GameResult>,
}

/// One store implementing all three seams over a single locked state.
///
/// Writes take the lock for the duration of one upsert, which gives the
/// single-row atomicity and last-writer-wins semantics the engine requires.
/// Readers share the lock and may run concurrently.
#[derive(Debug, Default)]
pub struct MemorySeasonStore {
    state: RwLock<SeasonState>,
    team_rev: AtomicU64,
    fixture_rev: AtomicU64,
    result_rev: AtomicU64,
}

impl MemorySeasonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a team, keyed by name.
    pub fn upsert_team(&self, team: Team) -> Result<(), DomainError> {
        if team.name.trim().is_empty() {
            return Err(DomainError::validation(
                ValidationKind::EmptyTeamName,
                "Team name must not be empty",
            ));
        }
        let mut state = self.state.write();
        state.teams.insert(team.name.clone(), team);
        drop(state);
        self.team_rev.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    /// Insert or replace a fixture, keyed by id.
    pub fn upsert_fixture(&self, fixture: Fixture) -> Result<(), DomainError> {
        let mut state = self.state.write();
        state.fixtures.insert(fixture.id, fixture);
        drop(state);
        self.fixture_rev.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    pub fn team(&self, name: &str) -> Option<Team> {
        self.state.read().teams.get(name).cloned()
    }

    pub fn fixture(&self, id: FixtureId) -> Option<Fixture> {
        self.state.read().fixtures.get(&id).cloned()
    }
}

impl TeamStore for MemorySeasonStore {
    fn list_teams(&self) -> Result<Vec<Team>, DomainError> {
        Ok(self.state.read().teams.values().cloned().collect())
    }

    fn revision(&self) -> u64 {
        self.team_rev.load(Ordering::SeqCst)
    }
}

impl FixtureStore for MemorySeasonStore {
    fn list_fixtures(&self, window: &DateWindow) -> Result<Vec<Fixture>, DomainError> {
        Ok(self
            .state
            .read()
            .fixtures
            .values()
            .filter(|f| window.contains(f.start.date()))
            .cloned()
            .collect())
    }

    fn earliest_fixture_date(&self) -> Result<Option<Date>, DomainError> {
        Ok(self
            .state
            .read()
            .fixtures
            .values()
            .map(|f| f.start.date())
            .min())
    }

    fn latest_fixture_date(&self) -> Result<Option<Date>, DomainError> {
        Ok(self
            .state
            .read()
            .fixtures
            .values()
            .map(|f| f.start.date())
            .max())
    }

    fn revision(&self) -> u64 {
        self.fixture_rev.load(Ordering::SeqCst)
    }
}

impl ResultStore for MemorySeasonStore {
    fn get_result(&self, fixture_id: FixtureId) -> Result<Option<GameResult>, DomainError> {
        Ok(self.state.read().results.get(&fixture_id).copied())
    }

    fn upsert_result(&self, fixture_id: FixtureId, result: GameResult) -> Result<(), DomainError> {
        // Reject before taking the write path; a failed write leaves any
        // prior record untouched.
        result.check_writable()?;

        let mut state = self.state.write();
        if !state.fixtures.contains_key(&fixture_id) {
            return Err(DomainError::not_found(
                NotFoundKind::Fixture,
                format!("Fixture {fixture_id} does not exist"),
            ));
        }
        state.results.insert(fixture_id, result);
        drop(state);
        self.result_rev.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn revision(&self) -> u64 {
        self.result_rev.load(Ordering::SeqCst)
    }
}
