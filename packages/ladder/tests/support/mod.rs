#![allow(dead_code)]

// Shared season-building helpers for integration tests.

use std::sync::Arc;

use time::macros::time;
use time::{Date, PrimitiveDateTime};

use ladder::{
    Division, EngineConfig, Fixture, FixtureId, GameResult, LadderEngine, MemorySeasonStore,
    ResultStore, Team,
};

// Logging is auto-installed for every test binary that pulls in support
#[ctor::ctor]
fn init_logging() {
    ladder_test_support::logging::init();
}

/// Builds an in-memory season, then hands out an engine over it.
pub struct SeasonBuilder {
    store: Arc<MemorySeasonStore>,
    next_fixture_id: FixtureId,
}

impl Default for SeasonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SeasonBuilder {
    pub fn new() -> Self {
        Self {
            store: Arc::new(MemorySeasonStore::new()),
            next_fixture_id: 1,
        }
    }

    pub fn team(self, name: &str, division: Option<Division>, opening_balance: i32) -> Self {
        self.store
            .upsert_team(Team::new(name, division, opening_balance))
            .expect("team upsert should succeed");
        self
    }

    /// Schedule a fixture on `date` at 14:00 and return its id.
    pub fn fixture(&mut self, home: &str, away: &str, date: Date) -> FixtureId {
        self.fixture_on_field(home, away, date, "Field 1")
    }

    pub fn fixture_on_field(
        &mut self,
        home: &str,
        away: &str,
        date: Date,
        field: &str,
    ) -> FixtureId {
        let id = self.next_fixture_id;
        self.next_fixture_id += 1;
        self.store
            .upsert_fixture(Fixture {
                id,
                home_team: home.to_string(),
                away_team: away.to_string(),
                field: field.to_string(),
                start: PrimitiveDateTime::new(date, time!(14:00)),
            })
            .expect("fixture upsert should succeed");
        id
    }

    pub fn result(&self, fixture_id: FixtureId, result: GameResult) -> &Self {
        self.store
            .upsert_result(fixture_id, result)
            .expect("result upsert should succeed");
        self
    }

    pub fn store(&self) -> Arc<MemorySeasonStore> {
        Arc::clone(&self.store)
    }

    pub fn engine(self) -> LadderEngine {
        self.engine_with(EngineConfig::default())
    }

    pub fn engine_with(self, config: EngineConfig) -> LadderEngine {
        LadderEngine::with_memory_store(self.store, config)
    }
}

/// A clean result with the given scores: full conduct, no bonuses, no flags.
pub fn plain_result(home_score: i32, away_score: i32) -> GameResult {
    GameResult {
        home_score,
        away_score,
        home_female_tries: 0,
        away_female_tries: 0,
        home_conduct: 10,
        away_conduct: 10,
        home_unstripped: 0,
        away_unstripped: 0,
        home_defaulted: false,
        away_defaulted: false,
    }
}

/// A forfeit by the given side, with contrary recorded inputs so tests can
/// assert the scoring overrides.
pub fn defaulted_result(home_defaulted: bool) -> GameResult {
    GameResult {
        home_score: 25,
        away_score: 5,
        home_female_tries: 4,
        away_female_tries: 4,
        home_conduct: 3,
        away_conduct: 3,
        home_unstripped: 5,
        away_unstripped: 5,
        home_defaulted,
        away_defaulted: !home_defaulted,
    }
}
