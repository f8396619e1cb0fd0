//! The engine façade: stores, config and the standings cache in one handle.

use std::sync::Arc;

use time::Date;
use tracing::debug;

use crate::config::EngineConfig;
use crate::domain::{
    DateWindow, Division, FixtureId, GameResult, StandingsRow, TeamGameContribution,
};
use crate::error::EngineError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::services::standings_cache::{StandingsCache, StoreRevisions};
use crate::services::{audit, standings, validation};
use crate::store::{FixtureStore, MemorySeasonStore, ResultStore, TeamStore};

/// Handle bundling the three store seams, configuration and the memoized
/// standings cache. Read operations perform no writes and are safe to call
/// concurrently; embedders typically hold the engine in an `Arc`.
pub struct LadderEngine {
    teams: Arc<dyn TeamStore>,
    fixtures: Arc<dyn FixtureStore>,
    results: Arc<dyn ResultStore>,
    config: EngineConfig,
    cache: StandingsCache,
}

impl LadderEngine {
    pub fn new(
        teams: Arc<dyn TeamStore>,
        fixtures: Arc<dyn FixtureStore>,
        results: Arc<dyn ResultStore>,
        config: EngineConfig,
    ) -> Self {
        Self {
            teams,
            fixtures,
            results,
            config,
            cache: StandingsCache::new(),
        }
    }

    /// Engine over one [`MemorySeasonStore`] serving all three seams.
    pub fn with_memory_store(store: Arc<MemorySeasonStore>, config: EngineConfig) -> Self {
        Self::new(
            Arc::clone(&store) as Arc<dyn TeamStore>,
            Arc::clone(&store) as Arc<dyn FixtureStore>,
            store as Arc<dyn ResultStore>,
            config,
        )
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Per-team-per-game audit rows for `window`.
    pub fn compute_audit(
        &self,
        window: &DateWindow,
    ) -> Result<Vec<TeamGameContribution>, EngineError> {
        self.check_window(window)?;
        Ok(audit::compute_audit(
            self.teams.as_ref(),
            self.fixtures.as_ref(),
            self.results.as_ref(),
            window,
        )?)
    }

    /// The division ladder as of `as_of`, memoized per store revisions.
    ///
    /// The window runs from the configured season start (or the earliest
    /// fixture on record, or `as_of` itself when nothing is scheduled) up to
    /// `as_of` inclusive.
    pub fn compute_standings(
        &self,
        division: Division,
        as_of: Date,
    ) -> Result<Arc<Vec<StandingsRow>>, EngineError> {
        let revisions = self.revisions();
        if let Some(rows) = self.cache.get(division, as_of, revisions) {
            debug!(division = %division, %as_of, "standings cache hit");
            return Ok(rows);
        }

        let window = self.standings_window(as_of)?;
        self.check_window(&window)?;
        let rows = Arc::new(standings::compute_standings(
            self.teams.as_ref(),
            self.fixtures.as_ref(),
            self.results.as_ref(),
            division,
            &window,
        )?);
        self.cache
            .insert(division, as_of, revisions, Arc::clone(&rows));
        Ok(rows)
    }

    /// Advisory data-quality warnings for `window`.
    pub fn validate(
        &self,
        window: &DateWindow,
    ) -> Result<Vec<validation::DataQualityWarning>, EngineError> {
        self.check_window(window)?;
        Ok(validation::validate(
            self.teams.as_ref(),
            self.fixtures.as_ref(),
            self.results.as_ref(),
            window,
        )?)
    }

    /// Record a result through the store's write guard.
    ///
    /// Exists so embedders hit the same both-defaulted rejection (and cache
    /// invalidation via the result revision bump) as any other writer.
    pub fn record_result(
        &self,
        fixture_id: FixtureId,
        result: GameResult,
    ) -> Result<(), EngineError> {
        Ok(self.results.upsert_result(fixture_id, result)?)
    }

    /// The standings window ending at `as_of`.
    pub fn standings_window(&self, as_of: Date) -> Result<DateWindow, EngineError> {
        let start = match self.config.season_start {
            Some(date) => date,
            None => self
                .fixtures
                .earliest_fixture_date()?
                .unwrap_or(as_of),
        };
        // A season start after the cutoff collapses to a single-day window
        // rather than an inverted one.
        if start > as_of {
            return Ok(DateWindow::single_day(as_of));
        }
        Ok(DateWindow::new(start, as_of)?)
    }

    fn revisions(&self) -> StoreRevisions {
        StoreRevisions {
            teams: self.teams.revision(),
            fixtures: self.fixtures.revision(),
            results: self.results.revision(),
        }
    }

    fn check_window(&self, window: &DateWindow) -> Result<(), EngineError> {
        let max = i64::from(self.config.max_window_days);
        if window.span_days() > max {
            return Err(DomainError::validation(
                ValidationKind::WindowTooLarge,
                format!(
                    "Window spans {} days, more than the configured limit of {max}",
                    window.span_days()
                ),
            )
            .into());
        }
        Ok(())
    }
}
