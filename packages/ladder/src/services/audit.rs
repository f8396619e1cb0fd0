//! Audit aggregation: played fixtures in a window expanded to one row per
//! team per game.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{
    score_game, DateWindow, Fixture, GameResult, PointsBreakdown, Team, TeamGameContribution,
};
use crate::errors::domain::DomainError;
use crate::store::{FixtureStore, ResultStore, TeamStore};

/// Expand every played fixture in `window` into home and away contributions.
///
/// Fixtures without a recorded result are skipped entirely; they never
/// appear as zero-value rows. Division and opening balance come from the
/// current registry state, so a mid-season division change retroactively
/// reclassifies historical rows on the next call.
///
/// Output order is deterministic: fixtures by `(start, field, home_team)`,
/// home row before away row.
pub fn compute_audit(
    teams: &dyn TeamStore,
    fixtures: &dyn FixtureStore,
    results: &dyn ResultStore,
    window: &DateWindow,
) -> Result<Vec<TeamGameContribution>, DomainError> {
    let registry: HashMap<String, Team> = teams
        .list_teams()?
        .into_iter()
        .map(|t| (t.name.clone(), t))
        .collect();

    let mut scheduled = fixtures.list_fixtures(window)?;
    scheduled.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then_with(|| a.field.cmp(&b.field))
            .then_with(|| a.home_team.cmp(&b.home_team))
    });

    let scheduled_count = scheduled.len();
    let mut rows = Vec::with_capacity(scheduled_count * 2);
    let mut played = 0usize;

    for fixture in &scheduled {
        let Some(result) = results.get_result(fixture.id)? else {
            continue;
        };
        played += 1;

        let (home, away) = score_game(&result);
        rows.push(contribution(fixture, &registry, true, &result, home));
        rows.push(contribution(fixture, &registry, false, &result, away));
    }

    debug!(
        scheduled = scheduled_count,
        played,
        rows = rows.len(),
        "audit aggregation complete"
    );
    Ok(rows)
}

fn contribution(
    fixture: &Fixture,
    registry: &HashMap<String, Team>,
    home_side: bool,
    result: &GameResult,
    breakdown: PointsBreakdown,
) -> TeamGameContribution {
    let (team, opponent, points_for, points_against) = if home_side {
        (
            &fixture.home_team,
            &fixture.away_team,
            result.home_score,
            result.away_score,
        )
    } else {
        (
            &fixture.away_team,
            &fixture.home_team,
            result.away_score,
            result.home_score,
        )
    };

    // Teams missing from the registry still get an audit row; the validator
    // reports them separately.
    let registered = registry.get(team);
    let division = registered.and_then(|t| t.division);
    let opening_balance = registered.map(|t| t.opening_balance).unwrap_or(0);

    TeamGameContribution::from_breakdown(
        team.clone(),
        opponent.clone(),
        fixture.id,
        fixture.start.date(),
        points_for,
        points_against,
        breakdown,
        division,
        opening_balance,
    )
}
