//! Standings builder: audit rows grouped into a fully ordered ladder.

use std::collections::BTreeMap;

use tracing::debug;

use crate::domain::{
    ladder_cmp, DateWindow, Division, MatchOutcome, StandingsRow, TeamGameContribution,
};
use crate::errors::domain::DomainError;
use crate::services::audit::compute_audit;
use crate::store::{FixtureStore, ResultStore, TeamStore};

/// Build the ladder for one division over `window`.
///
/// Every team currently assigned to the division appears, including teams
/// with no played games (`played = 0`, `total = opening_balance`). A
/// division with no registered teams yields an empty ladder.
pub fn compute_standings(
    teams: &dyn TeamStore,
    fixtures: &dyn FixtureStore,
    results: &dyn ResultStore,
    division: Division,
    window: &DateWindow,
) -> Result<Vec<StandingsRow>, DomainError> {
    // Registry first: the left side of the join, so zero-game teams survive.
    let mut rows: BTreeMap<String, StandingsRow> = teams
        .list_teams()?
        .into_iter()
        .filter(|t| t.division == Some(division))
        .map(|t| {
            let row = StandingsRow {
                team: t.name.clone(),
                played: 0,
                won: 0,
                drawn: 0,
                lost: 0,
                points_for: 0,
                points_against: 0,
                points_difference: 0,
                opening_balance: t.opening_balance,
                season_points: 0,
                total: t.opening_balance,
            };
            (t.name, row)
        })
        .collect();

    let contributions = compute_audit(teams, fixtures, results, window)?;
    for c in &contributions {
        if c.division != Some(division) {
            continue;
        }
        let Some(row) = rows.get_mut(&c.team) else {
            // Contribution for a team the registry no longer lists in this
            // division; cannot happen while divisions come from the same
            // registry snapshot, but a row without a base entry is dropped
            // rather than invented.
            continue;
        };
        accumulate(row, c);
    }

    let mut ladder: Vec<StandingsRow> = rows.into_values().collect();
    for row in &mut ladder {
        row.points_difference = row.points_for - row.points_against;
        row.total = row.opening_balance + row.season_points;
    }
    ladder.sort_by(ladder_cmp);

    debug!(
        division = %division,
        teams = ladder.len(),
        contributions = contributions.len(),
        "standings computed"
    );
    Ok(ladder)
}

fn accumulate(row: &mut StandingsRow, c: &TeamGameContribution) {
    row.played += 1;
    match c.outcome {
        MatchOutcome::Win => row.won += 1,
        MatchOutcome::Draw => row.drawn += 1,
        // A default displays as a loss in the W/D/L columns.
        MatchOutcome::Loss | MatchOutcome::Defaulted => row.lost += 1,
    }
    row.points_for += c.points_for;
    row.points_against += c.points_against;
    row.season_points += c.total_points;
}
