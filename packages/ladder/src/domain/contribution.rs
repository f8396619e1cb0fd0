//! Per-team-per-game audit rows.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::domain::division::Division;
use crate::domain::fixture::FixtureId;
use crate::domain::points::{MatchOutcome, PointsBreakdown};

/// One team's contribution from one played fixture.
///
/// Derived on demand, never persisted. `division` and `opening_balance` are
/// resolved from the registry at aggregation time, so a mid-season division
/// reassignment retroactively reclassifies a team's historical rows on the
/// next recomputation. That mirrors how the league has always read its
/// ladder and is asserted by tests, not "fixed".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamGameContribution {
    pub team: String,
    pub opponent: String,
    pub fixture_id: FixtureId,
    pub played_on: Date,
    pub points_for: i32,
    pub points_against: i32,
    pub outcome: MatchOutcome,
    pub match_points: i32,
    pub close_loss_bonus: i32,
    pub female_try_bonus: i32,
    pub conduct_points: i32,
    pub unstripped_penalty: i32,
    pub total_points: i32,
    pub defaulted: bool,
    pub division: Option<Division>,
    pub opening_balance: i32,
}

impl TeamGameContribution {
    /// Assemble a row from identity fields plus a calculated breakdown.
    #[allow(clippy::too_many_arguments)]
    pub fn from_breakdown(
        team: String,
        opponent: String,
        fixture_id: FixtureId,
        played_on: Date,
        points_for: i32,
        points_against: i32,
        breakdown: PointsBreakdown,
        division: Option<Division>,
        opening_balance: i32,
    ) -> Self {
        Self {
            team,
            opponent,
            fixture_id,
            played_on,
            points_for,
            points_against,
            outcome: breakdown.outcome,
            match_points: breakdown.match_points,
            close_loss_bonus: breakdown.close_loss_bonus,
            female_try_bonus: breakdown.female_try_bonus,
            conduct_points: breakdown.conduct_points,
            unstripped_penalty: breakdown.unstripped_penalty,
            total_points: breakdown.total_points,
            defaulted: breakdown.outcome == MatchOutcome::Defaulted,
            division,
            opening_balance,
        }
    }
}
