//! Ladder rows and the ladder ordering.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// One team's line in a division ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    /// Losses for display purposes; a defaulted game counts here.
    pub lost: u32,
    pub points_for: i32,
    pub points_against: i32,
    pub points_difference: i32,
    pub opening_balance: i32,
    pub season_points: i32,
    /// `opening_balance + season_points`.
    pub total: i32,
}

/// The ladder ordering: descending total, then descending points difference,
/// then descending points for, then ascending team name.
///
/// The name tie-break makes the ordering total whenever team names are
/// distinct, which the registry's unique-name key guarantees.
pub fn ladder_cmp(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.total
        .cmp(&a.total)
        .then_with(|| b.points_difference.cmp(&a.points_difference))
        .then_with(|| b.points_for.cmp(&a.points_for))
        .then_with(|| a.team.cmp(&b.team))
}
