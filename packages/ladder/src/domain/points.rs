//! Points calculator: one side's raw inputs to a points breakdown.
//!
//! Pure functions; no store access and no side effects. The aggregator calls
//! [`score_game`] once per played fixture, which scores both sides with the
//! inputs swapped.

use serde::{Deserialize, Serialize};

use crate::domain::game_result::GameResult;
use crate::domain::rules;

/// Outcome of one side's game, as shown in the ladder's W/D/L columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
    Defaulted,
}

/// One side's raw inputs, oriented so `points_for` belongs to the side
/// being scored. `opponent_defaulted` folds the cross-side forfeit rule
/// into the calculator so it stays a pure single-side function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SideInput {
    pub points_for: i32,
    pub points_against: i32,
    pub female_tries: i32,
    pub conduct: i32,
    pub unstripped: i32,
    pub defaulted: bool,
    pub opponent_defaulted: bool,
}

/// The calculated breakdown for one side of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub outcome: MatchOutcome,
    pub match_points: i32,
    pub close_loss_bonus: i32,
    pub female_try_bonus: i32,
    pub conduct_points: i32,
    pub unstripped_penalty: i32,
    pub total_points: i32,
}

/// Score one side of a game.
///
/// Forfeit handling overrides everything else: a defaulting side scores a
/// bare forced conduct (total 10), the opponent of a defaulter scores a win
/// plus forced conduct (total 13), and in both cases the recorded conduct,
/// female tries and unstripped counts are ignored. If both flags are somehow
/// set in stored data (imported around the write guard) each side is scored
/// as a defaulting side; the validator flags the record.
pub fn score_side(input: &SideInput) -> PointsBreakdown {
    if input.defaulted {
        return PointsBreakdown {
            outcome: MatchOutcome::Defaulted,
            match_points: 0,
            close_loss_bonus: 0,
            female_try_bonus: 0,
            conduct_points: rules::FORCED_CONDUCT,
            unstripped_penalty: 0,
            total_points: rules::DEFAULTING_SIDE_TOTAL,
        };
    }

    if input.opponent_defaulted {
        return PointsBreakdown {
            outcome: MatchOutcome::Win,
            match_points: rules::WIN_MATCH_POINTS,
            close_loss_bonus: 0,
            female_try_bonus: 0,
            conduct_points: rules::FORCED_CONDUCT,
            unstripped_penalty: 0,
            total_points: rules::DEFAULT_WINNER_TOTAL,
        };
    }

    let (outcome, match_points) = if input.points_for > input.points_against {
        (MatchOutcome::Win, rules::WIN_MATCH_POINTS)
    } else if input.points_for == input.points_against {
        (MatchOutcome::Draw, rules::DRAW_MATCH_POINTS)
    } else {
        (MatchOutcome::Loss, rules::LOSS_MATCH_POINTS)
    };

    let margin = input.points_against - input.points_for;
    let close_loss_bonus = if outcome == MatchOutcome::Loss
        && rules::CLOSE_LOSS_MARGINS.contains(&margin)
    {
        rules::CLOSE_LOSS_BONUS
    } else {
        0
    };

    let female_try_bonus = if input.female_tries >= rules::FEMALE_TRY_THRESHOLD {
        rules::FEMALE_TRY_BONUS
    } else {
        0
    };

    let unstripped_penalty = if input.unstripped >= rules::UNSTRIPPED_THRESHOLD {
        rules::UNSTRIPPED_PENALTY
    } else {
        0
    };

    // Conduct passes through unchanged on normal games; range is enforced at
    // the recording UI and re-checked by the validator, not here.
    let conduct_points = input.conduct;

    PointsBreakdown {
        outcome,
        match_points,
        close_loss_bonus,
        female_try_bonus,
        conduct_points,
        unstripped_penalty,
        total_points: match_points
            + close_loss_bonus
            + female_try_bonus
            + conduct_points
            + unstripped_penalty,
    }
}

/// Score both sides of a recorded game: `(home, away)`.
pub fn score_game(result: &GameResult) -> (PointsBreakdown, PointsBreakdown) {
    let home = score_side(&SideInput {
        points_for: result.home_score,
        points_against: result.away_score,
        female_tries: result.home_female_tries,
        conduct: result.home_conduct,
        unstripped: result.home_unstripped,
        defaulted: result.home_defaulted,
        opponent_defaulted: result.away_defaulted,
    });
    let away = score_side(&SideInput {
        points_for: result.away_score,
        points_against: result.home_score,
        female_tries: result.away_female_tries,
        conduct: result.away_conduct,
        unstripped: result.away_unstripped,
        defaulted: result.away_defaulted,
        opponent_defaulted: result.home_defaulted,
    });
    (home, away)
}
