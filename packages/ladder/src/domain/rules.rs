//! Ladder scoring constants.
//!
//! These are league rules, fixed by the competition handbook; none of them
//! are configurable at runtime.

use std::ops::RangeInclusive;

pub const WIN_MATCH_POINTS: i32 = 3;
pub const DRAW_MATCH_POINTS: i32 = 2;
pub const LOSS_MATCH_POINTS: i32 = 0;

/// Bonus point for losing by a margin inside [`CLOSE_LOSS_MARGINS`].
pub const CLOSE_LOSS_BONUS: i32 = 1;
pub const CLOSE_LOSS_MARGINS: RangeInclusive<i32> = 1..=2;

/// Bonus point for scoring at least [`FEMALE_TRY_THRESHOLD`] female tries.
pub const FEMALE_TRY_BONUS: i32 = 1;
pub const FEMALE_TRY_THRESHOLD: i32 = 4;

/// Penalty for fielding at least [`UNSTRIPPED_THRESHOLD`] non-compliant players.
pub const UNSTRIPPED_PENALTY: i32 = -2;
pub const UNSTRIPPED_THRESHOLD: i32 = 3;

/// Legal band for a recorded conduct mark.
pub const CONDUCT_RANGE: RangeInclusive<i32> = 0..=10;

/// Conduct awarded to both sides whenever either side defaulted, overriding
/// whatever conduct value was recorded.
pub const FORCED_CONDUCT: i32 = 10;

// Fixed forfeit totals: the defaulting side keeps only the forced conduct,
// the opponent gets a win plus the forced conduct.
pub const DEFAULTING_SIDE_TOTAL: i32 = FORCED_CONDUCT;
pub const DEFAULT_WINNER_TOTAL: i32 = WIN_MATCH_POINTS + FORCED_CONDUCT;
