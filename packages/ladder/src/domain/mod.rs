//! Domain layer: pure scoring types and rules.

pub mod contribution;
pub mod division;
pub mod fixture;
pub mod game_result;
pub mod points;
pub mod rules;
pub mod standings_row;
pub mod team;
pub mod window;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_points;
#[cfg(test)]
mod tests_props_points;

// Re-exports for ergonomics
pub use contribution::TeamGameContribution;
pub use division::Division;
pub use fixture::{Fixture, FixtureId};
pub use game_result::GameResult;
pub use points::{score_game, score_side, MatchOutcome, PointsBreakdown, SideInput};
pub use standings_row::{ladder_cmp, StandingsRow};
pub use team::Team;
pub use window::DateWindow;
