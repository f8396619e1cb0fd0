// Proptest generators for scoring inputs.

use proptest::prelude::*;

use crate::domain::GameResult;

/// A recorded result for a normally played game: in-range conduct, no
/// default flags.
pub fn normal_result() -> impl Strategy<Value = GameResult> {
    (
        0..120i32,
        0..120i32,
        0..8i32,
        0..=10i32,
        0..=10i32,
        0..6i32,
        0..6i32,
    )
        .prop_map(
            |(home_score, away_score, tries, home_conduct, away_conduct, home_un, away_un)| {
                GameResult {
                    home_score,
                    away_score,
                    home_female_tries: tries,
                    away_female_tries: tries / 2,
                    home_conduct,
                    away_conduct,
                    home_unstripped: home_un,
                    away_unstripped: away_un,
                    home_defaulted: false,
                    away_defaulted: false,
                }
            },
        )
}

/// A result where exactly one side defaulted, with arbitrary (even absurd)
/// recorded scores and conduct so tests can assert the override rules.
pub fn one_side_defaulted() -> impl Strategy<Value = GameResult> {
    (normal_result(), any::<bool>()).prop_map(|(mut result, home_defaults)| {
        result.home_defaulted = home_defaults;
        result.away_defaulted = !home_defaults;
        result
    })
}
