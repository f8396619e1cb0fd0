use crate::domain::points::{score_game, score_side, MatchOutcome, SideInput};
use crate::domain::GameResult;

fn side(points_for: i32, points_against: i32) -> SideInput {
    SideInput {
        points_for,
        points_against,
        female_tries: 0,
        conduct: 10,
        unstripped: 0,
        defaulted: false,
        opponent_defaulted: false,
    }
}

#[test]
fn decisive_win_with_female_try_bonus() {
    // Home 20-10, four female tries, conduct 10; away conduct 8, margin 10.
    let result = GameResult {
        home_score: 20,
        away_score: 10,
        home_female_tries: 4,
        away_female_tries: 0,
        home_conduct: 10,
        away_conduct: 8,
        home_unstripped: 0,
        away_unstripped: 0,
        home_defaulted: false,
        away_defaulted: false,
    };
    let (home, away) = score_game(&result);

    assert_eq!(home.outcome, MatchOutcome::Win);
    assert_eq!(home.match_points, 3);
    assert_eq!(home.female_try_bonus, 1);
    assert_eq!(home.conduct_points, 10);
    assert_eq!(home.total_points, 14);

    assert_eq!(away.outcome, MatchOutcome::Loss);
    assert_eq!(away.match_points, 0);
    assert_eq!(away.close_loss_bonus, 0); // margin 10, no bonus
    assert_eq!(away.conduct_points, 8);
    assert_eq!(away.total_points, 8);
}

#[test]
fn close_loss_earns_bonus_point() {
    // Home 10-12: away wins by 2, home gets the close-loss bonus.
    let result = GameResult {
        home_score: 10,
        away_score: 12,
        home_female_tries: 0,
        away_female_tries: 0,
        home_conduct: 10,
        away_conduct: 10,
        home_unstripped: 0,
        away_unstripped: 0,
        home_defaulted: false,
        away_defaulted: false,
    };
    let (home, away) = score_game(&result);

    assert_eq!(home.outcome, MatchOutcome::Loss);
    assert_eq!(home.match_points, 0);
    assert_eq!(home.close_loss_bonus, 1);
    assert_eq!(home.total_points, 11);

    assert_eq!(away.outcome, MatchOutcome::Win);
    assert_eq!(away.match_points, 3);
    assert_eq!(away.total_points, 13);
}

#[test]
fn draw_scores_two_each() {
    let (home, away) = score_game(&GameResult {
        home_score: 14,
        away_score: 14,
        home_female_tries: 0,
        away_female_tries: 0,
        home_conduct: 9,
        away_conduct: 10,
        home_unstripped: 0,
        away_unstripped: 0,
        home_defaulted: false,
        away_defaulted: false,
    });
    assert_eq!(home.outcome, MatchOutcome::Draw);
    assert_eq!(away.outcome, MatchOutcome::Draw);
    assert_eq!(home.match_points, 2);
    assert_eq!(away.match_points, 2);
    assert_eq!(home.close_loss_bonus, 0);
    assert_eq!(away.close_loss_bonus, 0);
}

#[test]
fn default_forces_ten_and_thirteen_ignoring_recorded_inputs() {
    // Away's recorded conduct is 3 and home recorded a score; both are
    // overridden by the forfeit rule.
    let result = GameResult {
        home_score: 35,
        away_score: 0,
        home_female_tries: 6,
        away_female_tries: 5,
        home_conduct: 2,
        away_conduct: 3,
        home_unstripped: 4,
        away_unstripped: 4,
        home_defaulted: true,
        away_defaulted: false,
    };
    let (home, away) = score_game(&result);

    assert_eq!(home.outcome, MatchOutcome::Defaulted);
    assert_eq!(home.match_points, 0);
    assert_eq!(home.close_loss_bonus, 0);
    assert_eq!(home.female_try_bonus, 0);
    assert_eq!(home.unstripped_penalty, 0);
    assert_eq!(home.conduct_points, 10);
    assert_eq!(home.total_points, 10);

    assert_eq!(away.outcome, MatchOutcome::Win);
    assert_eq!(away.match_points, 3);
    assert_eq!(away.female_try_bonus, 0);
    assert_eq!(away.unstripped_penalty, 0);
    assert_eq!(away.conduct_points, 10);
    assert_eq!(away.total_points, 13);
}

#[test]
fn both_defaulted_in_stored_data_scores_both_as_defaulters() {
    let result = GameResult {
        home_score: 0,
        away_score: 0,
        home_female_tries: 0,
        away_female_tries: 0,
        home_conduct: 5,
        away_conduct: 5,
        home_unstripped: 0,
        away_unstripped: 0,
        home_defaulted: true,
        away_defaulted: true,
    };
    let (home, away) = score_game(&result);
    assert_eq!(home.outcome, MatchOutcome::Defaulted);
    assert_eq!(away.outcome, MatchOutcome::Defaulted);
    assert_eq!(home.total_points, 10);
    assert_eq!(away.total_points, 10);
}

#[test]
fn unstripped_penalty_applies_at_three() {
    let mut input = side(10, 20);
    input.unstripped = 2;
    assert_eq!(score_side(&input).unstripped_penalty, 0);
    input.unstripped = 3;
    assert_eq!(score_side(&input).unstripped_penalty, -2);
}

#[test]
fn female_try_bonus_applies_at_four() {
    let mut input = side(20, 10);
    input.female_tries = 3;
    assert_eq!(score_side(&input).female_try_bonus, 0);
    input.female_tries = 4;
    assert_eq!(score_side(&input).female_try_bonus, 1);
}

#[test]
fn conduct_passes_through_on_normal_games() {
    let mut input = side(5, 5);
    input.conduct = 7;
    let breakdown = score_side(&input);
    assert_eq!(breakdown.conduct_points, 7);
    assert_eq!(breakdown.total_points, 2 + 7);
}
