//! Text and JSON renderers for engine output.

use serde::Serialize;

use ladder::services::validation;
use ladder::{DataQualityWarning, Division, StandingsRow, TeamGameContribution};

/// Everything one run produces, for `--json` mode.
#[derive(Serialize)]
pub struct Report {
    pub ladders: Vec<DivisionLadder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<Vec<TeamGameContribution>>,
    pub warnings: Vec<DataQualityWarning>,
}

#[derive(Serialize)]
pub struct DivisionLadder {
    pub division: Division,
    pub rows: Vec<StandingsRow>,
}

pub fn print_ladder(division: Division, rows: &[StandingsRow]) {
    println!("\n{division}");
    println!(
        "{:<4}{:<28}{:>3}{:>4}{:>4}{:>4}{:>6}{:>6}{:>6}{:>6}{:>7}",
        "#", "Team", "P", "W", "D", "L", "PF", "PA", "PD", "Open", "Total"
    );
    for (rank, row) in rows.iter().enumerate() {
        println!(
            "{:<4}{:<28}{:>3}{:>4}{:>4}{:>4}{:>6}{:>6}{:>6}{:>6}{:>7}",
            rank + 1,
            row.team,
            row.played,
            row.won,
            row.drawn,
            row.lost,
            row.points_for,
            row.points_against,
            row.points_difference,
            row.opening_balance,
            row.total,
        );
    }
}

pub fn print_audit(rows: &[TeamGameContribution]) {
    println!("\nAudit trail ({} rows)", rows.len());
    for row in rows {
        println!(
            "{} fixture {:<4} {:<28} {:>3}-{:<3} {:?} mp {} clb {} ftb {} con {} usp {} -> {}",
            row.played_on,
            row.fixture_id,
            row.team,
            row.points_for,
            row.points_against,
            row.outcome,
            row.match_points,
            row.close_loss_bonus,
            row.female_try_bonus,
            row.conduct_points,
            row.unstripped_penalty,
            row.total_points,
        );
    }
}

pub fn print_warnings(warnings: &[DataQualityWarning]) {
    if warnings.is_empty() {
        println!("\nNo data-quality warnings.");
        return;
    }
    println!("\nWarnings ({}):", warnings.len());
    for message in validation::messages(warnings) {
        println!("  - {message}");
    }
}
