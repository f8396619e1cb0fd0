//! Data-quality scan over a date window.
//!
//! Everything reported here is advisory: the audit and standings paths keep
//! computing with best-effort defaults while administrators fix the data.

use core::fmt;
use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::domain::{DateWindow, FixtureId, GameResult, Team};
use crate::errors::domain::DomainError;
use crate::store::{FixtureStore, ResultStore, TeamStore};

/// One advisory finding from a validation scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataQualityWarning {
    /// A fixture team is registered but has no division assigned.
    MissingDivision { team: String, fixture_id: FixtureId },
    /// A fixture team does not appear in the registry at all.
    UnregisteredTeam { team: String, fixture_id: FixtureId },
    /// A stored result has both default flags set (imported around the
    /// write guard; the guard itself rejects these).
    BothSidesDefaulted { fixture_id: FixtureId },
    /// Conduct outside [0,10] on a side that did not default.
    ConductOutOfRange {
        team: String,
        fixture_id: FixtureId,
        conduct: i32,
    },
    /// A stored result carries a negative numeric field.
    NegativeField {
        fixture_id: FixtureId,
        field: &'static str,
        value: i32,
    },
    /// A fixture inside the window has no recorded result yet.
    MissingResult {
        fixture_id: FixtureId,
        home_team: String,
        away_team: String,
    },
}

impl fmt::Display for DataQualityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingDivision { team, fixture_id } => write!(
                f,
                "Team '{team}' in fixture {fixture_id} has no division assigned"
            ),
            Self::UnregisteredTeam { team, fixture_id } => write!(
                f,
                "Team '{team}' in fixture {fixture_id} is not in the team registry"
            ),
            Self::BothSidesDefaulted { fixture_id } => write!(
                f,
                "Result for fixture {fixture_id} has both sides marked as defaulted"
            ),
            Self::ConductOutOfRange {
                team,
                fixture_id,
                conduct,
            } => write!(
                f,
                "Conduct {conduct} for team '{team}' in fixture {fixture_id} is outside 0-10"
            ),
            Self::NegativeField {
                fixture_id,
                field,
                value,
            } => write!(
                f,
                "Result for fixture {fixture_id} has negative {field} ({value})"
            ),
            Self::MissingResult {
                fixture_id,
                home_team,
                away_team,
            } => write!(
                f,
                "Fixture {fixture_id} ({home_team} v {away_team}) has no recorded result"
            ),
        }
    }
}

/// Render warnings as the human-readable strings the interface contract
/// promises.
pub fn messages(warnings: &[DataQualityWarning]) -> Vec<String> {
    warnings.iter().map(|w| w.to_string()).collect()
}

/// Scan `window` and report advisory warnings; never fails on the
/// conditions it reports.
pub fn validate(
    teams: &dyn TeamStore,
    fixtures: &dyn FixtureStore,
    results: &dyn ResultStore,
    window: &DateWindow,
) -> Result<Vec<DataQualityWarning>, DomainError> {
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

    let mut warnings = Vec::new();
    for fixture in &scheduled {
        for team in [&fixture.home_team, &fixture.away_team] {
            match registry.get(team) {
                None => warnings.push(DataQualityWarning::UnregisteredTeam {
                    team: team.clone(),
                    fixture_id: fixture.id,
                }),
                Some(t) if t.division.is_none() => {
                    warnings.push(DataQualityWarning::MissingDivision {
                        team: team.clone(),
                        fixture_id: fixture.id,
                    })
                }
                Some(_) => {}
            }
        }

        match results.get_result(fixture.id)? {
            None => warnings.push(DataQualityWarning::MissingResult {
                fixture_id: fixture.id,
                home_team: fixture.home_team.clone(),
                away_team: fixture.away_team.clone(),
            }),
            Some(result) => check_result(fixture.id, fixture, &result, &mut warnings),
        }
    }

    debug!(
        fixtures = scheduled.len(),
        warnings = warnings.len(),
        "validation scan complete"
    );
    Ok(warnings)
}

fn check_result(
    fixture_id: FixtureId,
    fixture: &crate::domain::Fixture,
    result: &GameResult,
    warnings: &mut Vec<DataQualityWarning>,
) {
    if result.home_defaulted && result.away_defaulted {
        warnings.push(DataQualityWarning::BothSidesDefaulted { fixture_id });
    }

    // Conduct is only meaningful on a non-defaulted side; a defaulted side's
    // recorded conduct is overridden to 10 by the calculator anyway.
    if !result.home_defaulted && !GameResult::conduct_in_range(result.home_conduct) {
        warnings.push(DataQualityWarning::ConductOutOfRange {
            team: fixture.home_team.clone(),
            fixture_id,
            conduct: result.home_conduct,
        });
    }
    if !result.away_defaulted && !GameResult::conduct_in_range(result.away_conduct) {
        warnings.push(DataQualityWarning::ConductOutOfRange {
            team: fixture.away_team.clone(),
            fixture_id,
            conduct: result.away_conduct,
        });
    }

    for (field, value) in result.numeric_fields() {
        if value < 0 {
            warnings.push(DataQualityWarning::NegativeField {
                fixture_id,
                field,
                value,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::domain::Fixture;

    fn fixture() -> Fixture {
        Fixture {
            id: 4,
            home_team: "Swifts".into(),
            away_team: "Rovers".into(),
            field: "Field 1".into(),
            start: datetime!(2026 - 05 - 02 14:00),
        }
    }

    fn result() -> GameResult {
        GameResult {
            home_score: 0,
            away_score: 0,
            home_female_tries: 0,
            away_female_tries: 0,
            home_conduct: 10,
            away_conduct: 10,
            home_unstripped: 0,
            away_unstripped: 0,
            home_defaulted: false,
            away_defaulted: false,
        }
    }

    #[test]
    fn both_defaulted_stored_data_is_flagged() {
        // Can only arrive by import around the write guard; the scan still
        // has to catch it.
        let stored = GameResult {
            home_defaulted: true,
            away_defaulted: true,
            home_conduct: 99,
            ..result()
        };
        let mut warnings = Vec::new();
        check_result(4, &fixture(), &stored, &mut warnings);
        assert!(warnings.contains(&DataQualityWarning::BothSidesDefaulted { fixture_id: 4 }));
        // Conduct on a defaulted side is not separately flagged
        assert!(!warnings
            .iter()
            .any(|w| matches!(w, DataQualityWarning::ConductOutOfRange { .. })));
    }

    #[test]
    fn negative_conduct_is_flagged_twice() {
        // Below zero is both out of band and negative
        let stored = GameResult {
            home_conduct: -1,
            ..result()
        };
        let mut warnings = Vec::new();
        check_result(4, &fixture(), &stored, &mut warnings);
        assert!(warnings.contains(&DataQualityWarning::ConductOutOfRange {
            team: "Swifts".into(),
            fixture_id: 4,
            conduct: -1,
        }));
        assert!(warnings.contains(&DataQualityWarning::NegativeField {
            fixture_id: 4,
            field: "home_conduct",
            value: -1,
        }));
    }
}
