//! Season files and generated demo seasons.

use std::path::Path;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use time::macros::{date, time};
use time::{Duration, PrimitiveDateTime};

use ladder::{Division, Fixture, FixtureId, GameResult, MemorySeasonStore, ResultStore, Team};

/// On-disk season interchange format: plain JSON of the domain records.
#[derive(Debug, Serialize, Deserialize)]
pub struct SeasonFile {
    pub teams: Vec<Team>,
    pub fixtures: Vec<Fixture>,
    #[serde(default)]
    pub results: Vec<RecordedResult>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RecordedResult {
    pub fixture_id: FixtureId,
    #[serde(flatten)]
    pub result: GameResult,
}

impl SeasonFile {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Load the season into a fresh store, results through the guarded
    /// write path so bad files fail the same way bad admin input would.
    pub fn into_store(self) -> Result<Arc<MemorySeasonStore>, Box<dyn std::error::Error>> {
        let store = Arc::new(MemorySeasonStore::new());
        for team in self.teams {
            store.upsert_team(team)?;
        }
        for fixture in self.fixtures {
            store.upsert_fixture(fixture)?;
        }
        for recorded in self.results {
            store.upsert_result(recorded.fixture_id, recorded.result)?;
        }
        Ok(store)
    }
}

/// Generate a demo season: `teams_per_division` teams in every division,
/// `rounds` Saturdays of pairings, results recorded for all but the final
/// round so warnings have something to report.
pub fn generate(teams_per_division: usize, rounds: u32, seed: u64) -> SeasonFile {
    let mut rng = StdRng::seed_from_u64(seed);
    let season_start = date!(2026 - 05 - 02);

    let mut teams = Vec::new();
    for division in Division::ALL {
        for i in 0..teams_per_division {
            teams.push(Team::new(
                format!("{} {}", TEAM_NAMES[i % TEAM_NAMES.len()], division.label()),
                Some(division),
                rng.random_range(-2..6),
            ));
        }
    }

    let mut fixtures = Vec::new();
    let mut results = Vec::new();
    let mut next_id: FixtureId = 1;

    for round in 0..rounds {
        let day = season_start + Duration::weeks(i64::from(round));
        for division in Division::ALL {
            let division_teams: Vec<&Team> = teams
                .iter()
                .filter(|t| t.division == Some(division))
                .collect();
            for pair in division_teams.chunks(2) {
                let [home, away] = pair else { continue };
                let id = next_id;
                next_id += 1;
                fixtures.push(Fixture {
                    id,
                    home_team: home.name.clone(),
                    away_team: away.name.clone(),
                    field: format!("Field {}", (id % 4) + 1),
                    start: PrimitiveDateTime::new(day, time!(14:00)),
                });
                // Last round stays unplayed
                if round + 1 < rounds {
                    results.push(RecordedResult {
                        fixture_id: id,
                        result: random_result(&mut rng),
                    });
                }
            }
        }
    }

    SeasonFile {
        teams,
        fixtures,
        results,
    }
}

fn random_result(rng: &mut StdRng) -> GameResult {
    // Roughly one forfeit in twenty games
    let forfeit = rng.random_range(0..20) == 0;
    let home_defaulted = forfeit && rng.random_bool(0.5);
    let away_defaulted = forfeit && !home_defaulted;
    GameResult {
        home_score: rng.random_range(0..40),
        away_score: rng.random_range(0..40),
        home_female_tries: rng.random_range(0..6),
        away_female_tries: rng.random_range(0..6),
        home_conduct: rng.random_range(7..=10),
        away_conduct: rng.random_range(7..=10),
        home_unstripped: rng.random_range(0..4),
        away_unstripped: rng.random_range(0..4),
        home_defaulted,
        away_defaulted,
    }
}

const TEAM_NAMES: [&str; 8] = [
    "Swifts", "Rovers", "Pirates", "Bandits", "Comets", "Saints", "Wolves", "Falcons",
];
