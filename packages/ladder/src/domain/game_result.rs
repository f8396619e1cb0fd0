//! Recorded scoring inputs for a played fixture.

use serde::{Deserialize, Serialize};

use crate::domain::rules;
use crate::errors::domain::{DomainError, ValidationKind};

/// Raw scoring inputs for one fixture, recorded after the match.
///
/// At most one record exists per fixture; absence means "not yet played" and
/// the fixture contributes nothing to any aggregate (it is never a 0-0 draw).
///
/// Numeric fields are `i32` rather than unsigned so that out-of-range data
/// imported around the write guard stays representable and the validator can
/// report it instead of the type system silently clamping it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub home_score: i32,
    pub away_score: i32,
    pub home_female_tries: i32,
    pub away_female_tries: i32,
    pub home_conduct: i32,
    pub away_conduct: i32,
    pub home_unstripped: i32,
    pub away_unstripped: i32,
    pub home_defaulted: bool,
    pub away_defaulted: bool,
}

impl GameResult {
    /// Write-time invariant check.
    ///
    /// A result may mark at most one side as defaulted; stores must call
    /// this before persisting and refuse the whole write on error, leaving
    /// any prior record untouched.
    pub fn check_writable(&self) -> Result<(), DomainError> {
        if self.home_defaulted && self.away_defaulted {
            return Err(DomainError::validation(
                ValidationKind::BothSidesDefaulted,
                "Both sides of a game result are marked as defaulted",
            ));
        }
        Ok(())
    }

    /// Every numeric field with its name, for data-quality scans.
    pub fn numeric_fields(&self) -> [(&'static str, i32); 8] {
        [
            ("home_score", self.home_score),
            ("away_score", self.away_score),
            ("home_female_tries", self.home_female_tries),
            ("away_female_tries", self.away_female_tries),
            ("home_conduct", self.home_conduct),
            ("away_conduct", self.away_conduct),
            ("home_unstripped", self.home_unstripped),
            ("away_unstripped", self.away_unstripped),
        ]
    }

    /// Whether `conduct` is inside the legal [0,10] band.
    pub fn conduct_in_range(conduct: i32) -> bool {
        rules::CONDUCT_RANGE.contains(&conduct)
    }
}
