//! Ladder scoring and standings engine for an amateur sports league.
//!
//! Turns raw per-game scoring inputs (scores, bonus-point triggers, conduct
//! marks, forfeit flags) into a per-team-per-game audit trail and ranked,
//! tie-broken division standings as of any date, plus advisory data-quality
//! warnings. The surrounding competition-management application supplies the
//! stores and the UI; this crate owns only the computation.
//!
//! Entry point for embedders is [`state::LadderEngine`]; the pure pieces are
//! usable on their own through [`domain`] and [`services`].

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod state;
pub mod store;

pub use config::EngineConfig;
pub use domain::{
    DateWindow, Division, Fixture, FixtureId, GameResult, MatchOutcome, StandingsRow, Team,
    TeamGameContribution,
};
pub use error::EngineError;
pub use services::DataQualityWarning;
pub use state::LadderEngine;
pub use store::{FixtureStore, MemorySeasonStore, ResultStore, TeamStore};
