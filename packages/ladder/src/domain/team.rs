//! Team registry records.

use serde::{Deserialize, Serialize};

use crate::domain::division::Division;

/// A registered team: division assignment plus carried-forward balance.
///
/// `name` is the unique key across the registry. `opening_balance` carries
/// ladder points earned before this system's season and may be negative.
/// `division` is `None` for teams not yet assigned; the validator reports
/// such teams when they appear in fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub division: Option<Division>,
    pub opening_balance: i32,
}

impl Team {
    pub fn new(name: impl Into<String>, division: Option<Division>, opening_balance: i32) -> Self {
        Self {
            name: name.into(),
            division,
            opening_balance,
        }
    }
}
