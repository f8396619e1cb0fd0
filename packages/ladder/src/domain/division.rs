//! Division identifiers for the league ladder.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::DomainError;

/// The fixed set of divisions teams may be assigned to.
///
/// Serialized as the canonical SCREAMING_SNAKE token (`MENS_A`, ...);
/// `Display` renders the human label used in printed ladders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Division {
    MensA,
    MensB,
    MixedA,
    MixedB,
    Womens,
}

impl Division {
    /// All divisions in display order.
    pub const ALL: [Division; 5] = [
        Division::MensA,
        Division::MensB,
        Division::MixedA,
        Division::MixedB,
        Division::Womens,
    ];

    /// Canonical token, stable across releases.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Division::MensA => "MENS_A",
            Division::MensB => "MENS_B",
            Division::MixedA => "MIXED_A",
            Division::MixedB => "MIXED_B",
            Division::Womens => "WOMENS",
        }
    }

    /// Human-readable label for printed output.
    pub const fn label(&self) -> &'static str {
        match self {
            Division::MensA => "Mens A",
            Division::MensB => "Mens B",
            Division::MixedA => "Mixed A",
            Division::MixedB => "Mixed B",
            Division::Womens => "Womens",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Division {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MENS_A" => Ok(Division::MensA),
            "MENS_B" => Ok(Division::MensB),
            "MIXED_A" => Ok(Division::MixedA),
            "MIXED_B" => Ok(Division::MixedB),
            "WOMENS" => Ok(Division::Womens),
            other => Err(DomainError::validation_other(
                "UnknownDivision",
                format!("Unknown division token: {other}"),
            )),
        }
    }
}
