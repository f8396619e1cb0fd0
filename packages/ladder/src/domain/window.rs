//! Inclusive date windows used to scope audit, standings and validation scans.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::errors::domain::{DomainError, ValidationKind};

/// An inclusive `[start, end]` range of league-local dates.
///
/// Constructed only through [`DateWindow::new`] so `start <= end` holds for
/// every value in circulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    start: Date,
    end: Date,
}

impl DateWindow {
    /// Build a window, rejecting inverted ranges.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::validation(
                ValidationKind::InvalidWindow,
                format!("Window start {start} is after end {end}"),
            ));
        }
        Ok(Self { start, end })
    }

    /// A window covering exactly one day.
    pub fn single_day(day: Date) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.end
    }

    /// Whether `day` falls inside the window (both bounds inclusive).
    pub fn contains(&self, day: Date) -> bool {
        self.start <= day && day <= self.end
    }

    /// Number of calendar days spanned, counting both endpoints.
    pub fn span_days(&self) -> i64 {
        (self.end - self.start).whole_days() + 1
    }
}
