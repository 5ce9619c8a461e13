use chrono::{DateTime, Utc};
use entity::{EmployeeCollectionResponse, EmployeeRecord};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowIndexError {
    #[error("row {index} out of bounds for roster of {count}")]
    OutOfBounds { index: usize, count: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RosterState {
    Empty,
    Populated,
}

/// Two-field display unit handed to the view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EmployeeRow<'a> {
    pub name: &'a str,
    pub profile: &'a str,
}

impl<'a> EmployeeRow<'a> {
    pub fn as_tuple(&self) -> (&'a str, &'a str) {
        (self.name, self.profile)
    }
}

impl<'a> From<&'a EmployeeRecord> for EmployeeRow<'a> {
    fn from(record: &'a EmployeeRecord) -> Self {
        Self {
            name: &record.name,
            profile: &record.profile,
        }
    }
}

/// Result of a wholesale replacement. Anything positional the view kept
/// (scroll offset, selection) is stale once this is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RosterChange {
    pub previous: usize,
    pub current: usize,
}

#[derive(Debug, Default)]
pub struct Roster {
    rows: Vec<EmployeeRecord>,
    message: Option<String>,
    loaded_at: Option<DateTime<Utc>>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> RosterState {
        if self.loaded_at.is_some() {
            RosterState::Populated
        } else {
            RosterState::Empty
        }
    }

    /// Drop every current row and install `records` in their place.
    pub fn replace_all(&mut self, records: Vec<EmployeeRecord>) -> RosterChange {
        let previous = self.rows.len();
        self.rows = records;
        self.message = None;
        self.loaded_at = Some(Utc::now());
        RosterChange {
            previous,
            current: self.rows.len(),
        }
    }

    /// Same as [`Roster::replace_all`], also keeping the envelope message.
    pub fn replace_with_response(&mut self, response: EmployeeCollectionResponse) -> RosterChange {
        let EmployeeCollectionResponse { message, employees } = response;
        let change = self.replace_all(employees);
        self.message = Some(message);
        change
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }

    pub fn row_at(&self, index: usize) -> Result<EmployeeRow<'_>, RowIndexError> {
        self.rows
            .get(index)
            .map(EmployeeRow::from)
            .ok_or(RowIndexError::OutOfBounds {
                index,
                count: self.rows.len(),
            })
    }

    pub fn rows(&self) -> impl Iterator<Item = EmployeeRow<'_>> {
        self.rows.iter().map(EmployeeRow::from)
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }
}
