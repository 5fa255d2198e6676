use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::domain::LeaveStatus;

/// One immutable entry in a request's audit log.
///
/// `from` is `None` only for the entry recorded when the request is created. Entries that
/// annotate a request without moving it (certificates, approvals, extensions) carry the same
/// status on both sides and a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    changed_by: String,
    from: Option<LeaveStatus>,
    to: LeaveStatus,
    note: Option<String>,
    at: DateTime<Utc>,
}

impl StatusChange {
    pub fn changed_by(&self) -> &str {
        &self.changed_by
    }

    pub fn from_status(&self) -> Option<&LeaveStatus> {
        self.from.as_ref()
    }

    pub fn to_status(&self) -> &LeaveStatus {
        &self.to
    }

    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.at
    }

    pub fn is_transition(&self) -> bool {
        self.from.as_ref() != Some(&self.to)
    }
}

impl fmt::Display for StatusChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = self
            .from
            .as_ref()
            .map_or_else(|| "Created".to_string(), ToString::to_string);
        write!(
            f,
            "[{}] {}: {} -> {}",
            self.at.date_naive(),
            self.changed_by,
            from,
            self.to
        )?;
        if let Some(note) = &self.note {
            write!(f, " ({note})")?;
        }
        Ok(())
    }
}

/// Append-only log of status changes owned by a single request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusHistory {
    changes: Vec<StatusChange>,
}

impl StatusHistory {
    pub(crate) fn record(
        &mut self,
        changed_by: &str,
        from: Option<LeaveStatus>,
        to: LeaveStatus,
        note: Option<String>,
    ) {
        self.changes.push(StatusChange {
            changed_by: changed_by.to_string(),
            from,
            to,
            note,
            at: Utc::now(),
        });
    }

    pub fn changes(&self) -> &[StatusChange] {
        &self.changes
    }

    pub fn latest(&self) -> Option<&StatusChange> {
        self.changes.last()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
