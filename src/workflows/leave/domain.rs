use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stable identifier for an employee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EmployeeId(pub u32);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identifier for a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId(pub u32);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Sick,
    Vacation,
    Maternity,
    Paternity,
    Bereavement,
    Unpaid,
    Study,
}

impl LeaveType {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Vacation,
            Self::Sick,
            Self::Study,
            Self::Bereavement,
            Self::Maternity,
            Self::Paternity,
            Self::Unpaid,
        ]
    }

    /// Short name used as the balance key.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sick => "Sick",
            Self::Vacation => "Vacation",
            Self::Maternity => "Maternity",
            Self::Paternity => "Paternity",
            Self::Bereavement => "Bereavement",
            Self::Unpaid => "Unpaid",
            Self::Study => "Study",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sick => "Sick Leave",
            Self::Vacation => "Vacation Leave",
            Self::Maternity => "Maternity Leave",
            Self::Paternity => "Paternity Leave",
            Self::Bereavement => "Bereavement Leave",
            Self::Unpaid => "Unpaid Leave",
            Self::Study => "Study Leave",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown leave type '{0}'")]
pub struct UnknownLeaveType(pub String);

impl FromStr for LeaveType {
    type Err = UnknownLeaveType;

    /// Accepts the balance key ("Vacation") or the label ("Vacation Leave"), ignoring case.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        let key = normalized
            .strip_suffix(" leave")
            .unwrap_or(normalized.as_str());

        match key {
            "sick" => Ok(Self::Sick),
            "vacation" => Ok(Self::Vacation),
            "maternity" => Ok(Self::Maternity),
            "paternity" => Ok(Self::Paternity),
            "bereavement" => Ok(Self::Bereavement),
            "unpaid" => Ok(Self::Unpaid),
            "study" => Ok(Self::Study),
            _ => Err(UnknownLeaveType(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected { reason: String },
}

impl LeaveStatus {
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub const fn is_approved(&self) -> bool {
        matches!(self, Self::Approved)
    }

    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("Pending"),
            Self::Approved => f.write_str("Approved"),
            Self::Rejected { reason } => write!(f, "Rejected: {reason}"),
        }
    }
}

/// Inclusive date range covered by a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPeriod")]
pub struct LeavePeriod {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawPeriod {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawPeriod> for LeavePeriod {
    type Error = LeaveError;

    fn try_from(raw: RawPeriod) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

fn offset_date(from: NaiveDate, days: i64) -> Result<NaiveDate, LeaveError> {
    Duration::try_days(days)
        .and_then(|delta| from.checked_add_signed(delta))
        .ok_or(LeaveError::DateOutOfRange { from, days })
}

impl LeavePeriod {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, LeaveError> {
        if end < start {
            return Err(LeaveError::EndBeforeStart { start, end });
        }
        Ok(Self { start, end })
    }

    /// Period starting on `start` that covers `days` calendar days, counting the start day.
    pub fn spanning(start: NaiveDate, days: i64) -> Result<Self, LeaveError> {
        let end = offset_date(start, days.max(1) - 1)?;
        Ok(Self { start, end })
    }

    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Same start, end pushed out by `days`.
    pub(crate) fn extended_by_days(&self, days: i64) -> Result<Self, LeaveError> {
        let end = offset_date(self.end, days)?;
        Self::new(self.start, end)
    }
}

/// Refusals raised by leave requests. A refused operation leaves the request untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LeaveError {
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("{days} day(s) from {from} falls outside the supported calendar")]
    DateOutOfRange { from: NaiveDate, days: i64 },
    #[error("approval requires sign-off from: {}", .missing.join(", "))]
    ApprovalsOutstanding { missing: Vec<&'static str> },
    #[error("extension must be at least one week")]
    EmptyExtension,
    #[error("extension of {requested} week(s) exceeds the {max} week cap")]
    ExtensionTooLong { requested: u32, max: u32 },
    #[error("an extension of {weeks} week(s) was already granted")]
    ExtensionAlreadyGranted { weeks: u32 },
    #[error("{operation} does not apply to {leave_type}")]
    NotApplicable {
        operation: &'static str,
        leave_type: LeaveType,
    },
}

/// Whole calendar months elapsed from `from` to `to`; zero when `to` is not after `from`.
pub(crate) fn completed_months(from: NaiveDate, to: NaiveDate) -> u32 {
    if to <= from {
        return 0;
    }

    let mut months =
        (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;
    if to.day() < from.day() {
        months -= 1;
    }

    u32::try_from(months).unwrap_or(0)
}

pub(crate) fn completed_years(from: NaiveDate, to: NaiveDate) -> u32 {
    completed_months(from, to) / 12
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn parses_keys_and_labels_case_insensitively() {
        assert_eq!("vacation".parse::<LeaveType>(), Ok(LeaveType::Vacation));
        assert_eq!("Sick Leave".parse::<LeaveType>(), Ok(LeaveType::Sick));
        assert_eq!(" STUDY ".parse::<LeaveType>(), Ok(LeaveType::Study));
        assert!("Sabbatical".parse::<LeaveType>().is_err());
    }

    #[test]
    fn period_rejects_inverted_dates() {
        let err = LeavePeriod::new(date(2025, 3, 10), date(2025, 3, 9)).unwrap_err();
        assert!(matches!(err, LeaveError::EndBeforeStart { .. }));
        assert_eq!(
            LeavePeriod::new(date(2025, 3, 10), date(2025, 3, 10))
                .expect("single day")
                .days(),
            1
        );
    }

    #[test]
    fn deserializing_enforces_start_before_end() {
        let inverted = serde_json::from_str::<LeavePeriod>(
            r#"{"start":"2025-03-10","end":"2025-03-01"}"#,
        );
        assert!(inverted.is_err());

        let period: LeavePeriod =
            serde_json::from_str(r#"{"start":"2025-03-01","end":"2025-03-10"}"#)
                .expect("ordered period");
        assert_eq!(period.days(), 10);
    }

    #[test]
    fn spanning_counts_the_start_day() {
        let period = LeavePeriod::spanning(date(2025, 3, 10), 5).expect("in range");
        assert_eq!(period.end(), date(2025, 3, 14));
        assert_eq!(period.days(), 5);
    }

    #[test]
    fn date_arithmetic_past_the_calendar_is_refused() {
        assert!(matches!(
            LeavePeriod::spanning(NaiveDate::MAX, 5),
            Err(LeaveError::DateOutOfRange { days: 4, .. })
        ));
        assert_eq!(
            LeavePeriod::spanning(NaiveDate::MAX, 1).map(|period| period.days()),
            Ok(1)
        );

        let period = LeavePeriod::new(date(2025, 3, 10), date(2025, 3, 14)).expect("ordered");
        assert!(period.extended_by_days(i64::MAX).is_err());
        assert_eq!(
            period.extended_by_days(2).map(|period| period.end()),
            Ok(date(2025, 3, 16))
        );
    }

    #[test]
    fn completed_months_respects_day_of_month() {
        assert_eq!(completed_months(date(2025, 1, 31), date(2025, 2, 28)), 0);
        assert_eq!(completed_months(date(2025, 1, 15), date(2025, 2, 15)), 1);
        assert_eq!(completed_years(date(2016, 2, 29), date(2026, 2, 28)), 9);
        assert_eq!(completed_years(date(2016, 10, 19), date(2026, 10, 19)), 10);
        assert_eq!(completed_years(date(2030, 1, 1), date(2026, 1, 1)), 0);
    }

    #[test]
    fn rejected_status_carries_reason_in_label() {
        let status = LeaveStatus::Rejected {
            reason: "Team at capacity".to_string(),
        };
        assert_eq!(status.to_string(), "Rejected: Team at capacity");
        assert!(status.is_rejected());
    }
}
