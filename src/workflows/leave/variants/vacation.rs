use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const MIN_ADVANCE_NOTICE_DAYS: i64 = 14;
pub const MAX_CONSECUTIVE_DAYS: i64 = 21;

/// Optional travel plans an employee may share for a vacation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelDetails {
    pub destination: String,
    pub accommodation_type: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub international: bool,
}

impl TravelDetails {
    pub fn new(
        destination: impl Into<String>,
        accommodation_type: impl Into<String>,
        emergency_contact_name: impl Into<String>,
        emergency_contact_phone: impl Into<String>,
    ) -> Self {
        Self {
            destination: destination.into(),
            accommodation_type: accommodation_type.into(),
            emergency_contact_name: emergency_contact_name.into(),
            emergency_contact_phone: emergency_contact_phone.into(),
            international: false,
        }
    }

    pub fn mark_as_international(&mut self) {
        self.international = true;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationLeave {
    travel_details: Option<TravelDetails>,
}

impl VacationLeave {
    pub(crate) fn exceeds_max_duration(leave_days: i64) -> bool {
        leave_days > MAX_CONSECUTIVE_DAYS
    }

    pub(crate) fn has_advance_notice(requested_on: NaiveDate, start: NaiveDate) -> bool {
        (start - requested_on).num_days() >= MIN_ADVANCE_NOTICE_DAYS
    }

    pub(crate) fn set_travel_details(&mut self, details: TravelDetails) {
        self.travel_details = Some(details);
    }

    pub fn travel_details(&self) -> Option<&TravelDetails> {
        self.travel_details.as_ref()
    }

    pub fn has_travel_details(&self) -> bool {
        self.travel_details.is_some()
    }
}
