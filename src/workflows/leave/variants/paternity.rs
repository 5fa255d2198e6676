use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const STANDARD_PATERNITY_DAYS: i64 = 10;
pub const ADOPTION_PATERNITY_DAYS: i64 = 14;
/// Latest start, in whole weeks after the birth, that still qualifies.
pub const MAX_WEEKS_AFTER_BIRTH: i64 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaternityLeave {
    child_birth_date: NaiveDate,
    adoption: bool,
}

impl PaternityLeave {
    pub(crate) fn new(child_birth_date: NaiveDate, adoption: bool) -> Self {
        Self {
            child_birth_date,
            adoption,
        }
    }

    pub(crate) fn days_for(adoption: bool) -> i64 {
        if adoption {
            ADOPTION_PATERNITY_DAYS
        } else {
            STANDARD_PATERNITY_DAYS
        }
    }

    /// A start before the birth never qualifies.
    pub(crate) fn is_within_valid_period(&self, start: NaiveDate) -> bool {
        let days_after_birth = (start - self.child_birth_date).num_days();
        days_after_birth >= 0 && days_after_birth / 7 <= MAX_WEEKS_AFTER_BIRTH
    }

    pub fn child_birth_date(&self) -> NaiveDate {
        self.child_birth_date
    }

    pub fn is_adoption(&self) -> bool {
        self.adoption
    }
}
