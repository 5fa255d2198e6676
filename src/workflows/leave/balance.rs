use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::domain::{completed_years, LeaveType};

pub const BASE_VACATION_DAYS: u32 = 15;
pub const BASE_SICK_DAYS: u32 = 10;
pub const BONUS_DAYS_PER_FIVE_YEARS: u32 = 5;
const STUDY_DAYS: u32 = 10;
const BEREAVEMENT_DAYS: u32 = 10;
const MATERNITY_DAYS: u32 = 84;
const PATERNITY_DAYS: u32 = 10;

/// Refusals raised by balance bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BalanceError {
    #[error("insufficient {leave_type} balance: requested {requested}, available {available}")]
    Insufficient {
        leave_type: LeaveType,
        requested: u32,
        available: u32,
    },
    #[error("allotment for {leave_type} cannot be negative (got {days})")]
    NegativeAllotment { leave_type: LeaveType, days: i64 },
    #[error("allotment of {days} for {leave_type} exceeds the supported maximum")]
    AllotmentTooLarge { leave_type: LeaveType, days: i64 },
    #[error("allotment of {days} for {leave_type} is below the {used} day(s) already used")]
    BelowUsed {
        leave_type: LeaveType,
        days: u32,
        used: u32,
    },
}

/// Allotted and used days per leave type for one employee.
///
/// `balance(t) = allotted(t) - used(t)` holds after every successful operation; refused
/// operations leave both maps untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    allotted: BTreeMap<LeaveType, u32>,
    used: BTreeMap<LeaveType, u32>,
    tenure_bonus: u32,
}

impl LeaveBalance {
    pub fn new(hire_date: NaiveDate, today: NaiveDate) -> Self {
        let mut balance = Self {
            allotted: BTreeMap::new(),
            used: BTreeMap::new(),
            tenure_bonus: 0,
        };
        balance.initialize(hire_date, today);
        balance
    }

    /// Extra vacation days earned for each completed five years of service.
    pub const fn tenure_bonus_for(tenure_years: u32) -> u32 {
        (tenure_years / 5) * BONUS_DAYS_PER_FIVE_YEARS
    }

    fn initialize(&mut self, hire_date: NaiveDate, today: NaiveDate) {
        self.tenure_bonus = Self::tenure_bonus_for(completed_years(hire_date, today));

        self.allotted.clear();
        self.allotted
            .insert(LeaveType::Vacation, BASE_VACATION_DAYS + self.tenure_bonus);
        self.allotted.insert(LeaveType::Sick, BASE_SICK_DAYS);
        self.allotted.insert(LeaveType::Study, STUDY_DAYS);
        self.allotted.insert(LeaveType::Bereavement, BEREAVEMENT_DAYS);
        self.allotted.insert(LeaveType::Maternity, MATERNITY_DAYS);
        self.allotted.insert(LeaveType::Paternity, PATERNITY_DAYS);

        self.used = self.allotted.keys().map(|kind| (*kind, 0)).collect();
    }

    pub fn tenure_bonus(&self) -> u32 {
        self.tenure_bonus
    }

    pub fn allotted(&self, leave_type: LeaveType) -> u32 {
        self.allotted.get(&leave_type).copied().unwrap_or(0)
    }

    pub fn used(&self, leave_type: LeaveType) -> u32 {
        self.used.get(&leave_type).copied().unwrap_or(0)
    }

    pub fn balance(&self, leave_type: LeaveType) -> u32 {
        self.allotted(leave_type)
            .saturating_sub(self.used(leave_type))
    }

    /// Balance lookup by textual key; unknown names have no allotment.
    pub fn balance_by_name(&self, name: &str) -> u32 {
        name.parse::<LeaveType>()
            .map(|leave_type| self.balance(leave_type))
            .unwrap_or(0)
    }

    pub fn can_deduct(&self, leave_type: LeaveType, days: u32) -> bool {
        days <= self.balance(leave_type)
    }

    /// Records `days` as used, returning the remaining balance.
    pub fn deduct(&mut self, leave_type: LeaveType, days: u32) -> Result<u32, BalanceError> {
        let available = self.balance(leave_type);
        if days > available {
            let err = BalanceError::Insufficient {
                leave_type,
                requested: days,
                available,
            };
            warn!(error = %err, "leave deduction refused");
            return Err(err);
        }

        *self.used.entry(leave_type).or_insert(0) += days;
        let remaining = self.balance(leave_type);
        debug!(leave_type = leave_type.name(), days, remaining, "leave deducted");
        Ok(remaining)
    }

    /// Returns `days` to the balance, never driving used days below zero.
    /// The result is the number of days actually restored.
    pub fn refund(&mut self, leave_type: LeaveType, days: u32) -> u32 {
        let used = self.used(leave_type);
        let restored = days.min(used);
        if restored > 0 {
            self.used.insert(leave_type, used - restored);
        }
        debug!(leave_type = leave_type.name(), requested = days, restored, "leave refunded");
        restored
    }

    /// Starts a new leave year: allotments follow current tenure and used days are cleared.
    pub fn reset_annual_balances(&mut self, hire_date: NaiveDate, today: NaiveDate) {
        self.initialize(hire_date, today);
        debug!(tenure_bonus = self.tenure_bonus, "annual leave balances reset");
    }

    pub fn set_allotment(&mut self, leave_type: LeaveType, days: i64) -> Result<(), BalanceError> {
        let used = self.used(leave_type);
        let err = match u32::try_from(days) {
            Ok(days) if days >= used => {
                self.allotted.insert(leave_type, days);
                self.used.entry(leave_type).or_insert(0);
                return Ok(());
            }
            Ok(days) => BalanceError::BelowUsed {
                leave_type,
                days,
                used,
            },
            Err(_) if days < 0 => BalanceError::NegativeAllotment { leave_type, days },
            Err(_) => BalanceError::AllotmentTooLarge { leave_type, days },
        };

        warn!(error = %err, "allotment change refused");
        Err(err)
    }

    /// `(type, allotted, used)` for every type that carries an allotment.
    pub fn entries(&self) -> impl Iterator<Item = (LeaveType, u32, u32)> + '_ {
        LeaveType::ordered()
            .into_iter()
            .filter(|kind| self.allotted.contains_key(kind))
            .map(|kind| (kind, self.allotted(kind), self.used(kind)))
    }
}
