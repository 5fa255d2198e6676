use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::balance::LeaveBalance;
use super::domain::{completed_months, completed_years, EmployeeId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeError {
    #[error("{field} cannot be empty")]
    BlankField { field: &'static str },
}

/// Phone/address details that exist independently of any employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub address: String,
    pub alternate_email: Option<String>,
    pub emergency_contact: Option<EmergencyContact>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
}

impl ContactInfo {
    pub fn new(phone: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            address: address.into(),
            alternate_email: None,
            emergency_contact: None,
        }
    }

    pub fn set_emergency_contact(&mut self, name: impl Into<String>, phone: impl Into<String>) {
        self.emergency_contact = Some(EmergencyContact {
            name: name.into(),
            phone: phone.into(),
        });
    }

    pub fn set_alternate_email(&mut self, email: impl Into<String>) {
        self.alternate_email = Some(email.into());
    }

    pub fn has_emergency_contact(&self) -> bool {
        self.emergency_contact.is_some()
    }
}

/// An employee and the leave balance they own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    id: EmployeeId,
    first_name: String,
    last_name: String,
    email: String,
    department: String,
    hire_date: NaiveDate,
    contact: Option<ContactInfo>,
    leave_balance: LeaveBalance,
}

fn require(field: &'static str, value: String) -> Result<String, EmployeeError> {
    if value.trim().is_empty() {
        let err = EmployeeError::BlankField { field };
        warn!(error = %err, "employee field rejected");
        return Err(err);
    }
    Ok(value)
}

impl Employee {
    /// Builds an employee whose balance is initialised from tenure as of `today`.
    pub fn new(
        id: EmployeeId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
        hire_date: NaiveDate,
        today: NaiveDate,
    ) -> Result<Self, EmployeeError> {
        Ok(Self {
            id,
            first_name: require("first name", first_name.into())?,
            last_name: require("last name", last_name.into())?,
            email: require("email", email.into())?,
            department: require("department", department.into())?,
            hire_date,
            contact: None,
            leave_balance: LeaveBalance::new(hire_date, today),
        })
    }

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }

    pub fn contact(&self) -> Option<&ContactInfo> {
        self.contact.as_ref()
    }

    pub fn set_contact(&mut self, contact: ContactInfo) {
        self.contact = Some(contact);
    }

    pub fn set_first_name(&mut self, value: impl Into<String>) -> Result<(), EmployeeError> {
        self.first_name = require("first name", value.into())?;
        Ok(())
    }

    pub fn set_last_name(&mut self, value: impl Into<String>) -> Result<(), EmployeeError> {
        self.last_name = require("last name", value.into())?;
        Ok(())
    }

    pub fn set_email(&mut self, value: impl Into<String>) -> Result<(), EmployeeError> {
        self.email = require("email", value.into())?;
        Ok(())
    }

    pub fn set_department(&mut self, value: impl Into<String>) -> Result<(), EmployeeError> {
        self.department = require("department", value.into())?;
        Ok(())
    }

    pub fn tenure_months(&self, today: NaiveDate) -> u32 {
        completed_months(self.hire_date, today)
    }

    pub fn tenure_years(&self, today: NaiveDate) -> u32 {
        completed_years(self.hire_date, today)
    }

    pub fn leave_balance(&self) -> &LeaveBalance {
        &self.leave_balance
    }

    pub fn leave_balance_mut(&mut self) -> &mut LeaveBalance {
        &mut self.leave_balance
    }

    pub fn reset_annual_balances(&mut self, today: NaiveDate) {
        self.leave_balance
            .reset_annual_balances(self.hire_date, today);
    }
}
