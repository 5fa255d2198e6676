use chrono::{Duration, NaiveDate};

use crate::workflows::leave::{Employee, EmployeeId, LeaveRegistry, MedicalCertificate};

pub(super) const ALICE: EmployeeId = EmployeeId(1);
pub(super) const BOB: EmployeeId = EmployeeId(2);

pub(super) fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Fixed evaluation date for tenure arithmetic.
pub(super) fn today() -> NaiveDate {
    date(2025, 6, 2)
}

pub(super) fn days_from_today(offset: i64) -> NaiveDate {
    today() + Duration::days(offset)
}

pub(super) fn employee(id: EmployeeId, hire_date: NaiveDate) -> Employee {
    Employee::new(
        id,
        "Alice",
        "Johnson",
        "alice@company.com",
        "Engineering",
        hire_date,
        today(),
    )
    .expect("valid employee")
}

/// Hired five years and a few months before `today`.
pub(super) fn alice() -> Employee {
    employee(ALICE, date(2020, 3, 15))
}

pub(super) fn bob() -> Employee {
    Employee::new(
        BOB,
        "Bob",
        "Smith",
        "bob@company.com",
        "Marketing",
        date(2018, 8, 1),
        today(),
    )
    .expect("valid employee")
}

pub(super) fn certificate() -> MedicalCertificate {
    MedicalCertificate::new("Dr. Smith", "City Hospital", "Influenza Type A", today())
}

pub(super) fn registry_with_staff() -> LeaveRegistry {
    let mut registry = LeaveRegistry::new();
    registry.register_employee(alice()).expect("alice registers");
    registry.register_employee(bob()).expect("bob registers");
    registry
}
