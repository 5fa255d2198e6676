//! Leave tracking: employees, balances, typed leave requests, audit history and the
//! unpaid-leave sign-off workflow.

pub mod approval;
pub mod balance;
pub mod domain;
pub mod employee;
pub mod history;
mod policy;
pub mod registry;
pub mod request;
pub mod variants;
pub mod views;

#[cfg(test)]
mod tests;

pub use approval::{ApprovalStep, ApprovalWorkflow, HR_ROLE, MANAGER_ROLE};
pub use balance::{BalanceError, LeaveBalance};
pub use domain::{
    EmployeeId, LeaveError, LeavePeriod, LeaveStatus, LeaveType, RequestId, UnknownLeaveType,
};
pub use employee::{ContactInfo, EmergencyContact, Employee, EmployeeError};
pub use history::{StatusChange, StatusHistory};
pub use registry::{LeaveRegistry, RegistryError};
pub use request::{LeaveRequest, SYSTEM_ACTOR};
pub use variants::{
    BereavementLeave, LeaveDetails, MaternityLeave, MedicalCertificate, PaternityLeave,
    SickLeave, StudyLeave, TravelDetails, UnpaidLeave, VacationLeave,
};
pub use views::{
    BalanceEntry, BalanceView, HistoryView, LeaveSummaryView, PolicyView, WorkflowView,
};
