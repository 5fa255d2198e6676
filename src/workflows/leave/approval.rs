use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MANAGER_ROLE: &str = "Manager";
pub const HR_ROLE: &str = "HR";
/// Requests longer than this also need HR sign-off.
pub const HR_REVIEW_THRESHOLD_DAYS: i64 = 5;

/// A single recorded sign-off action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalStep {
    approver: String,
    role: String,
    approved: bool,
    comments: Option<String>,
    at: DateTime<Utc>,
}

impl ApprovalStep {
    pub fn new(approver: &str, role: &str, approved: bool, comments: Option<&str>) -> Self {
        Self {
            approver: approver.to_string(),
            role: role.to_string(),
            approved,
            comments: comments.map(str::to_string),
            at: Utc::now(),
        }
    }

    pub fn approver(&self) -> &str {
        &self.approver
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn is_approved(&self) -> bool {
        self.approved
    }

    pub fn comments(&self) -> Option<&str> {
        self.comments.as_deref()
    }

    pub fn at(&self) -> DateTime<Utc> {
        self.at
    }
}

impl fmt::Display for ApprovalStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.approved { "APPROVED" } else { "REJECTED" };
        write!(f, "{} ({}): {}", self.approver, self.role, verdict)?;
        if let Some(comments) = &self.comments {
            write!(f, " - {comments}")?;
        }
        Ok(())
    }
}

/// Manager/HR sign-off gate for unpaid leave.
///
/// Gates only ever move from unset to set; a later rejection is recorded as a step but does
/// not withdraw an earlier approval.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalWorkflow {
    steps: Vec<ApprovalStep>,
    manager_approved: bool,
    hr_approved: bool,
}

impl ApprovalWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_approval(
        &mut self,
        approver: &str,
        role: &str,
        approved: bool,
        comments: Option<&str>,
    ) -> &ApprovalStep {
        if approved {
            let role = role.trim();
            if role.eq_ignore_ascii_case(MANAGER_ROLE) {
                self.manager_approved = true;
            } else if role.eq_ignore_ascii_case(HR_ROLE) {
                self.hr_approved = true;
            }
        }

        self.steps
            .push(ApprovalStep::new(approver, role, approved, comments));
        &self.steps[self.steps.len() - 1]
    }

    pub fn requires_hr(leave_days: i64) -> bool {
        leave_days > HR_REVIEW_THRESHOLD_DAYS
    }

    pub fn required_roles(leave_days: i64) -> Vec<&'static str> {
        if Self::requires_hr(leave_days) {
            vec![MANAGER_ROLE, HR_ROLE]
        } else {
            vec![MANAGER_ROLE]
        }
    }

    pub fn missing_roles(&self, leave_days: i64) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.manager_approved {
            missing.push(MANAGER_ROLE);
        }
        if Self::requires_hr(leave_days) && !self.hr_approved {
            missing.push(HR_ROLE);
        }
        missing
    }

    /// `leave_days` is the owning request's inclusive duration.
    pub fn is_fully_approved(&self, leave_days: i64) -> bool {
        self.missing_roles(leave_days).is_empty()
    }

    pub fn is_manager_approved(&self) -> bool {
        self.manager_approved
    }

    pub fn is_hr_approved(&self) -> bool {
        self.hr_approved
    }

    pub fn steps(&self) -> &[ApprovalStep] {
        &self.steps
    }
}
