use serde::{Deserialize, Serialize};

pub const MAX_STUDY_LEAVE_DAYS: i64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyLeave {
    course_name: String,
    institution_name: String,
    company_sponsored: bool,
    job_related: bool,
}

impl StudyLeave {
    pub(crate) fn new(course_name: String, institution_name: String) -> Self {
        Self {
            course_name,
            institution_name,
            company_sponsored: false,
            job_related: false,
        }
    }

    pub(crate) fn is_eligible(&self, leave_days: i64) -> bool {
        leave_days <= MAX_STUDY_LEAVE_DAYS || self.company_sponsored
    }

    pub(crate) fn mark_company_sponsored(&mut self) {
        self.company_sponsored = true;
    }

    pub(crate) fn mark_job_related(&mut self) {
        self.job_related = true;
    }

    pub fn is_paid(&self) -> bool {
        self.company_sponsored || self.job_related
    }

    pub fn course_name(&self) -> &str {
        &self.course_name
    }

    pub fn institution_name(&self) -> &str {
        &self.institution_name
    }

    pub fn is_company_sponsored(&self) -> bool {
        self.company_sponsored
    }

    pub fn is_job_related(&self) -> bool {
        self.job_related
    }
}
