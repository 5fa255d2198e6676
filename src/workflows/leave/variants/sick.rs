use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

/// Sick leave longer than this needs a medical certificate.
pub const DAYS_REQUIRING_CERTIFICATE: i64 = 3;
pub const CERTIFICATE_VALIDITY_DAYS: i64 = 30;

static CERTIFICATE_SEQUENCE: AtomicU32 = AtomicU32::new(1000);

fn next_certificate_number() -> String {
    let number = CERTIFICATE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("MC-{number}")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalCertificate {
    doctor_name: String,
    hospital_name: String,
    diagnosis: String,
    issued_on: NaiveDate,
    certificate_number: String,
}

impl MedicalCertificate {
    pub fn new(
        doctor_name: impl Into<String>,
        hospital_name: impl Into<String>,
        diagnosis: impl Into<String>,
        issued_on: NaiveDate,
    ) -> Self {
        Self {
            doctor_name: doctor_name.into(),
            hospital_name: hospital_name.into(),
            diagnosis: diagnosis.into(),
            issued_on,
            certificate_number: next_certificate_number(),
        }
    }

    /// Valid when issued no more than 30 days before `today`.
    pub fn is_valid(&self, today: NaiveDate) -> bool {
        let age = (today - self.issued_on).num_days();
        (0..=CERTIFICATE_VALIDITY_DAYS).contains(&age)
    }

    pub fn doctor_name(&self) -> &str {
        &self.doctor_name
    }

    pub fn hospital_name(&self) -> &str {
        &self.hospital_name
    }

    pub fn diagnosis(&self) -> &str {
        &self.diagnosis
    }

    pub fn issued_on(&self) -> NaiveDate {
        self.issued_on
    }

    pub fn certificate_number(&self) -> &str {
        &self.certificate_number
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SickLeave {
    illness_description: String,
    medical_certificate: Option<MedicalCertificate>,
    hospitalized: bool,
}

impl SickLeave {
    pub(crate) fn new(illness_description: String) -> Self {
        Self {
            illness_description,
            medical_certificate: None,
            hospitalized: false,
        }
    }

    pub(crate) fn requires_documentation(&self, leave_days: i64) -> bool {
        leave_days > DAYS_REQUIRING_CERTIFICATE || self.hospitalized
    }

    pub(crate) fn is_eligible(&self, leave_days: i64) -> bool {
        !self.requires_documentation(leave_days) || self.medical_certificate.is_some()
    }

    pub(crate) fn attach(&mut self, certificate: MedicalCertificate) {
        self.medical_certificate = Some(certificate);
    }

    pub(crate) fn mark_hospitalized(&mut self) {
        self.hospitalized = true;
    }

    pub fn illness_description(&self) -> &str {
        &self.illness_description
    }

    pub fn medical_certificate(&self) -> Option<&MedicalCertificate> {
        self.medical_certificate.as_ref()
    }

    pub fn has_medical_certificate(&self) -> bool {
        self.medical_certificate.is_some()
    }

    pub fn is_hospitalized(&self) -> bool {
        self.hospitalized
    }
}
