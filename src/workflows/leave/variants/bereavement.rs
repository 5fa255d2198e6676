use serde::{Deserialize, Serialize};

pub const IMMEDIATE_FAMILY_DAYS: i64 = 5;
pub const EXTENDED_FAMILY_DAYS: i64 = 3;
pub const TRAVEL_DAYS: i64 = 2;

const IMMEDIATE_FAMILY: [&str; 4] = ["spouse", "parent", "child", "sibling"];

/// Substring match, so "Grandparent" and "step-sibling" count as immediate family.
pub fn is_immediate_family(relationship: &str) -> bool {
    let relationship = relationship.to_lowercase();
    IMMEDIATE_FAMILY
        .iter()
        .any(|keyword| relationship.contains(keyword))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BereavementLeave {
    relationship: String,
    deceased_name: String,
    requires_travel: bool,
}

impl BereavementLeave {
    pub(crate) fn new(relationship: String, deceased_name: String) -> Self {
        Self {
            relationship,
            deceased_name,
            requires_travel: false,
        }
    }

    pub(crate) fn base_days(&self) -> i64 {
        if is_immediate_family(&self.relationship) {
            IMMEDIATE_FAMILY_DAYS
        } else {
            EXTENDED_FAMILY_DAYS
        }
    }

    pub(crate) fn mark_requires_travel(&mut self) {
        self.requires_travel = true;
    }

    pub fn relationship(&self) -> &str {
        &self.relationship
    }

    pub fn deceased_name(&self) -> &str {
        &self.deceased_name
    }

    pub fn requires_travel(&self) -> bool {
        self.requires_travel
    }
}
