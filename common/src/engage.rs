//! Get-involved form model.

use serde::{Deserialize, Serialize};

/// Interest options offered by the get-involved modal.
pub const INTEREST_OPTIONS: &[(&str, &str)] = &[
    ("", "Select your interest"),
    ("partnership", "Partnership Opportunities"),
    ("funding", "Funding Initiatives"),
    ("volunteer", "Volunteer Work"),
    ("research", "Research Collaboration"),
    ("other", "Other"),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InterestSubmission {
    pub name: String,
    pub email: String,
    pub interest: String,
    pub message: String,
}
