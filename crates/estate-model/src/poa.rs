//! Power-of-attorney sections

use crate::ids::PersonId;
use serde::{Deserialize, Serialize};

/// Role of an appointed attorney
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttorneyRole {
    #[default]
    Primary,
    /// Second attorney serving alongside the primary
    Joint,
    Alternate,
}

/// Attorney appointment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attorney {
    pub person_id: PersonId,
    #[serde(default)]
    pub role: AttorneyRole,
}

/// Power-of-attorney data shared by the property and personal-care documents
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PoaData {
    pub attorneys: Vec<Attorney>,
    /// Joint attorneys must act together rather than separately
    pub act_jointly: bool,
    pub restrictions: Option<String>,
    pub effective_immediately: bool,
    /// Personal-care wishes (care document only)
    pub care_wishes: Option<String>,
}

impl PoaData {
    /// Attorneys with a given role, in appointment order
    pub fn attorneys_with_role(&self, role: AttorneyRole) -> impl Iterator<Item = &Attorney> {
        self.attorneys.iter().filter(move |a| a.role == role)
    }
}
