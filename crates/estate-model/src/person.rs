//! People referenced by the documents

use crate::error::ModelError;
use crate::ids::PersonId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Marital status recorded on the family-status step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    /// Not married and not in a common-law relationship
    Single,
    /// Legally married
    Married,
    /// Common-law partnership
    CommonLaw,
}

impl MaritalStatus {
    /// Every status, in declaration order
    pub const ALL: [MaritalStatus; 3] = [Self::Single, Self::Married, Self::CommonLaw];

    /// Wire name of the status
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Married => "married",
            Self::CommonLaw => "common_law",
        }
    }

    /// Whether the testator has a spouse or partner
    #[inline]
    #[must_use]
    pub fn has_partner(&self) -> bool {
        matches!(self, Self::Married | Self::CommonLaw)
    }
}

impl std::fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaritalStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "married" => Ok(Self::Married),
            "common_law" | "common-law" | "commonlaw" => Ok(Self::CommonLaw),
            _ => Err(ModelError::UnknownMaritalStatus(s.to_string())),
        }
    }
}

/// How a person relates to the testator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Spouse,
    Child,
    Grandchild,
    Parent,
    Sibling,
    Friend,
    Charity,
    /// Anything the client sends that we do not model
    #[default]
    #[serde(other)]
    Other,
}

impl Relation {
    /// Human label used by the documents
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Spouse => "Spouse",
            Self::Child => "Child",
            Self::Grandchild => "Grandchild",
            Self::Parent => "Parent",
            Self::Sibling => "Sibling",
            Self::Friend => "Friend",
            Self::Charity => "Charity",
            Self::Other => "Other",
        }
    }
}

/// A person record from the people list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Person {
    pub id: PersonId,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub relation: Relation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    pub city: String,
    pub province: String,
    pub country: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Person {
    /// Create a person with a name and relation; other fields empty
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        relation: Relation,
    ) -> Self {
        Self {
            id: PersonId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            relation,
            ..Self::default()
        }
    }

    /// With date of birth
    #[inline]
    #[must_use]
    pub fn with_date_of_birth(mut self, dob: NaiveDate) -> Self {
        self.date_of_birth = Some(dob);
        self
    }

    /// With city, province and country
    #[must_use]
    pub fn with_location(
        mut self,
        city: impl Into<String>,
        province: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        self.city = city.into();
        self.province = province.into();
        self.country = country.into();
        self
    }

    /// Full display name; blank name parts are skipped
    #[must_use]
    pub fn full_name(&self) -> String {
        [
            Some(self.first_name.as_str()),
            self.middle_name.as_deref(),
            Some(self.last_name.as_str()),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
    }

    /// Whether this person is one of the testator's children
    #[inline]
    #[must_use]
    pub fn is_child(&self) -> bool {
        self.relation == Relation::Child
    }
}
