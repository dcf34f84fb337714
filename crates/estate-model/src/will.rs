//! The persisted will-data record
//!
//! One optional section per wizard step. Sections reference people and
//! assets by id; nothing here is denormalized.

use crate::ids::{AssetId, BequestId, PersonId};
use crate::person::MaritalStatus;
use crate::poa::PoaData;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Will-data record as returned by the persistence layer
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WillData {
    /// Document type string, e.g. `primaryWill` or `poaProperty`
    pub document_type: String,
    pub personal_info: Option<PersonalInfo>,
    pub marital_status: Option<MaritalStatus>,
    pub spouse_id: Option<PersonId>,
    /// Step ids or section keys the user has finished
    pub completed_steps: BTreeSet<String>,
    pub key_people: Vec<PersonId>,
    pub guardians: Vec<Guardian>,
    pub pets: Vec<Pet>,
    pub executors: Vec<Executor>,
    pub bequests: Vec<Bequest>,
    pub residue: Option<Residue>,
    pub trusting: Vec<TrustingEntry>,
    pub wipeout: Option<Wipeout>,
    pub additional: Option<AdditionalInstructions>,
    pub final_details: Option<FinalDetails>,
    pub poa: Option<PoaData>,
}

impl WillData {
    /// Create an empty record for a document type
    #[must_use]
    pub fn new(document_type: impl Into<String>) -> Self {
        Self {
            document_type: document_type.into(),
            ..Self::default()
        }
    }

    /// With marital status
    #[inline]
    #[must_use]
    pub fn with_marital_status(mut self, status: MaritalStatus) -> Self {
        self.marital_status = Some(status);
        self
    }

    /// Mark a step (or section key) completed
    #[must_use]
    pub fn with_completed(mut self, step: impl Into<String>) -> Self {
        self.completed_steps.insert(step.into());
        self
    }
}

/// Testator details from the personal-info step
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub city: String,
    pub province: String,
    pub country: String,
    pub phone: String,
    pub email: Option<String>,
}

impl PersonalInfo {
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
}

/// Guardian nominated for minor children
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guardian {
    pub guardian_id: PersonId,
    #[serde(default)]
    pub is_alternate: bool,
    #[serde(default)]
    pub position: u32,
}

/// A pet and the person asked to care for it
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pet {
    pub name: String,
    pub species: String,
    pub guardian_id: Option<PersonId>,
    /// Whole dollars left for the pet's care
    pub care_funds: Option<u64>,
}

/// Role an executor plays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutorRole {
    #[default]
    Primary,
    Alternate,
    Additional,
}

/// Executor nomination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Executor {
    pub person_id: PersonId,
    #[serde(default)]
    pub role: ExecutorRole,
}

/// What happens to a share if its beneficiary dies first
///
/// Carried through to the documents; never interpreted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredeceaseRule {
    #[default]
    PerStirpes,
    PerCapita,
    Lapse,
}

impl PredeceaseRule {
    /// Wire name of the rule
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerStirpes => "per_stirpes",
            Self::PerCapita => "per_capita",
            Self::Lapse => "lapse",
        }
    }
}

/// One beneficiary's part of a bequest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BequestShare {
    pub beneficiary_id: PersonId,
    pub percentage: f64,
    #[serde(default)]
    pub predecease: PredeceaseRule,
}

/// A specific gift, usually of an asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bequest {
    pub id: BequestId,
    #[serde(default)]
    pub asset_id: Option<AssetId>,
    /// Free-text description for gifts not tied to an asset record
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub shares: Vec<BequestShare>,
}

impl Bequest {
    /// Bequest of an asset with no shares yet
    #[must_use]
    pub fn of_asset(asset_id: AssetId) -> Self {
        Self {
            id: BequestId::new(),
            asset_id: Some(asset_id),
            description: None,
            shares: Vec::new(),
        }
    }

    /// Add a share
    #[must_use]
    pub fn with_share(mut self, beneficiary_id: PersonId, percentage: f64) -> Self {
        self.shares.push(BequestShare {
            beneficiary_id,
            percentage,
            predecease: PredeceaseRule::default(),
        });
        self
    }
}

/// A beneficiary's percentage of a distribution pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionShare {
    pub beneficiary_id: PersonId,
    pub percentage: f64,
    #[serde(default)]
    pub predecease: PredeceaseRule,
}

/// How the residue of the estate is divided
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Residue {
    /// Entire residue passes to the spouse if they survive
    pub to_spouse_first: bool,
    pub shares: Vec<DistributionShare>,
}

/// Age at which a child receives their inheritance outright
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustingEntry {
    pub child_id: PersonId,
    pub age: u8,
}

/// Fallback plan if every named beneficiary predeceases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WipeoutStrategy {
    /// Split among legal heirs
    #[default]
    Heirs,
    /// Named beneficiaries with percentages
    Beneficiaries,
    /// A single charity
    Charity,
}

/// Wipeout clause section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Wipeout {
    pub strategy: WipeoutStrategy,
    pub charity_name: Option<String>,
    pub shares: Vec<DistributionShare>,
}

/// Funeral preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FuneralWish {
    #[default]
    Unspecified,
    Burial,
    Cremation,
}

/// Additional instructions section
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalInstructions {
    pub funeral: FuneralWish,
    pub notes: Option<String>,
}

/// Signing details captured on the final-details step
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinalDetails {
    pub signing_city: Option<String>,
    pub signing_date: Option<NaiveDate>,
}
