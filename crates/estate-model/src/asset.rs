//! Assets that bequests can reference

use crate::ids::AssetId;
use serde::{Deserialize, Serialize};

/// Broad asset categories offered on the assets step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    RealEstate,
    BankAccount,
    Investment,
    Vehicle,
    Business,
    PersonalProperty,
    #[default]
    #[serde(other)]
    Other,
}

/// An asset record from the asset list
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Asset {
    pub id: AssetId,
    pub kind: AssetKind,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    pub jointly_owned: bool,
}

impl Asset {
    /// Create an asset of the given kind
    #[must_use]
    pub fn new(kind: AssetKind, description: impl Into<String>) -> Self {
        Self {
            id: AssetId::new(),
            kind,
            description: description.into(),
            ..Self::default()
        }
    }
}
