//! Record set loading and lookups

use crate::asset::Asset;
use crate::document::DocumentType;
use crate::error::ModelError;
use crate::ids::{AssetId, PersonId};
use crate::person::Person;
use crate::will::WillData;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The read models the wizard works from: will data, people and assets
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordSet {
    pub will: WillData,
    pub people: Vec<Person>,
    pub assets: Vec<Asset>,
}

impl RecordSet {
    /// Create a record set
    #[must_use]
    pub fn new(will: WillData, people: Vec<Person>, assets: Vec<Asset>) -> Self {
        Self { will, people, assets }
    }

    /// Decode from JSON text
    pub fn from_json_str(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and decode a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let records = Self::from_json_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            people = records.people.len(),
            assets = records.assets.len(),
            "loaded record set"
        );
        Ok(records)
    }

    /// Look up a person by id
    #[must_use]
    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Look up an asset by id
    #[must_use]
    pub fn asset(&self, id: AssetId) -> Option<&Asset> {
        self.assets.iter().find(|a| a.id == id)
    }

    /// People whose relation is child, in list order
    pub fn children(&self) -> impl Iterator<Item = &Person> {
        self.people.iter().filter(|p| p.is_child())
    }

    /// Parsed document type, if the stored string is recognized
    #[must_use]
    pub fn document_type(&self) -> Option<DocumentType> {
        DocumentType::parse_lenient(&self.will.document_type)
    }
}
