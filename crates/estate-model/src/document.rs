//! Document types and families

use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Group of documents that share one step registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFamily {
    /// Primary, secondary and spousal wills
    Will,
    /// Continuing power of attorney for property
    PoaProperty,
    /// Power of attorney for personal care
    PoaCare,
}

impl DocumentFamily {
    /// Wire name of the family
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Will => "will",
            Self::PoaProperty => "poa_property",
            Self::PoaCare => "poa_care",
        }
    }
}

impl std::fmt::Display for DocumentFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete document being assembled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    #[serde(rename = "primaryWill")]
    PrimaryWill,
    #[serde(rename = "secondaryWill")]
    SecondaryWill,
    #[serde(rename = "spousalWill")]
    SpousalWill,
    #[serde(rename = "poaProperty")]
    PoaProperty,
    #[serde(rename = "poaCare")]
    PoaCare,
}

impl DocumentType {
    /// Wire name stored in `WillData::document_type`
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PrimaryWill => "primaryWill",
            Self::SecondaryWill => "secondaryWill",
            Self::SpousalWill => "spousalWill",
            Self::PoaProperty => "poaProperty",
            Self::PoaCare => "poaCare",
        }
    }

    /// Parse a stored document-type string, returning `None` when unrecognized
    #[must_use]
    pub fn parse_lenient(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Family this document belongs to
    #[must_use]
    pub fn family(&self) -> DocumentFamily {
        match self {
            Self::PrimaryWill | Self::SecondaryWill | Self::SpousalWill => DocumentFamily::Will,
            Self::PoaProperty => DocumentFamily::PoaProperty,
            Self::PoaCare => DocumentFamily::PoaCare,
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "primaryWill" | "primary" => Ok(Self::PrimaryWill),
            "secondaryWill" | "secondary" => Ok(Self::SecondaryWill),
            "spousalWill" | "spousal" => Ok(Self::SpousalWill),
            "poaProperty" => Ok(Self::PoaProperty),
            "poaCare" => Ok(Self::PoaCare),
            _ => Err(ModelError::UnknownDocumentType(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn will_types_share_the_will_family() {
        for doc in [
            DocumentType::PrimaryWill,
            DocumentType::SecondaryWill,
            DocumentType::SpousalWill,
        ] {
            assert_eq!(doc.family(), DocumentFamily::Will);
        }
        assert_eq!(DocumentType::PoaCare.family(), DocumentFamily::PoaCare);
    }

    #[test]
    fn unknown_type_parses_leniently_to_none() {
        assert_eq!(DocumentType::parse_lenient("codicil"), None);
        assert_eq!(DocumentType::parse_lenient("poaProperty"), Some(DocumentType::PoaProperty));
    }
}
