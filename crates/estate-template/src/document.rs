//! Document labels and adapter dispatch

use crate::data::TemplateData;
use crate::{poa, will};
use estate_model::{DocumentFamily, DocumentType, RecordSet};

/// Label the will templates switch on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WillType {
    #[default]
    Primary,
    Secondary,
    Spousal,
}

impl WillType {
    /// Map a stored document-type string; anything unrecognized is `Primary`
    ///
    /// Goes through [`DocumentType`] parsing so the label agrees with the
    /// registry chosen for the same string.
    #[must_use]
    pub fn from_document_type(document_type: &str) -> Self {
        DocumentType::parse_lenient(document_type).map_or(Self::Primary, Self::from)
    }

    /// Template label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Primary => "PRIMARY",
            Self::Secondary => "SECONDARY",
            Self::Spousal => "SPOUSAL",
        }
    }
}

impl From<DocumentType> for WillType {
    fn from(doc: DocumentType) -> Self {
        match doc {
            DocumentType::SecondaryWill => Self::Secondary,
            DocumentType::SpousalWill => Self::Spousal,
            DocumentType::PrimaryWill | DocumentType::PoaProperty | DocumentType::PoaCare => {
                Self::Primary
            }
        }
    }
}

/// Run the adapter for the record set's document family
///
/// Unrecognized document types go through the will adapter.
#[must_use]
pub fn map_records(records: &RecordSet) -> TemplateData {
    let family = records
        .document_type()
        .map_or(DocumentFamily::Will, |doc: DocumentType| doc.family());
    tracing::debug!(
        %family,
        document_type = %records.will.document_type,
        "mapping template data"
    );
    match family {
        DocumentFamily::Will => will::map_will(records),
        DocumentFamily::PoaProperty => poa::map_poa_property(records),
        DocumentFamily::PoaCare => poa::map_poa_care(records),
    }
}
