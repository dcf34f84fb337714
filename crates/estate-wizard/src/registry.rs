//! Step registries per document family
//!
//! Provides [`StepRegistry`] for looking up the ordered step list of a
//! document family.

use crate::category::Category;
use crate::context::WizardContext;
use crate::error::WizardError;
use crate::rules::{VisibilityRule, PARTNERED};
use crate::step::StepDescriptor;
use crate::visibility::VisibleSteps;
use estate_model::{DocumentFamily, DocumentType};
use std::collections::HashSet;
use std::str::FromStr;

/// Will steps in presentation order
pub static WILL_STEPS: [StepDescriptor; 16] = [
    StepDescriptor::new("personal-info", "Personal Information", Category::AboutYou)
        .with_section("personalInfo"),
    StepDescriptor::new("family-status", "Family Status", Category::AboutYou)
        .with_section("familyStatus"),
    StepDescriptor::new("spouse-info", "Spouse or Partner", Category::AboutYou)
        .with_section("spouseInfo")
        .visible_when(VisibilityRule::RequiresMaritalStatus(PARTNERED)),
    StepDescriptor::new("children", "Children", Category::People).with_section("children"),
    StepDescriptor::new("key-people", "Key People", Category::People).with_section("keyPeople"),
    StepDescriptor::new("guardians", "Guardians", Category::People)
        .with_section("guardians")
        .visible_when(VisibilityRule::RequiresMinorChildren),
    StepDescriptor::new("pet-guardians", "Pet Guardians", Category::People)
        .with_section("pets")
        .visible_when(VisibilityRule::RequiresPets),
    StepDescriptor::new("assets", "Assets", Category::Assets).with_section("assets"),
    StepDescriptor::new("bequests", "Specific Gifts", Category::Assets)
        .with_section("bequests")
        .visible_when(VisibilityRule::RequiresAssets),
    StepDescriptor::new("residue", "Residue of Estate", Category::Assets).with_section("residue"),
    StepDescriptor::new("inheritance", "Inheritance Age", Category::Assets)
        .with_section("trusting")
        .visible_when(VisibilityRule::RequiresMinorChildren),
    StepDescriptor::new("executors", "Executors", Category::Arrangements).with_section("executors"),
    StepDescriptor::new("wipeout", "Wipeout Clause", Category::Arrangements)
        .with_section("wipeout"),
    StepDescriptor::new("additional", "Additional Instructions", Category::Arrangements)
        .with_section("additional"),
    StepDescriptor::new("final-details", "Final Details", Category::Review)
        .with_section("finalDetails"),
    StepDescriptor::new("review", "Review", Category::Review),
];

/// Power of attorney for property steps
pub static POA_PROPERTY_STEPS: [StepDescriptor; 4] = [
    StepDescriptor::new("poa-property-principal", "About You", Category::AboutYou)
        .with_section("personalInfo"),
    StepDescriptor::new("poa-property-attorneys", "Attorneys", Category::People)
        .with_section("poaAttorneys"),
    StepDescriptor::new("poa-property-restrictions", "Restrictions", Category::Arrangements)
        .with_section("poaRestrictions"),
    StepDescriptor::new("poa-property-review", "Review", Category::Review),
];

/// Power of attorney for personal care steps
pub static POA_CARE_STEPS: [StepDescriptor; 4] = [
    StepDescriptor::new("poa-care-principal", "About You", Category::AboutYou)
        .with_section("personalInfo"),
    StepDescriptor::new("poa-care-attorneys", "Attorneys", Category::People)
        .with_section("poaAttorneys"),
    StepDescriptor::new("poa-care-wishes", "Care Wishes", Category::Arrangements)
        .with_section("poaCareWishes"),
    StepDescriptor::new("poa-care-review", "Review", Category::Review),
];

/// Ordered step list of one document family
///
/// A registry built for an unrecognized document type is empty rather than
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRegistry {
    family: Option<DocumentFamily>,
    steps: &'static [StepDescriptor],
}

impl StepRegistry {
    /// Registry for a family
    #[must_use]
    pub fn for_family(family: DocumentFamily) -> Self {
        let steps: &'static [StepDescriptor] = match family {
            DocumentFamily::Will => &WILL_STEPS,
            DocumentFamily::PoaProperty => &POA_PROPERTY_STEPS,
            DocumentFamily::PoaCare => &POA_CARE_STEPS,
        };
        Self {
            family: Some(family),
            steps,
        }
    }

    /// Registry for a stored document-type string; empty when unrecognized
    #[must_use]
    pub fn for_document_type(document_type: &str) -> Self {
        match DocumentType::parse_lenient(document_type) {
            Some(doc) => Self::for_family(doc.family()),
            None => {
                tracing::debug!(document_type, "no step registry for document type");
                Self::empty()
            }
        }
    }

    /// Registry with no steps
    #[must_use]
    pub fn empty() -> Self {
        Self {
            family: None,
            steps: &[],
        }
    }

    /// Family the registry was built for
    #[inline]
    #[must_use]
    pub fn family(&self) -> Option<DocumentFamily> {
        self.family
    }

    /// All steps, in order
    #[inline]
    #[must_use]
    pub fn steps(&self) -> &'static [StepDescriptor] {
        self.steps
    }

    /// Find a step by id, visible or not
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'static StepDescriptor> {
        self.steps.iter().find(|s| s.id == id)
    }

    /// Whether a step id belongs to this registry
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Step ids, in order
    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.steps.iter().map(|s| s.id)
    }

    /// Number of steps
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the registry has no steps
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps shown for a context
    #[must_use]
    pub fn visible(&self, ctx: &WizardContext) -> VisibleSteps {
        VisibleSteps::compute(self.steps, ctx)
    }

    /// Ids that appear more than once; empty for a well-formed registry
    #[must_use]
    pub fn duplicate_ids(&self) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        self.ids().filter(|id| !seen.insert(*id)).collect()
    }
}

/// Parse a family name as used on the command line
impl FromStr for StepRegistry {
    type Err = WizardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let family = match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "will" => DocumentFamily::Will,
            "poa_property" | "property" => DocumentFamily::PoaProperty,
            "poa_care" | "care" => DocumentFamily::PoaCare,
            _ => return Err(WizardError::UnknownFamily(s.to_string())),
        };
        Ok(Self::for_family(family))
    }
}
