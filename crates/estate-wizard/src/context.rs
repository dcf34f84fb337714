//! Visibility context derived from loaded records

use crate::config::WizardConfig;
use chrono::NaiveDate;
use estate_model::{Asset, MaritalStatus, Person, RecordSet, WillData};
use serde::{Deserialize, Serialize};

/// Facts about the testator that decide which steps are shown
///
/// A view over persisted data; recompute it whenever the will data, the
/// people list or the asset list changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardContext {
    pub marital_status: Option<MaritalStatus>,
    pub has_children: bool,
    pub has_minor_children: bool,
    pub has_pets: bool,
    pub has_assets: bool,
}

impl WizardContext {
    /// Derive the context from a full record set
    #[must_use]
    pub fn from_records(records: &RecordSet, today: NaiveDate, config: &WizardConfig) -> Self {
        build_context(&records.will, &records.people, &records.assets, today, config)
    }

    /// With marital status
    #[inline]
    #[must_use]
    pub fn with_marital_status(mut self, status: MaritalStatus) -> Self {
        self.marital_status = Some(status);
        self
    }

    /// With children; `minor` also sets the minor-children flag
    #[inline]
    #[must_use]
    pub fn with_children(mut self, minor: bool) -> Self {
        self.has_children = true;
        self.has_minor_children = minor;
        self
    }

    /// With pets
    #[inline]
    #[must_use]
    pub fn with_pets(mut self) -> Self {
        self.has_pets = true;
        self
    }

    /// With assets
    #[inline]
    #[must_use]
    pub fn with_assets(mut self) -> Self {
        self.has_assets = true;
        self
    }
}

/// Build the context from the three read models
///
/// `today` is explicit so the result depends only on its inputs.
#[must_use]
pub fn build_context(
    will: &WillData,
    people: &[Person],
    assets: &[Asset],
    today: NaiveDate,
    config: &WizardConfig,
) -> WizardContext {
    let mut children = people.iter().filter(|p| p.is_child()).peekable();
    let has_children = children.peek().is_some();
    let has_minor_children = children.any(|child| is_minor(child, today, config));

    let ctx = WizardContext {
        marital_status: will.marital_status,
        has_children,
        has_minor_children,
        has_pets: !will.pets.is_empty(),
        has_assets: !assets.is_empty(),
    };
    tracing::debug!(
        marital_status = ?ctx.marital_status,
        has_children = ctx.has_children,
        has_minor_children = ctx.has_minor_children,
        has_pets = ctx.has_pets,
        has_assets = ctx.has_assets,
        "built wizard context"
    );
    ctx
}

/// Whether a person is under the age of majority on `today`
///
/// A missing date of birth counts as a minor.
#[must_use]
pub fn is_minor(person: &Person, today: NaiveDate, config: &WizardConfig) -> bool {
    let Some(dob) = person.date_of_birth else {
        return true;
    };
    #[allow(clippy::cast_precision_loss)]
    let age = (today - dob).num_days() as f64 / config.year_length();
    age < f64::from(config.age_of_majority)
}
