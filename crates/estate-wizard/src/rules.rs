//! Step visibility rules
//!
//! Rules are data rather than closures so a registry can be listed,
//! serialized and tested rule by rule.

use crate::context::WizardContext;
use estate_model::MaritalStatus;
use serde::Serialize;

/// Statuses that imply a spouse or partner
pub const PARTNERED: &[MaritalStatus] = &[MaritalStatus::Married, MaritalStatus::CommonLaw];

/// Condition under which a step is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(tag = "rule", content = "statuses", rename_all = "snake_case")]
pub enum VisibilityRule {
    /// Always shown
    #[default]
    Always,
    /// Shown when the marital status is one of the listed statuses
    RequiresMaritalStatus(&'static [MaritalStatus]),
    /// Shown when the testator has at least one child
    RequiresChildren,
    /// Shown when at least one child is a minor
    RequiresMinorChildren,
    /// Shown when at least one pet is recorded
    RequiresPets,
    /// Shown when at least one asset is recorded
    RequiresAssets,
}

impl VisibilityRule {
    /// Evaluate against a context
    ///
    /// An unset marital status satisfies no marital-status rule.
    #[must_use]
    pub fn evaluate(&self, ctx: &WizardContext) -> bool {
        match self {
            Self::Always => true,
            Self::RequiresMaritalStatus(statuses) => ctx
                .marital_status
                .is_some_and(|status| statuses.contains(&status)),
            Self::RequiresChildren => ctx.has_children,
            Self::RequiresMinorChildren => ctx.has_minor_children,
            Self::RequiresPets => ctx.has_pets,
            Self::RequiresAssets => ctx.has_assets,
        }
    }

    /// Whether the rule can ever hide a step
    #[inline]
    #[must_use]
    pub fn is_conditional(&self) -> bool {
        !matches!(self, Self::Always)
    }
}
