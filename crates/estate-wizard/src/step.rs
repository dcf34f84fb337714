//! Step descriptors

use crate::category::Category;
use crate::context::WizardContext;
use crate::rules::VisibilityRule;
use serde::Serialize;

/// One page of the wizard
///
/// Descriptors are compile-time constants; registry order is presentation
/// and traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDescriptor {
    /// Unique id, also the route segment
    pub id: &'static str,
    pub label: &'static str,
    /// Persisted-data field the step reads and writes
    pub section_key: Option<&'static str>,
    pub category: Category,
    pub visibility: VisibilityRule,
}

impl StepDescriptor {
    /// Always-visible step with no section
    #[must_use]
    pub const fn new(id: &'static str, label: &'static str, category: Category) -> Self {
        Self {
            id,
            label,
            section_key: None,
            category,
            visibility: VisibilityRule::Always,
        }
    }

    /// With section key
    #[must_use]
    pub const fn with_section(mut self, key: &'static str) -> Self {
        self.section_key = Some(key);
        self
    }

    /// With visibility rule
    #[must_use]
    pub const fn visible_when(mut self, rule: VisibilityRule) -> Self {
        self.visibility = rule;
        self
    }

    /// Whether the step is shown for a context
    #[inline]
    #[must_use]
    pub fn is_visible(&self, ctx: &WizardContext) -> bool {
        self.visibility.evaluate(ctx)
    }
}
