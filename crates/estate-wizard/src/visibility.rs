//! Visibility filter

use crate::category::Category;
use crate::context::WizardContext;
use crate::step::StepDescriptor;

/// Steps shown for a context, in registry order
///
/// Recompute whenever the context changes; the list is a pure function of
/// registry and context.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VisibleSteps {
    steps: Vec<&'static StepDescriptor>,
}

impl VisibleSteps {
    /// Filter a registry against a context in a single ordered pass
    #[must_use]
    pub fn compute(registry: &'static [StepDescriptor], ctx: &WizardContext) -> Self {
        let steps: Vec<_> = registry.iter().filter(|s| s.is_visible(ctx)).collect();
        tracing::debug!(
            total = registry.len(),
            visible = steps.len(),
            "computed visible steps"
        );
        Self { steps }
    }

    /// Visible step ids, in order
    #[must_use]
    pub fn ids(&self) -> Vec<&'static str> {
        self.steps.iter().map(|s| s.id).collect()
    }

    /// Index of a step id, if visible
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id == id)
    }

    /// Visible step by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&'static StepDescriptor> {
        self.steps.iter().copied().find(|s| s.id == id)
    }

    /// Visible step by index
    #[inline]
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&'static StepDescriptor> {
        self.steps.get(index).copied()
    }

    /// Whether a step id is visible
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Category of a visible step
    #[must_use]
    pub fn category_of(&self, id: &str) -> Option<Category> {
        self.get(id).map(|s| s.category)
    }

    /// First visible step
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&'static StepDescriptor> {
        self.steps.first().copied()
    }

    /// Last visible step
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&'static StepDescriptor> {
        self.steps.last().copied()
    }

    /// Iterate visible steps
    pub fn iter(&self) -> impl Iterator<Item = &'static StepDescriptor> + '_ {
        self.steps.iter().copied()
    }

    /// Number of visible steps
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing is visible
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
