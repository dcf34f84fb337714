//! Everything the wizard shell needs for one render

use crate::category::{group_by_category, CategoryGroup};
use crate::completion::CompletionSet;
use crate::config::WizardConfig;
use crate::context::WizardContext;
use crate::navigation::NavigationCursor;
use crate::registry::StepRegistry;
use crate::visibility::VisibleSteps;
use chrono::NaiveDate;
use estate_model::RecordSet;

/// Context, visible steps and completion derived from one record set
///
/// Cheap to rebuild; build a new snapshot after any record change instead of
/// patching an old one.
#[derive(Debug, Clone, PartialEq)]
pub struct WizardSnapshot {
    pub registry: StepRegistry,
    pub context: WizardContext,
    pub visible: VisibleSteps,
    pub completion: CompletionSet,
}

impl WizardSnapshot {
    /// Derive a snapshot; the registry follows the record's document type
    #[must_use]
    pub fn from_records(records: &RecordSet, today: NaiveDate, config: &WizardConfig) -> Self {
        let registry = StepRegistry::for_document_type(&records.will.document_type);
        Self::with_registry(registry, records, today, config)
    }

    /// Derive a snapshot against an explicit registry
    #[must_use]
    pub fn with_registry(
        registry: StepRegistry,
        records: &RecordSet,
        today: NaiveDate,
        config: &WizardConfig,
    ) -> Self {
        let context = WizardContext::from_records(records, today, config);
        let visible = registry.visible(&context);
        let completion = CompletionSet::from_will(&records.will);
        Self {
            registry,
            context,
            visible,
            completion,
        }
    }

    /// Category groups for the sidebar
    #[must_use]
    pub fn categories(&self) -> Vec<CategoryGroup> {
        group_by_category(&self.visible, &self.completion)
    }

    /// Cursor at the router's current step id
    #[must_use]
    pub fn cursor(&self, current_id: &str) -> NavigationCursor<'_> {
        NavigationCursor::resolve(&self.visible, &self.completion, current_id)
    }

    /// Cursor at the re-entry step
    #[must_use]
    pub fn entry_cursor(&self) -> NavigationCursor<'_> {
        NavigationCursor::at_first_incomplete(&self.visible, &self.completion)
    }
}
