//! Completed-step tracking

use crate::step::StepDescriptor;
use estate_model::WillData;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Step ids or section keys the user has finished
///
/// Populated from the persisted `completedSteps` field; the save path owns
/// mutation, navigation only reads.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionSet(BTreeSet<String>);

impl CompletionSet {
    /// Empty set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the completed steps out of a will-data record
    #[must_use]
    pub fn from_will(will: &WillData) -> Self {
        Self(will.completed_steps.clone())
    }

    /// Record a step id or section key as complete
    pub fn insert(&mut self, key: impl Into<String>) -> bool {
        self.0.insert(key.into())
    }

    /// Whether the raw key is present
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    /// Whether a step is complete, by id or by section key
    #[must_use]
    pub fn is_complete(&self, step: &StepDescriptor) -> bool {
        self.contains(step.id) || step.section_key.is_some_and(|key| self.contains(key))
    }

    /// Number of keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no key is present
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate keys in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
