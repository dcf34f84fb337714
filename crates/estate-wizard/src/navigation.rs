//! Navigation cursor over the visible steps
//!
//! The router owns the current step id and hands it in; the cursor only
//! answers where to go from there. An id that is no longer visible (for
//! example spouse-info after the spouse was removed) is not an error: the
//! cursor falls back to the first incomplete step and reports the fallback
//! through [`CursorPosition::Fallback`] so the caller can redirect.

use crate::category::Category;
use crate::completion::CompletionSet;
use crate::step::StepDescriptor;
use crate::visibility::VisibleSteps;

/// Result of moving forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next {
    /// The following visible step
    Step(&'static StepDescriptor),
    /// No step remains; the caller decides what completion means
    Complete,
}

impl Next {
    /// The step, if any
    #[inline]
    #[must_use]
    pub fn step(&self) -> Option<&'static StepDescriptor> {
        match self {
            Self::Step(step) => Some(step),
            Self::Complete => None,
        }
    }

    /// Whether the wizard is finished
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

/// How the cursor's position was obtained
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CursorPosition {
    /// The requested step is visible
    Found,
    /// The requested step is hidden or unknown; positioned at the first incomplete step
    Fallback {
        /// Id the caller asked for
        requested: String,
    },
    /// Nothing is visible
    Empty,
}

/// First visible step not in the completion set
///
/// Scoped to a category when given. When every step in scope is complete the
/// first step in scope is returned. `None` only when the scope is empty.
#[must_use]
pub fn first_incomplete(
    visible: &VisibleSteps,
    completion: &CompletionSet,
    category: Option<Category>,
) -> Option<&'static StepDescriptor> {
    let in_scope = |step: &&'static StepDescriptor| category.map_or(true, |c| step.category == c);
    visible
        .iter()
        .filter(in_scope)
        .find(|step| !completion.is_complete(step))
        .or_else(|| visible.iter().find(in_scope))
}

/// Cursor positioned on one visible step
#[derive(Debug, Clone)]
pub struct NavigationCursor<'a> {
    visible: &'a VisibleSteps,
    completion: &'a CompletionSet,
    index: Option<usize>,
    position: CursorPosition,
}

impl<'a> NavigationCursor<'a> {
    /// Position the cursor at `current_id`, falling back to the first incomplete step
    #[must_use]
    pub fn resolve(
        visible: &'a VisibleSteps,
        completion: &'a CompletionSet,
        current_id: &str,
    ) -> Self {
        if let Some(index) = visible.position(current_id) {
            return Self {
                visible,
                completion,
                index: Some(index),
                position: CursorPosition::Found,
            };
        }

        let mut cursor = Self::at_first_incomplete(visible, completion);
        if cursor.index.is_some() {
            tracing::warn!(
                requested = current_id,
                fallback = cursor.current().map(|s| s.id),
                "step not visible, falling back to first incomplete step"
            );
            cursor.position = CursorPosition::Fallback {
                requested: current_id.to_string(),
            };
        }
        cursor
    }

    /// Position the cursor at the first incomplete step (re-entry default)
    #[must_use]
    pub fn at_first_incomplete(visible: &'a VisibleSteps, completion: &'a CompletionSet) -> Self {
        let index =
            first_incomplete(visible, completion, None).and_then(|s| visible.position(s.id));
        Self {
            visible,
            completion,
            index,
            position: if index.is_some() {
                CursorPosition::Found
            } else {
                CursorPosition::Empty
            },
        }
    }

    /// How the position was obtained
    #[inline]
    #[must_use]
    pub fn position(&self) -> &CursorPosition {
        &self.position
    }

    /// Whether the requested id was stale and the cursor fell back
    #[inline]
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        matches!(self.position, CursorPosition::Fallback { .. })
    }

    /// Current step
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&'static StepDescriptor> {
        self.index.and_then(|i| self.visible.at(i))
    }

    /// Step after the current one
    #[must_use]
    pub fn next_step(&self) -> Next {
        self.index
            .and_then(|i| self.visible.at(i + 1))
            .map_or(Next::Complete, Next::Step)
    }

    /// Step before the current one; `None` at the first step
    #[must_use]
    pub fn prev_step(&self) -> Option<&'static StepDescriptor> {
        self.index
            .and_then(|i| i.checked_sub(1))
            .and_then(|i| self.visible.at(i))
    }

    /// Whether the cursor is on the first visible step
    #[inline]
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == Some(0)
    }

    /// Whether the cursor is on the last visible step
    #[inline]
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index.is_some() && self.index == self.visible.len().checked_sub(1)
    }

    /// First incomplete step, optionally within one category
    #[must_use]
    pub fn first_incomplete(&self, category: Option<Category>) -> Option<&'static StepDescriptor> {
        first_incomplete(self.visible, self.completion, category)
    }

    /// Jump to a visible step; returns `false` and stays put if it is not visible
    pub fn go_to(&mut self, id: &str) -> bool {
        match self.visible.position(id) {
            Some(index) => {
                self.index = Some(index);
                self.position = CursorPosition::Found;
                true
            }
            None => false,
        }
    }

    /// Move forward one step; stays on the last step and returns `Complete`
    pub fn advance(&mut self) -> Next {
        let next = self.next_step();
        if let Next::Step(step) = next {
            self.index = self.visible.position(step.id);
            self.position = CursorPosition::Found;
        }
        next
    }

    /// Move back one step; returns `false` at the first step
    pub fn retreat(&mut self) -> bool {
        match self.prev_step() {
            Some(step) => {
                self.index = self.visible.position(step.id);
                self.position = CursorPosition::Found;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::WizardContext;
    use crate::registry::WILL_STEPS;
    use estate_model::MaritalStatus;

    fn visible(ctx: &WizardContext) -> VisibleSteps {
        VisibleSteps::compute(&WILL_STEPS, ctx)
    }

    #[test]
    fn next_and_prev_follow_visible_order() {
        let steps = visible(&WizardContext::default().with_marital_status(MaritalStatus::Single));
        let done = CompletionSet::new();
        let cursor = NavigationCursor::resolve(&steps, &done, "family-status");

        assert_eq!(cursor.position(), &CursorPosition::Found);
        assert_eq!(cursor.next_step().step().map(|s| s.id), Some("children"));
        assert_eq!(cursor.prev_step().map(|s| s.id), Some("personal-info"));
    }

    #[test]
    fn boundaries_do_not_overrun() {
        let steps = visible(&WizardContext::default());
        let done = CompletionSet::new();

        let first = NavigationCursor::resolve(&steps, &done, "personal-info");
        assert!(first.is_first());
        assert!(!first.is_last());
        assert_eq!(first.prev_step(), None);

        let mut last = NavigationCursor::resolve(&steps, &done, "review");
        assert!(last.is_last());
        assert!(last.next_step().is_complete());
        assert_eq!(last.advance(), Next::Complete);
        assert_eq!(last.current().map(|s| s.id), Some("review"));
    }

    #[test]
    fn hidden_spouse_step_falls_back_to_first_incomplete() {
        let steps = visible(&WizardContext::default().with_marital_status(MaritalStatus::Single));
        let done: CompletionSet = ["personal-info", "family-status"].into_iter().collect();
        let cursor = NavigationCursor::resolve(&steps, &done, "spouse-info");

        assert!(cursor.is_fallback());
        assert_eq!(
            cursor.position(),
            &CursorPosition::Fallback {
                requested: "spouse-info".to_string()
            }
        );
        assert_eq!(cursor.current().map(|s| s.id), Some("children"));
    }

    #[test]
    fn first_incomplete_defaults_to_first_step() {
        let steps = visible(&WizardContext::default());
        assert_eq!(
            first_incomplete(&steps, &CompletionSet::new(), None).map(|s| s.id),
            Some("personal-info")
        );

        let all: CompletionSet = steps.ids().into_iter().collect();
        assert_eq!(first_incomplete(&steps, &all, None).map(|s| s.id), Some("personal-info"));
    }

    #[test]
    fn first_incomplete_scoped_to_category() {
        let steps = visible(&WizardContext::default().with_assets());
        let done: CompletionSet = ["assets"].into_iter().collect();
        assert_eq!(
            first_incomplete(&steps, &done, Some(Category::Assets)).map(|s| s.id),
            Some("bequests")
        );

        let all_assets: CompletionSet = ["assets", "bequests", "residue"].into_iter().collect();
        assert_eq!(
            first_incomplete(&steps, &all_assets, Some(Category::Assets)).map(|s| s.id),
            Some("assets")
        );
    }

    #[test]
    fn imperative_moves() {
        let steps = visible(&WizardContext::default());
        let done = CompletionSet::new();
        let mut cursor = NavigationCursor::resolve(&steps, &done, "personal-info");

        assert!(!cursor.retreat());
        assert_eq!(cursor.advance().step().map(|s| s.id), Some("family-status"));
        assert!(cursor.retreat());
        assert_eq!(cursor.current().map(|s| s.id), Some("personal-info"));

        assert!(cursor.go_to("executors"));
        assert!(!cursor.go_to("guardians"));
        assert_eq!(cursor.current().map(|s| s.id), Some("executors"));
    }

    #[test]
    fn empty_list_is_inert() {
        let steps = VisibleSteps::default();
        let done = CompletionSet::new();
        let mut cursor = NavigationCursor::resolve(&steps, &done, "personal-info");

        assert_eq!(cursor.position(), &CursorPosition::Empty);
        assert_eq!(cursor.current(), None);
        assert!(cursor.next_step().is_complete());
        assert_eq!(cursor.prev_step(), None);
        assert!(!cursor.is_first());
        assert!(!cursor.is_last());
        assert!(!cursor.retreat());
    }
}
