//! Sidebar categories and per-category progress

use crate::completion::CompletionSet;
use crate::step::StepDescriptor;
use crate::visibility::VisibleSteps;
use serde::{Deserialize, Serialize};

/// Grouping key for steps in the sidebar and breadcrumbs
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    AboutYou,
    People,
    Assets,
    Arrangements,
    Review,
}

impl Category {
    /// Every category in display order
    pub const ALL: [Category; 5] = [
        Self::AboutYou,
        Self::People,
        Self::Assets,
        Self::Arrangements,
        Self::Review,
    ];

    /// Human label
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::AboutYou => "About You",
            Self::People => "People",
            Self::Assets => "Assets",
            Self::Arrangements => "Arrangements",
            Self::Review => "Review",
        }
    }

    /// Key used by the client (`aboutYou`, `people`, ...)
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::AboutYou => "aboutYou",
            Self::People => "people",
            Self::Assets => "assets",
            Self::Arrangements => "arrangements",
            Self::Review => "review",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Visible steps of one category with completion progress
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    pub category: Category,
    pub label: &'static str,
    pub steps: Vec<&'static StepDescriptor>,
    pub completed_count: usize,
}

impl CategoryGroup {
    /// Number of visible steps in the group
    #[inline]
    #[must_use]
    pub fn total(&self) -> usize {
        self.steps.len()
    }

    /// Whether every step in the group is complete
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_count == self.steps.len()
    }
}

/// Group visible steps by category
///
/// Groups follow [`Category::ALL`] order, steps keep registry order, and a
/// category with no visible steps is left out.
#[must_use]
pub fn group_by_category(visible: &VisibleSteps, completion: &CompletionSet) -> Vec<CategoryGroup> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let steps: Vec<&'static StepDescriptor> =
                visible.iter().filter(|s| s.category == category).collect();
            if steps.is_empty() {
                return None;
            }
            let completed_count = steps.iter().filter(|s| completion.is_complete(s)).count();
            Some(CategoryGroup {
                category,
                label: category.label(),
                steps,
                completed_count,
            })
        })
        .collect()
}
