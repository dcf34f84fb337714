//! Estate Wizard
//!
//! Step sequencing for the estate-planning document wizard.
//!
//! # Core Concepts
//!
//! - [`StepRegistry`]: ordered, constant step list per document family
//! - [`VisibilityRule`]: enumerable condition deciding whether a step is shown
//! - [`WizardContext`]: facts derived from the records that the rules read
//! - [`VisibleSteps`]: registry filtered by a context, in registry order
//! - [`NavigationCursor`]: next/previous/first-incomplete over visible steps
//! - [`CategoryGroup`]: visible steps grouped for the sidebar with progress
//!
//! # Example
//!
//! ```rust,ignore
//! use estate_wizard::{WizardConfig, WizardSnapshot};
//!
//! let snapshot = WizardSnapshot::from_records(&records, today, &WizardConfig::default());
//! let cursor = snapshot.cursor("spouse-info");
//! if cursor.is_fallback() {
//!     // redirect the router to cursor.current()
//! }
//! ```

#![allow(missing_docs)]
#![warn(unreachable_pub)]

mod category;
mod completion;
mod config;
mod context;
mod error;
mod navigation;
mod registry;
mod rules;
mod snapshot;
mod step;
mod visibility;

pub use category::{group_by_category, Category, CategoryGroup};
pub use completion::CompletionSet;
pub use config::WizardConfig;
pub use context::{build_context, is_minor, WizardContext};
pub use error::WizardError;
pub use navigation::{first_incomplete, CursorPosition, NavigationCursor, Next};
pub use registry::{StepRegistry, POA_CARE_STEPS, POA_PROPERTY_STEPS, WILL_STEPS};
pub use rules::{VisibilityRule, PARTNERED};
pub use snapshot::WizardSnapshot;
pub use step::StepDescriptor;
pub use visibility::VisibleSteps;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
