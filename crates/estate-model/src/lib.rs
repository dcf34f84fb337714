//! Estate Model
//!
//! Normalized records supplied by the persistence layer for the document wizard.
//!
//! # Core Concepts
//!
//! - [`RecordSet`]: the three read models (will data, people, assets) loaded together
//! - [`WillData`]: the persisted will-data record, one optional section per wizard step
//! - [`Person`]: anyone referenced by the documents (spouse, children, executors, guardians)
//! - [`Asset`]: property that bequests may point at
//! - [`DocumentType`] / [`DocumentFamily`]: which document is being assembled
//!
//! # Example
//!
//! ```rust,ignore
//! use estate_model::RecordSet;
//!
//! let records = RecordSet::load("records.json")?;
//! for child in records.children() {
//!     println!("{}", child.full_name());
//! }
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod asset;
mod document;
mod error;
mod ids;
mod person;
mod poa;
mod records;
mod will;

pub use asset::{Asset, AssetKind};
pub use document::{DocumentFamily, DocumentType};
pub use error::ModelError;
pub use ids::{AssetId, BequestId, PersonId};
pub use person::{MaritalStatus, Person, Relation};
pub use poa::{Attorney, AttorneyRole, PoaData};
pub use records::RecordSet;
pub use will::{
    AdditionalInstructions, Bequest, BequestShare, DistributionShare, Executor, ExecutorRole,
    FinalDetails, FuneralWish, Guardian, PersonalInfo, Pet, PredeceaseRule, Residue,
    TrustingEntry, WillData, Wipeout, WipeoutStrategy,
};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
