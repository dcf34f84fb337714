//! Estate Template
//!
//! Bridge from the normalized estate records to the flat variable bag the
//! legacy document templates consume. One adapter per document family keeps
//! template vocabulary (`attorneyOne`, `table_dataBequest`, ...) out of the
//! record model.
//!
//! # Example
//!
//! ```rust,ignore
//! use estate_template::map_records;
//!
//! let data = map_records(&records);
//! let json = data.to_json_pretty()?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod data;
mod document;
mod lookup;
mod poa;
mod will;

pub use data::TemplateData;
pub use document::{map_records, WillType};
pub use lookup::{PersonLookup, ResolvedPerson};
pub use poa::{map_poa_care, map_poa_property};
pub use will::{executor_priorities, map_will};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
