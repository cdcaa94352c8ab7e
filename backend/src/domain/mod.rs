//! # Domain Layer
//!
//! Business logic for the storefront backend. Services validate incoming
//! payloads, fill in server-side fields (identifiers, slugs, timestamps,
//! schedule normalization) and delegate persistence to the storage layer.

pub mod catalog_service;
pub mod contact_service;
pub mod models;
pub mod program_service;

pub use catalog_service::{CatalogError, CatalogService};
pub use contact_service::{ContactError, ContactService};
pub use program_service::{ProgramError, ProgramService};

use time::format_description::well_known::Rfc3339;

/// Current time as an RFC 3339 string, stamped onto created records.
pub(crate) fn now_rfc3339() -> anyhow::Result<String> {
    Ok(time::OffsetDateTime::now_utc().format(&Rfc3339)?)
}
