//! # grn-parser
//!
//! Session request form parsing for Greenroom.
//!
//! Session proposals are GitHub issue-form submissions: one `### <title>`
//! heading per form field, followed by the field's free-text value, with
//! `_No response_` standing in for empty optional fields. This crate turns
//! such a body into a typed [`grn_core::entities::SessionDescription`]:
//!
//! - [`template`] declares the form as a closed section registry: one
//!   [`template::SectionId`] variant per field, each carrying its own
//!   parse/validate contract.
//! - [`parse_session_body`] splits the body on headings, checks the
//!   sections against the registry, and assembles the description.
//! - [`validate_session_body_format`] returns the ordered problem list
//!   without assembling anything; an empty list means the body is valid.
//!
//! Format problems are plain strings, not error enums: they are findings
//! reported back to the session author, not faults.

mod body;
mod sections;
pub mod template;

pub use body::{parse_session_body, validate_session_body_format};
