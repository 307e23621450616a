//! # grn-core
//!
//! Core types and label taxonomy for Greenroom.
//!
//! This crate provides the foundational types shared across all Greenroom
//! crates:
//! - Entity structs for the program snapshot (project, rooms, slots, sessions)
//! - Parsed session descriptions and chair identity records
//! - Severity/kind enums and the validation issue record
//! - The label-name wire format (single source of truth)
//! - The chair-resolution collaborator trait
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod labels;
pub mod resolve;
pub mod responses;
