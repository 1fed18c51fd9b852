//! # atl-core
//!
//! Record types, entity kinds, and error types for Atelier.
//!
//! This crate provides the foundational types shared across all Atelier crates:
//! - Record structs for every collection served by the records API
//! - Create payloads and partial update payloads per record
//! - Entity, lookup, and export model kinds with their URL path segments
//! - Cross-cutting error types
//! - Currency formatting for amount fields

pub mod entities;
pub mod errors;
pub mod kinds;
pub mod money;

pub use entities::Record;
pub use errors::CoreError;
pub use kinds::{Collection, EntityKind, ExportModel, LookupKind};
