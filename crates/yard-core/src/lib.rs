//! # yard-core
//!
//! Core domain types and error types for Switchyard.
//!
//! This crate provides the foundational types shared across all Switchyard crates:
//! - Entity structs for stored API keys, project members, and analytics projections
//! - Provider and role enums, including provider-specific key patterns
//! - The dialog lifecycle state machine (`DialogState` + `DialogEvent`)
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod lifecycle;
