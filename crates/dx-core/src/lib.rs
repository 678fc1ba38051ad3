//! # dx-core
//!
//! Core types and the session state store for dxwiz.
//!
//! This crate provides the foundational types shared across all dxwiz crates:
//! - Entity structs mirroring the diagnosis backend's wire format
//! - Enums for certainty levels, gender, wizard steps, and export formats
//! - Identity form validation
//! - The diagnosis session store and its step guards
//! - Cross-cutting error types
//! - CLI response types

pub mod answers;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
pub mod session;
pub mod validation;
pub mod wire_serde;
