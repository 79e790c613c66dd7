//! Domain model for contact records.
//!
//! # Responsibility
//! - Define the canonical contact shape shared by storage and export.
//! - Own all field-level validation rules.
//!
//! # Invariants
//! - Every persisted contact satisfies all field constraints.
//! - Validation happens before any write, never after.

pub mod contact;
