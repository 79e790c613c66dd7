//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Write APIs accept only validated records.
//! - Repository APIs return semantic errors in addition to DB transport
//!   errors.

pub mod contact_repo;
