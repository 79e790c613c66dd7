//! Core domain logic for the agenda contact manager.
//! This crate is the single source of truth for business invariants.

pub mod db;
pub mod export;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use export::{write_workbook, ExportError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{
    Contact, ContactId, ContactInput, ContactValidationError, ValidContact,
};
pub use repo::contact_repo::{
    ContactRepository, RepoError, RepoResult, SqliteContactRepository,
};
pub use service::contact_service::{ContactService, ServiceError};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
