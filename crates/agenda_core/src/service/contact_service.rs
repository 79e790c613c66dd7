//! Contact use-case service.
//!
//! # Responsibility
//! - Provide add/list/update/delete/export entry points for callers.
//! - Run field validation before every write.
//!
//! # Invariants
//! - No raw input reaches the repository; writes go through `validate`.
//! - Name-based update touches only the first (lowest-id) matching row.
//! - `delete` removes every row with the given name and is idempotent.

use crate::export::{write_workbook, ExportError};
use crate::model::contact::{Contact, ContactInput, ContactValidationError};
use crate::repo::contact_repo::{ContactRepository, RepoError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Service error for contact use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// A field failed a validation rule; nothing was written.
    Validation(ContactValidationError),
    /// No stored contact carries the given name.
    ContactNotFound(String),
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Workbook build or save failure.
    Export(ExportError),
    /// Internal consistency mismatch between write and read-back.
    InconsistentState(&'static str),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::ContactNotFound(name) => write!(f, "contact not found: `{name}`"),
            Self::Repo(err) => write!(f, "{err}"),
            Self::Export(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent contact state: {details}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            Self::Export(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ContactValidationError> for ServiceError {
    fn from(value: ContactValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<ExportError> for ServiceError {
    fn from(value: ExportError) -> Self {
        Self::Export(value)
    }
}

/// Use-case facade over a contact repository implementation.
pub struct ContactService<R: ContactRepository> {
    repo: R,
}

impl<R: ContactRepository> ContactService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates and persists one new contact.
    ///
    /// Returns the stored record including its assigned identifier.
    pub fn add_contact(&self, input: &ContactInput) -> Result<Contact, ServiceError> {
        let valid = input.validate()?;
        let id = self.repo.insert(&valid)?;
        info!("event=contact_add module=service status=ok id={id}");

        self.repo
            .get(id)?
            .ok_or(ServiceError::InconsistentState(
                "inserted contact not found in read-back",
            ))
    }

    /// Lists every stored contact in insertion order.
    pub fn list_contacts(&self) -> Result<Vec<Contact>, ServiceError> {
        Ok(self.repo.list_all()?)
    }

    /// Removes every contact with the given name.
    ///
    /// Removing an absent name is a no-op, not an error.
    pub fn remove_contact(&self, name: &str) -> Result<(), ServiceError> {
        self.repo.delete_by_name(name)?;
        info!("event=contact_delete module=service status=ok");
        Ok(())
    }

    /// Rewrites all fields of the contact currently named `old_name`.
    ///
    /// # Contract
    /// - The target row is resolved by name first; with duplicate names the
    ///   first (lowest-id) row wins.
    /// - New field values are validated before the write.
    /// - The row keeps its identifier.
    pub fn update_contact(
        &self,
        old_name: &str,
        input: &ContactInput,
    ) -> Result<Contact, ServiceError> {
        let valid = input.validate()?;

        let id = self
            .repo
            .find_id_by_name(old_name)?
            .ok_or_else(|| ServiceError::ContactNotFound(old_name.to_string()))?;

        let changed = self.repo.update_by_id(id, &valid)?;
        if changed == 0 {
            warn!("event=contact_update module=service status=error id={id} error_code=row_vanished");
            return Err(ServiceError::ContactNotFound(old_name.to_string()));
        }
        info!("event=contact_update module=service status=ok id={id} rows={changed}");

        self.repo
            .get(id)?
            .ok_or(ServiceError::InconsistentState(
                "updated contact not found in read-back",
            ))
    }

    /// Dumps the full contact set to a timestamped workbook in `dir`.
    ///
    /// Returns the path of the created file.
    pub fn export_contacts(&self, dir: &Path) -> Result<PathBuf, ServiceError> {
        let contacts = self.repo.list_all()?;
        let path = write_workbook(&contacts, dir)?;
        Ok(path)
    }
}
