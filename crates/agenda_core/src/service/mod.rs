//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation, repository calls and export into use-case
//!   level APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod contact_service;
