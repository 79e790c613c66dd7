//! Spreadsheet export for the full contact set.
//!
//! # Responsibility
//! - Dump every contact to a timestamp-named workbook on demand.
//! - Keep workbook layout fixed: one header row, one row per contact.
//!
//! # Invariants
//! - Export is read-only with respect to the database.
//! - The output file name embeds the local time at export.

mod xlsx;

pub use xlsx::{write_workbook, ExportError};
