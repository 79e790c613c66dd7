//! XLSX workbook writer.
//!
//! # Responsibility
//! - Serialize contact rows into a plain `.xlsx` workbook.
//! - Derive the output file name from the local wall clock.
//!
//! # Invariants
//! - Column order is fixed: Nombre, Edad, Correo, Telefono.
//! - An empty contact set still produces a workbook with the header row.

use crate::model::contact::Contact;
use chrono::{DateTime, Local};
use log::info;
use rust_xlsxwriter::{Workbook, XlsxError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const EXPORT_BASENAME: &str = "DATOS";
const EXPORT_TIMESTAMP_FORMAT: &str = "%d-%m-%y_%H-%M-%S";
const EXPORT_HEADERS: [&str; 4] = ["Nombre", "Edad", "Correo", "Telefono"];

/// Export failure while building or saving the workbook.
#[derive(Debug)]
pub enum ExportError {
    Workbook(XlsxError),
}

impl Display for ExportError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Workbook(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Workbook(err) => Some(err),
        }
    }
}

impl From<XlsxError> for ExportError {
    fn from(value: XlsxError) -> Self {
        Self::Workbook(value)
    }
}

/// Writes all contacts to `<dir>/DATOS <DD-MM-YY_HH-MM-SS>.xlsx`.
///
/// Rows keep the order of the input slice. Returns the path of the
/// created file.
pub fn write_workbook(contacts: &[Contact], dir: &Path) -> Result<PathBuf, ExportError> {
    let path = dir.join(export_file_name(Local::now()));

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, header) in EXPORT_HEADERS.iter().enumerate() {
        sheet.write_string(0, col as u16, *header)?;
    }

    for (index, contact) in contacts.iter().enumerate() {
        let row = (index + 1) as u32;
        sheet.write_string(row, 0, contact.name.as_str())?;
        sheet.write_number(row, 1, contact.age as f64)?;
        sheet.write_string(row, 2, contact.email.as_str())?;
        sheet.write_number(row, 3, contact.phone as f64)?;
    }

    workbook.save(&path)?;
    info!(
        "event=export_xlsx module=export status=ok rows={} path={}",
        contacts.len(),
        path.display()
    );

    Ok(path)
}

/// Builds the timestamped export file name for the given moment.
pub fn export_file_name(moment: DateTime<Local>) -> String {
    format!(
        "{EXPORT_BASENAME} {}.xlsx",
        moment.format(EXPORT_TIMESTAMP_FORMAT)
    )
}
