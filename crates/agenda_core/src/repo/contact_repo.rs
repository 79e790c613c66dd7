//! Contact repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the canonical `datos` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths accept only `ValidContact`; raw input never reaches SQL.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - Every operation is one auto-committed statement.

use crate::db::{migrations, DbError};
use crate::model::contact::{
    age_in_range, email_is_well_formed, Contact, ContactId, ValidContact, NAME_MIN_CHARS,
};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONTACT_TABLE: &str = "datos";
const CONTACT_COLUMNS: &[&str] = &["ID", "NOMBRE", "EDAD", "CORREO", "TELEFONO"];
const CONTACT_SELECT_SQL: &str = "SELECT ID, NOMBRE, EDAD, CORREO, TELEFONO FROM datos";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for contact persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted contact data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through open_db"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "missing required column `{table}.{column}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for contact CRUD operations.
pub trait ContactRepository {
    /// Writes one new row and returns the store-assigned identifier.
    fn insert(&self, contact: &ValidContact) -> RepoResult<ContactId>;
    /// Returns every row in insertion (id) order. No pagination.
    fn list_all(&self) -> RepoResult<Vec<Contact>>;
    /// Gets one row by identifier.
    fn get(&self, id: ContactId) -> RepoResult<Option<Contact>>;
    /// Removes all rows with the given name. No-op when nothing matches.
    fn delete_by_name(&self, name: &str) -> RepoResult<()>;
    /// Overwrites all four fields of the row with that identifier and
    /// returns the affected-row count (0 when the id does not exist).
    fn update_by_id(&self, id: ContactId, contact: &ValidContact) -> RepoResult<usize>;
    /// Identifier of the first (lowest-id) row with the given name.
    fn find_id_by_name(&self, name: &str) -> RepoResult<Option<ContactId>>;
}

/// SQLite-backed contact repository.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    ///
    /// Rejects connections whose schema was not brought up by this crate's
    /// migrations: unexpected `user_version`, missing table, missing column.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn insert(&self, contact: &ValidContact) -> RepoResult<ContactId> {
        self.conn.execute(
            "INSERT INTO datos (NOMBRE, EDAD, CORREO, TELEFONO)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                contact.name.as_str(),
                contact.age,
                contact.email.as_str(),
                contact.phone,
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_all(&self) -> RepoResult<Vec<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} ORDER BY ID ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut contacts = Vec::new();
        while let Some(row) = rows.next()? {
            contacts.push(parse_contact_row(row)?);
        }

        Ok(contacts)
    }

    fn get(&self, id: ContactId) -> RepoResult<Option<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} WHERE ID = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_contact_row(row)?));
        }

        Ok(None)
    }

    fn delete_by_name(&self, name: &str) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM datos WHERE NOMBRE = ?1;", [name])?;

        Ok(())
    }

    fn update_by_id(&self, id: ContactId, contact: &ValidContact) -> RepoResult<usize> {
        let changed = self.conn.execute(
            "UPDATE datos
             SET
                NOMBRE = ?1,
                EDAD = ?2,
                CORREO = ?3,
                TELEFONO = ?4
             WHERE ID = ?5;",
            params![
                contact.name.as_str(),
                contact.age,
                contact.email.as_str(),
                contact.phone,
                id,
            ],
        )?;

        Ok(changed)
    }

    fn find_id_by_name(&self, name: &str) -> RepoResult<Option<ContactId>> {
        let id = self
            .conn
            .query_row(
                "SELECT ID FROM datos WHERE NOMBRE = ?1 ORDER BY ID ASC LIMIT 1;",
                [name],
                |row| row.get::<_, ContactId>(0),
            )
            .optional()?;

        Ok(id)
    }
}

fn parse_contact_row(row: &Row<'_>) -> RepoResult<Contact> {
    let contact = Contact {
        id: row.get("ID")?,
        name: row.get("NOMBRE")?,
        age: row.get("EDAD")?,
        email: row.get("CORREO")?,
        phone: row.get("TELEFONO")?,
    };

    if !age_in_range(contact.age) {
        return Err(RepoError::InvalidData(format!(
            "age {} out of range in datos.EDAD for row {}",
            contact.age, contact.id
        )));
    }
    if contact.name.chars().count() < NAME_MIN_CHARS {
        return Err(RepoError::InvalidData(format!(
            "name too short in datos.NOMBRE for row {}",
            contact.id
        )));
    }
    if !email_is_well_formed(&contact.email) {
        return Err(RepoError::InvalidData(format!(
            "malformed email in datos.CORREO for row {}",
            contact.id
        )));
    }

    Ok(contact)
}

fn ensure_connection_ready(conn: &Connection) -> RepoResult<()> {
    let expected_version = migrations::latest_version();
    let actual_version =
        conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
        );",
        [CONTACT_TABLE],
        |row| row.get(0),
    )?;
    if table_exists == 0 {
        return Err(RepoError::MissingRequiredTable(CONTACT_TABLE));
    }

    for &column in CONTACT_COLUMNS {
        let column_exists: i64 = conn.query_row(
            "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2;",
            [CONTACT_TABLE, column],
            |row| row.get(0),
        )?;
        if column_exists == 0 {
            return Err(RepoError::MissingRequiredColumn {
                table: CONTACT_TABLE,
                column,
            });
        }
    }

    Ok(())
}
