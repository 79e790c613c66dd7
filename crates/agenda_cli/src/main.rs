//! Command-line surface for the agenda contact manager.
//!
//! # Responsibility
//! - Map subcommands onto `agenda_core` use-case calls.
//! - Keep all domain behavior in the core crate; this binary only parses
//!   arguments and prints results.

use agenda_core::db::open_db;
use agenda_core::{default_log_level, init_logging, ContactInput, ContactService, SqliteContactRepository};
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const DEFAULT_DB_FILE: &str = "base_datos.db";

/// Local contact manager: add, list, update, delete and export records.
#[derive(Parser, Debug)]
#[command(name = "agenda")]
#[command(about = "Local contact manager backed by SQLite")]
#[command(version)]
struct Cli {
    /// Database file. Created and migrated on first use.
    #[arg(long, default_value = DEFAULT_DB_FILE)]
    db: PathBuf,

    /// Directory for rolling log files. Logging stays off when omitted.
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Adds one contact after validating every field.
    Add {
        name: String,
        age: String,
        email: String,
        phone: String,
    },
    /// Prints every stored contact in insertion order.
    List,
    /// Rewrites the first contact named OLD_NAME with the new field values.
    Update {
        old_name: String,
        name: String,
        age: String,
        email: String,
        phone: String,
    },
    /// Deletes every contact with the given name.
    Delete { name: String },
    /// Exports all contacts to a timestamped .xlsx workbook in DIR.
    Export {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(dir) = &cli.log_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating log directory `{}`", dir.display()))?;
        let absolute = dir
            .canonicalize()
            .with_context(|| format!("resolving log directory `{}`", dir.display()))?;
        let absolute = absolute
            .to_str()
            .context("log directory path is not valid UTF-8")?;
        init_logging(default_log_level(), absolute).map_err(anyhow::Error::msg)?;
    }

    let conn = open_db(&cli.db)
        .with_context(|| format!("opening database `{}`", cli.db.display()))?;
    let repo = SqliteContactRepository::try_new(&conn)?;
    let service = ContactService::new(repo);

    match cli.command {
        Command::Add {
            name,
            age,
            email,
            phone,
        } => {
            let contact = service.add_contact(&ContactInput::new(name, age, email, phone))?;
            println!("added contact {} (id {})", contact.name, contact.id);
        }
        Command::List => {
            let contacts = service.list_contacts()?;
            if contacts.is_empty() {
                println!("no contacts stored");
            }
            for contact in contacts {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    contact.id, contact.name, contact.age, contact.email, contact.phone
                );
            }
        }
        Command::Update {
            old_name,
            name,
            age,
            email,
            phone,
        } => {
            let contact =
                service.update_contact(&old_name, &ContactInput::new(name, age, email, phone))?;
            println!("updated contact {} (id {})", contact.name, contact.id);
        }
        Command::Delete { name } => {
            service.remove_contact(&name)?;
            println!("deleted contacts named {name}");
        }
        Command::Export { dir } => {
            let path = service.export_contacts(&dir)?;
            println!("exported to {}", path.display());
        }
    }

    Ok(())
}
