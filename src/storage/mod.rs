pub mod memory;
pub mod stores;

use crate::domain::contact::Contact;
use crate::errors::AppError;
use clap::ValueEnum;
use std::fs;
use std::path::Path;

pub use memory::MemStorage;
pub use stores::TxtStorage;

/// Default backing file, relative to the working directory.
pub const DEFAULT_PATH: &str = "phonebook.txt";

pub trait ContactStore {
    fn load(&self) -> Result<Vec<Contact>, AppError>;

    /// Adds records after whatever the medium already holds.
    fn append(&self, contacts: &[Contact]) -> Result<(), AppError>;

    /// Replaces the medium's contents with `contacts`.
    fn rewrite(&self, contacts: &[Contact]) -> Result<(), AppError>;

    fn get_medium(&self) -> &str;
}

/// What a full save (after an edit) does to the backing medium.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SaveMode {
    /// Re-append every record. The file keeps the stale copies.
    #[default]
    Append,
    /// Atomically replace the file with the current records.
    Rewrite,
}

impl SaveMode {
    pub fn is_rewrite(&self) -> bool {
        matches!(self, SaveMode::Rewrite)
    }
}

pub fn parse_storage_type(path: Option<&str>) -> Box<dyn ContactStore> {
    Box::new(TxtStorage::new(path.unwrap_or(DEFAULT_PATH)))
}

pub fn create_file_parent(path: &str) -> Result<(), AppError> {
    let path = Path::new(path);

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
