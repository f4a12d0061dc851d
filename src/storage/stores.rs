use super::*;

use crate::helper;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, Write};
use tempfile::NamedTempFile;
use tracing::debug;

pub struct TxtStorage {
    pub medium: String,
    pub path: String,
}

impl TxtStorage {
    pub fn new(path: &str) -> Self {
        Self {
            medium: "txt".to_string(),
            path: path.to_string(),
        }
    }
}

impl ContactStore for TxtStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        if !fs::exists(Path::new(&self.path))? {
            debug!(path = %self.path, "backing file missing, starting empty");
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let contacts = helper::deserialize_contacts_from_txt_buffer(reader)?;

        debug!(path = %self.path, count = contacts.len(), "loaded contacts");
        Ok(contacts)
    }

    fn append(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        let data = helper::serialize_contacts(contacts);
        file.write_all(data.as_bytes())?;

        debug!(path = %self.path, count = contacts.len(), "appended contacts");
        Ok(())
    }

    fn rewrite(&self, contacts: &[Contact]) -> Result<(), AppError> {
        create_file_parent(&self.path)?;

        // Temp file must live on the same filesystem for the rename to be atomic
        let dir = match Path::new(&self.path).parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir)?;
        let data = helper::serialize_contacts(contacts);
        file.write_all(data.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path)?;

        debug!(path = %self.path, count = contacts.len(), "rewrote backing file");
        Ok(())
    }

    fn get_medium(&self) -> &str {
        &self.medium
    }
}
