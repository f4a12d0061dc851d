use super::*;

use crate::storage::{self, ContactStore, SaveMode};
use super::search::search_contacts;
use tracing::{debug, info, warn};

pub struct PhoneBook {
    pub mem: Vec<Contact>,
    pub storage: Box<dyn ContactStore>,
    pub save_mode: SaveMode,
}

impl PhoneBook {
    /// Opens the phone book kept in `path` (or the default file).
    /// A missing file gives an empty phone book.
    pub fn new(path: Option<&str>, save_mode: SaveMode) -> Result<Self, AppError> {
        Self::with_storage(storage::parse_storage_type(path), save_mode)
    }

    pub fn with_storage(
        storage: Box<dyn ContactStore>,
        save_mode: SaveMode,
    ) -> Result<Self, AppError> {
        let mut book = Self {
            mem: Vec::new(),
            storage,
            save_mode,
        };
        book.load()?;
        Ok(book)
    }

    pub fn load(&mut self) -> Result<(), AppError> {
        self.mem = self.storage.load()?;
        debug!(
            medium = self.storage.get_medium(),
            count = self.mem.len(),
            "phone book loaded"
        );
        Ok(())
    }

    /// With a contact, appends just that record. Without one, persists the
    /// whole phone book according to the save mode; in append mode every
    /// record is written again after the old ones.
    pub fn save(&self, contact: Option<&Contact>) -> Result<(), AppError> {
        match contact {
            Some(contact) => self.storage.append(std::slice::from_ref(contact)),
            None if self.save_mode.is_rewrite() => self.storage.rewrite(&self.mem),
            None => {
                warn!(
                    count = self.mem.len(),
                    "re-appending every record, older copies stay in the file"
                );
                self.storage.append(&self.mem)
            }
        }
    }

    pub fn contact_list(&self) -> &[Contact] {
        &self.mem
    }

    pub fn get(&self, index: usize) -> Option<&Contact> {
        self.mem.get(index)
    }

    pub fn len(&self) -> usize {
        self.mem.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mem.is_empty()
    }

    /// Pages of numbered listing lines; see [`Pages`].
    pub fn list(&self, page_size: Option<usize>) -> Result<Pages<'_>, AppError> {
        Pages::new(&self.mem, page_size)
    }

    pub fn add_contact(&mut self, contact: Contact) -> Result<(), AppError> {
        self.save(Some(&contact))?;
        self.mem.push(contact);

        info!(position = self.mem.len(), "contact added");
        Ok(())
    }

    /// Edits by the numbers the console works with: a 0-based record index
    /// and a field id from 1 to 6.
    pub fn edit_contact(&mut self, index: i64, field_id: i64, value: &str) -> Result<(), AppError> {
        let field = Field::try_from(field_id)?;
        let index = usize::try_from(index)
            .ok()
            .filter(|&i| i < self.mem.len())
            .ok_or(AppError::IndexOutOfRange {
                index,
                len: self.mem.len(),
            })?;

        self.edit_field(index, field, value)
    }

    pub fn edit_field(&mut self, index: usize, field: Field, value: &str) -> Result<(), AppError> {
        let len = self.mem.len();
        let contact = self.mem.get_mut(index).ok_or(AppError::IndexOutOfRange {
            index: index as i64,
            len,
        })?;

        *contact.field_mut(field) = value.to_string();
        self.save(None)?;

        info!(index, field = field.label(), "contact edited");
        Ok(())
    }

    /// Field-id flavour of [`search_contacts`] over this phone book.
    pub fn search<'a>(
        &'a self,
        accumulated: &[&'a Contact],
        field_id: i64,
        value: &str,
    ) -> Result<Vec<&'a Contact>, AppError> {
        let field = Field::try_from(field_id)?;
        Ok(self.search_field(accumulated, field, value))
    }

    pub fn search_field<'a>(
        &'a self,
        accumulated: &[&'a Contact],
        field: Field,
        value: &str,
    ) -> Vec<&'a Contact> {
        let found = search_contacts(&self.mem, accumulated, field, value);
        debug!(field = field.label(), value, found = found.len(), "search");
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemStorage, TxtStorage};
    use std::fs;
    use tempfile::tempdir;

    fn ivanov() -> Contact {
        Contact::from(["Ivanov", "Ivan", "Ivanovich", "Acme", "111", "222"].map(str::to_string))
    }

    fn petrov() -> Contact {
        Contact::from(["Petrov", "Petr", "Petrovich", "Globex", "333", "444"].map(str::to_string))
    }

    fn mem_book(contacts: Vec<Contact>, save_mode: SaveMode) -> Result<(PhoneBook, MemStorage), AppError> {
        let storage = MemStorage::with_contacts(contacts);
        let book = PhoneBook::with_storage(Box::new(storage.clone()), save_mode)?;
        Ok((book, storage))
    }

    #[test]
    fn missing_file_gives_empty_book() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("phonebook.txt");
        let mut book = PhoneBook::new(path.to_str(), SaveMode::Append)?;

        assert!(book.is_empty());

        book.add_contact(ivanov())?;
        assert!(!book.is_empty());
        Ok(())
    }

    #[test]
    fn adds_persistent_contact_with_txt() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("phonebook.txt");

        let mut book = PhoneBook::new(path.to_str(), SaveMode::Append)?;
        book.add_contact(ivanov())?;
        book.add_contact(Contact::from(["", "", "", "", "", ""].map(str::to_string)))?;

        let reloaded = PhoneBook::new(path.to_str(), SaveMode::Append)?;
        assert_eq!(reloaded.contact_list(), book.contact_list());
        Ok(())
    }

    #[test]
    fn edit_replaces_one_field() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("phonebook.txt");
        fs::write(&path, "Ivanov, Ivan, Ivanovich, Acme, 111, 222")?;

        let mut book = PhoneBook::new(path.to_str(), SaveMode::Append)?;
        book.edit_contact(0, 5, "999")?;

        let mut expected = ivanov();
        expected.work_phone = "999".to_string();
        assert_eq!(book.get(0), Some(&expected));
        Ok(())
    }

    #[test]
    fn append_mode_duplicates_records_on_edit() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("phonebook.txt");
        let storage = TxtStorage::new(path.to_str().unwrap());
        storage.append(&[ivanov(), petrov()])?;

        let mut book = PhoneBook::new(path.to_str(), SaveMode::Append)?;
        book.edit_field(1, Field::Organization, "Initech")?;

        let reloaded = PhoneBook::new(path.to_str(), SaveMode::Append)?;
        assert_eq!(reloaded.len(), 4);
        assert_eq!(reloaded.get(1), Some(&petrov()));
        assert_eq!(reloaded.get(3).unwrap().organization, "Initech");
        Ok(())
    }

    #[test]
    fn rewrite_mode_keeps_one_copy() -> Result<(), AppError> {
        let (mut book, storage) = mem_book(vec![ivanov(), petrov()], SaveMode::Rewrite)?;

        book.edit_field(0, Field::FirstName, "Ivan Jr")?;
        book.edit_field(0, Field::Patronymic, "")?;

        let stored = storage.data.borrow();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored[0].first_name, "Ivan Jr");
        assert_eq!(stored[0].patronymic, "");
        Ok(())
    }

    #[test]
    fn add_appends_a_single_record() -> Result<(), AppError> {
        let (mut book, storage) = mem_book(vec![ivanov()], SaveMode::Rewrite)?;

        book.add_contact(petrov())?;

        assert_eq!(*storage.data.borrow(), vec![ivanov(), petrov()]);
        Ok(())
    }

    #[test]
    fn directory_in_place_of_file_fails_to_load() -> Result<(), AppError> {
        let dir = tempdir()?;

        let result = PhoneBook::new(dir.path().to_str(), SaveMode::Append);
        assert!(matches!(result, Err(AppError::Io(_))));
        Ok(())
    }

    #[test]
    fn write_errors_reach_the_caller() -> Result<(), AppError> {
        let dir = tempdir()?;
        let path = dir.path().join("phonebook.txt");
        fs::write(&path, "Ivanov, Ivan, Ivanovich, Acme, 111, 222")?;
        let mut book = PhoneBook::new(path.to_str(), SaveMode::Rewrite)?;

        // Backing file replaced by a directory after loading
        fs::remove_file(&path)?;
        fs::create_dir(&path)?;

        assert!(matches!(book.add_contact(petrov()), Err(AppError::Io(_))));
        assert_eq!(book.contact_list(), &[ivanov()]);

        assert!(matches!(book.edit_contact(0, 5, "999"), Err(AppError::Io(_))));

        // The failed rewrite leaves no temp file behind
        assert_eq!(fs::read_dir(dir.path())?.count(), 1);
        Ok(())
    }

    #[test]
    fn edit_out_of_range() -> Result<(), AppError> {
        let (mut book, storage) = mem_book(vec![ivanov()], SaveMode::Append)?;

        assert!(matches!(
            book.edit_contact(-1, 1, "x"),
            Err(AppError::IndexOutOfRange { index: -1, len: 1 })
        ));
        assert!(matches!(
            book.edit_contact(1, 1, "x"),
            Err(AppError::IndexOutOfRange { index: 1, len: 1 })
        ));
        assert!(matches!(
            book.edit_contact(0, 7, "x"),
            Err(AppError::UnknownField(7))
        ));
        assert!(book.edit_field(5, Field::Surname, "x").unwrap_err().is_range());

        // Nothing was touched or written
        assert_eq!(book.contact_list(), &[ivanov()]);
        assert_eq!(storage.data.borrow().len(), 1);
        Ok(())
    }

    #[test]
    fn search_by_field_id() -> Result<(), AppError> {
        let (book, _) = mem_book(vec![ivanov(), petrov()], SaveMode::Append)?;

        let found = book.search(&[], 1, "petr")?;
        assert_eq!(found, vec![&petrov()]);

        let narrowed = book.search(&found, 4, "acme")?;
        assert!(narrowed.is_empty());

        assert!(book.search(&[], 0, "x").unwrap_err().is_range());
        Ok(())
    }

    #[test]
    fn list_rejects_zero_page_size() -> Result<(), AppError> {
        let (book, _) = mem_book(vec![ivanov()], SaveMode::Append)?;

        assert!(matches!(book.list(Some(0)), Err(AppError::InvalidPageSize(0))));
        assert_eq!(book.list(None)?.count(), 1);
        Ok(())
    }
}
