use super::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Keeps records in memory exactly as a file would, stale copies included.
/// Clones share the same records.
#[derive(Default, Clone)]
pub struct MemStorage {
    pub data: Rc<RefCell<Vec<Contact>>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            data: Rc::new(RefCell::new(contacts)),
        }
    }
}

impl ContactStore for MemStorage {
    fn load(&self) -> Result<Vec<Contact>, AppError> {
        Ok(self.data.borrow().clone())
    }

    fn append(&self, contacts: &[Contact]) -> Result<(), AppError> {
        self.data.borrow_mut().extend_from_slice(contacts);
        Ok(())
    }

    fn rewrite(&self, contacts: &[Contact]) -> Result<(), AppError> {
        *self.data.borrow_mut() = contacts.to_vec();
        Ok(())
    }

    fn get_medium(&self) -> &str {
        "mem"
    }
}
