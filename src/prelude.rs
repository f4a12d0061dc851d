pub use crate::cli::{Console, command, run_app};
pub use crate::domain::{
    Command, PhoneBook,
    contact::{self, Contact, Field},
    manager,
    pages::{Page, Pages, listing_line},
    search::search_contacts,
};
pub use crate::errors::AppError;
pub use crate::storage::{self, ContactStore, MemStorage, SaveMode, TxtStorage};
