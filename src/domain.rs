pub mod contact;
pub mod manager;
pub mod pages;
pub mod search;

use crate::errors::AppError;

pub use contact::{Contact, Field};
pub use manager::PhoneBook;
pub use pages::{Page, Pages};

/// Top-level menu actions of the interactive console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    ListContacts,
    AddContact,
    EditContact,
    SearchContacts,
    Exit,
}

impl Command {
    pub fn parse(input: &str) -> Result<Self, AppError> {
        match input.trim() {
            "1" => Ok(Command::ListContacts),
            "2" => Ok(Command::AddContact),
            "3" => Ok(Command::EditContact),
            "4" => Ok(Command::SearchContacts),
            "5" => Ok(Command::Exit),
            other => Err(AppError::ParseCommand(other.to_string())),
        }
    }
}
