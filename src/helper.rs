use std::io::BufRead;

use crate::domain::contact::{Contact, FIELD_SEPARATOR};
use crate::errors::AppError;

/// One record as written to the backing file: newline first, then the fields.
pub fn serialize_contact(contact: &Contact) -> String {
    format!("\n{}", contact)
}

pub fn serialize_contacts(contacts: &[Contact]) -> String {
    contacts.iter().map(serialize_contact).collect()
}

/// Parses one non-blank line of the backing file. `line_no` is 1-based.
pub fn deserialize_contact(line: &str, line_no: usize) -> Result<Contact, AppError> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    let found = parts.len();

    let [surname, first_name, patronymic, organization, work_phone, personal_phone]: [&str; 6] =
        parts
            .try_into()
            .map_err(|_| AppError::Parse { line: line_no, found })?;

    // Trim the line's surrounding whitespace without swallowing an empty last field.
    Ok(Contact::new(
        surname.trim_start().to_string(),
        first_name.to_string(),
        patronymic.to_string(),
        organization.to_string(),
        work_phone.to_string(),
        personal_phone.trim_end().to_string(),
    ))
}

pub fn deserialize_contacts_from_txt_buffer<R: BufRead>(
    buffer: R,
) -> Result<Vec<Contact>, AppError> {
    let mut contacts = Vec::new();

    for (i, line) in buffer.lines().enumerate() {
        let line = line?;

        // Every append starts with a newline, so the first line is usually blank
        if line.trim().is_empty() {
            continue;
        }

        contacts.push(deserialize_contact(&line, i + 1)?);
    }

    Ok(contacts)
}
