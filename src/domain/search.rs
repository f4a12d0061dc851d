use super::*;

/// Narrows `accumulated` to the contacts whose `field` contains `value`,
/// ignoring case. An empty `accumulated` means "start from every contact",
/// so repeated calls compose as AND across fields.
pub fn search_contacts<'a>(
    contacts: &'a [Contact],
    accumulated: &[&'a Contact],
    field: Field,
    value: &str,
) -> Vec<&'a Contact> {
    let matching = |c: &&'a Contact| c.matches(field, value);

    if accumulated.is_empty() {
        contacts.iter().filter(matching).collect()
    } else {
        accumulated.iter().copied().filter(matching).collect()
    }
}
