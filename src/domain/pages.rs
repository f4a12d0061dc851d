use super::*;

/// Formats a contact the way listings show it, `position` being 1-based.
pub fn listing_line(position: usize, contact: &Contact) -> String {
    format!("{position}. {contact}")
}

/// One chunk of a listing.
#[derive(Debug, PartialEq, Eq)]
pub struct Page<'a> {
    pub number: usize,
    /// 1-based position in the whole listing, with its contact.
    pub entries: Vec<(usize, &'a Contact)>,
}

impl Page<'_> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|&(position, contact)| listing_line(position, contact))
            .collect()
    }
}

/// Lazily splits contacts into pages. The caller pulls the next page only
/// when it wants to keep going, so stopping early is just dropping the iterator.
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    contacts: &'a [Contact],
    page_size: usize,
    next: usize,
}

impl<'a> Pages<'a> {
    /// `None` puts everything on a single page. A size of zero is rejected.
    pub fn new(contacts: &'a [Contact], page_size: Option<usize>) -> Result<Self, AppError> {
        let page_size = match page_size {
            Some(0) => return Err(AppError::InvalidPageSize(0)),
            Some(size) => size,
            None => contacts.len().max(1),
        };

        Ok(Self {
            contacts,
            page_size,
            next: 0,
        })
    }

    /// Whether another page is left to pull.
    pub fn has_next(&self) -> bool {
        self.next < self.contacts.len()
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Page<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_next() {
            return None;
        }

        let start = self.next;
        let end = (start + self.page_size).min(self.contacts.len());
        self.next = end;

        let entries = self.contacts[start..end]
            .iter()
            .enumerate()
            .map(|(i, contact)| (start + i + 1, contact))
            .collect();

        Some(Page {
            number: start / self.page_size + 1,
            entries,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.contacts.len() - self.next).div_ceil(self.page_size);
        (left, Some(left))
    }
}
