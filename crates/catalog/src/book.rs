//! Book — the record stored in each occupied catalog slot.

use heapless::String;

use crate::config::TITLE_CAPACITY;
use crate::error::CatalogError;
use crate::price::Price;

/// Fixed-capacity book title (up to [`TITLE_CAPACITY`] UTF-8 bytes).
pub type Title = String<TITLE_CAPACITY>;

/// A book as collected from the user, before the catalog assigns it an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDraft {
    /// Display title
    pub title: Title,
    /// Page count
    pub pages: u32,
    /// Retail price
    pub price: Price,
}

impl BookDraft {
    /// Build a draft, rejecting titles longer than [`TITLE_CAPACITY`] bytes.
    pub fn new(title: &str, pages: u32, price: Price) -> Result<Self, CatalogError> {
        let title = Title::try_from(title).map_err(|_| CatalogError::TitleTooLong {
            len: title.len(),
            max: TITLE_CAPACITY,
        })?;
        Ok(Self {
            title,
            pages,
            price,
        })
    }
}

/// A book stored in the catalog.
///
/// `id` is the index of the slot the book currently occupies. It is assigned
/// on insertion and rewritten when an earlier book is removed, so it must not
/// be held on to across removals.
///
/// Two books are equal when their ids are equal; compare fields directly to
/// check content.
#[derive(Debug, Clone)]
pub struct Book {
    /// Current slot index
    pub id: usize,
    /// Display title
    pub title: Title,
    /// Page count
    pub pages: u32,
    /// Retail price
    pub price: Price,
}

impl Book {
    pub(crate) fn from_draft(id: usize, draft: BookDraft) -> Self {
        let BookDraft {
            title,
            pages,
            price,
        } = draft;
        Self {
            id,
            title,
            pages,
            price,
        }
    }

    /// Case-insensitive exact title comparison.
    pub fn title_matches(&self, query: &str) -> bool {
        eq_ignore_case(self.title.as_str(), query)
    }

    /// The draft this book would have been created from.
    pub fn to_draft(&self) -> BookDraft {
        BookDraft {
            title: self.title.clone(),
            pages: self.pages,
            price: self.price,
        }
    }
}

impl PartialEq for Book {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Book {}

/// Lowercase both sides char by char; `core` only, no allocation.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Copy as much of `s` into a [`Title`] as fits, cutting at a char boundary.
pub(crate) fn truncated_title(s: &str) -> Title {
    let mut title = Title::new();
    for c in s.chars() {
        if title.push(c).is_err() {
            break;
        }
    }
    title
}
