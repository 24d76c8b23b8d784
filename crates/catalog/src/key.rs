//! SearchKey — turn raw menu input into an id or title lookup.

use crate::book::Book;
use crate::error::CatalogError;
use crate::store::Catalog;

/// What a user typed when asked for a book's title or id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKey<'a> {
    /// Input parsed as an unsigned integer.
    Id(usize),
    /// Anything else, trimmed.
    Title(&'a str),
}

impl<'a> SearchKey<'a> {
    /// Classify `input`: an unsigned integer is an id, anything else a title.
    ///
    /// `"-1"` and `"12abc"` are titles. A numeric title such as `"1984"` is
    /// always read as an id; look it up with [`Catalog::search_by_title`].
    pub fn parse(input: &'a str) -> Self {
        let input = input.trim();
        match input.parse::<usize>() {
            Ok(id) => SearchKey::Id(id),
            Err(_) => SearchKey::Title(input),
        }
    }
}

impl<const N: usize> Catalog<N> {
    /// Dispatch `key` to [`search_by_id`](Self::search_by_id) or
    /// [`search_by_title`](Self::search_by_title).
    pub fn search(&self, key: SearchKey<'_>) -> Result<&Book, CatalogError> {
        match key {
            SearchKey::Id(id) => self.search_by_id(id),
            SearchKey::Title(title) => self.search_by_title(title),
        }
    }

    /// Parse `input` with [`SearchKey::parse`] and look the book up.
    pub fn resolve(&self, input: &str) -> Result<&Book, CatalogError> {
        self.search(SearchKey::parse(input))
    }
}
