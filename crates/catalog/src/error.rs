//! Error types for catalog and price operations.

use thiserror::Error;

use crate::book::{truncated_title, Title};

/// Error returned by [`Catalog`](crate::store::Catalog) operations.
///
/// Every variant is recoverable: the table is never left partially mutated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Every slot is occupied; the book was not stored.
    #[error("The library is already full! ({capacity} books)")]
    Full {
        /// Slot count of the table that rejected the book.
        capacity: usize,
    },
    /// No valid record lives in the slot with this id.
    #[error("Book with ID {0} not found!")]
    IdNotFound(usize),
    /// No valid record carries this title (case-insensitive).
    ///
    /// `query` keeps at most [`TITLE_CAPACITY`](crate::config::TITLE_CAPACITY)
    /// bytes of the search text; `len` is the full length in bytes, so a
    /// longer query renders with a trailing `...`.
    #[error("Book with title '{query}{}' not found!", truncation_marker(.query, .len))]
    TitleNotFound {
        /// The search text, cut at a char boundary if it did not fit.
        query: Title,
        /// Length of the full search text in bytes.
        len: usize,
    },
    /// The draft title does not fit in [`Title`].
    #[error("title is {len} bytes, at most {max} are allowed")]
    TitleTooLong {
        /// Length of the rejected title in bytes.
        len: usize,
        /// Title capacity in bytes.
        max: usize,
    },
    /// The price text could not be parsed.
    #[error("invalid price: {0}")]
    Price(#[from] PriceError),
}

impl CatalogError {
    /// Build a `TitleNotFound` for `query`, recording its full length.
    pub fn title_not_found(query: &str) -> Self {
        Self::TitleNotFound {
            query: truncated_title(query),
            len: query.len(),
        }
    }

    /// Returns `true` for the lookup failures (`IdNotFound`, `TitleNotFound`).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::IdNotFound(_) | Self::TitleNotFound { .. })
    }
}

fn truncation_marker(query: &Title, len: &usize) -> &'static str {
    if *len > query.len() {
        "..."
    } else {
        ""
    }
}

/// Error returned when parsing a [`Price`](crate::price::Price) from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PriceError {
    /// Input was empty or whitespace only.
    #[error("price is empty")]
    Empty,
    /// Input contained something other than digits and one decimal point.
    #[error("price must look like 12 or 12.34")]
    Invalid,
    /// More than two digits after the decimal point.
    #[error("price has more than two decimal places")]
    TooPrecise,
    /// Value does not fit the cent counter.
    #[error("price is too large")]
    Overflow,
}
