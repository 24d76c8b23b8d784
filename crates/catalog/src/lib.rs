//! Book catalog — fixed-capacity, in-memory table of book records.
//!
//! # Modules
//!
//! - [`book`] — `Book` record, `BookDraft` and the `Title` string type
//! - [`price`] — `Price` fixed-point decimal
//! - [`store`] — `Catalog<N>` slot table with add/remove/search/list
//! - [`key`] — `SearchKey` id-or-title lookup for menu input
//! - [`render`] — text rendering of records and listings
//! - [`error`] — `CatalogError` and `PriceError`
//! - [`config`] — application name, version and capacities

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod book;
pub mod config;
pub mod error;
pub mod key;
pub mod price;
pub mod render;
pub mod store;

// Top-level re-exports for convenience
pub use book::{Book, BookDraft, Title};
pub use config::{CAPACITY, TITLE_CAPACITY};
pub use error::{CatalogError, PriceError};
pub use key::SearchKey;
pub use price::Price;
pub use store::{BookCatalog, Catalog, SmallCatalog};
