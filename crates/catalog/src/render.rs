//! Text rendering of books and catalog listings.
//!
//! Every renderer implements [`core::fmt::Display`], so a front end can
//! `println!` it, `write!` it to a socket, or format it into a
//! `heapless::String` on a device without an allocator.

use core::fmt;

use crate::book::Book;
use crate::store::Catalog;

/// Separator printed between menu sections and detailed listing entries.
pub const SPACER: &str = "-----------------------------------------";

/// Multi-line description of one book.
///
/// ```text
/// Information for book #0
///
/// Title: Dune
/// Pages: 412
/// Price: 19.99$
/// ```
pub struct Details<'a>(pub &'a Book);

impl fmt::Display for Details<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let book = self.0;
        writeln!(f, "Information for book #{}", book.id)?;
        writeln!(f)?;
        writeln!(f, "Title: {}", book.title)?;
        writeln!(f, "Pages: {}", book.pages)?;
        write!(f, "Price: {}$", book.price)
    }
}

/// One-line listing entry: `#<id> <title>`.
pub struct Summary<'a>(pub &'a Book);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.0.id, self.0.title)
    }
}

/// Every stored book, either as summaries or as full details.
pub struct Listing<'a, const N: usize> {
    /// Catalog to list.
    pub catalog: &'a Catalog<N>,
    /// Render [`Details`] separated by [`SPACER`] instead of [`Summary`] lines.
    pub detailed: bool,
}

impl<const N: usize> fmt::Display for Listing<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.catalog.is_empty() {
            return write!(f, "The library is empty.");
        }
        for (i, book) in self.catalog.list_all().enumerate() {
            if i > 0 {
                writeln!(f)?;
                if self.detailed {
                    writeln!(f, "{SPACER}")?;
                }
            }
            if self.detailed {
                write!(f, "{}", Details(book))?;
            } else {
                write!(f, "{}", Summary(book))?;
            }
        }
        Ok(())
    }
}

/// Menu header line reporting how many books are stored.
pub struct Status<'a, const N: usize>(pub &'a Catalog<N>);

impl<const N: usize> fmt::Display for Status<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "The library currently contains {} books.", self.0.count())
    }
}
