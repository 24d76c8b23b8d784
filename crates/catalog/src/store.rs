//! Catalog — fixed-capacity, in-memory table of book slots.
//!
//! Each slot is either empty or holds one [`Book`] whose `id` equals the
//! slot index. Removal compacts the table: every later book moves one slot
//! down and is renumbered, so occupied slots stay contiguous from 0 and ids
//! are **not** stable across removals.
//!
//! `BookCatalog` (10 000 slots) is close to three megabytes. Keep it in a
//! `static`, on the heap, or on a thread with an enlarged stack; tests use
//! `SmallCatalog` (64 slots) which fits on the default test stack.

use crate::book::{Book, BookDraft};
use crate::config::CAPACITY;
use crate::error::CatalogError;

/// A fixed-size table of `N` book slots.
pub struct Catalog<const N: usize> {
    slots: [Option<Book>; N],
}

/// Production catalog with [`CAPACITY`] slots.
pub type BookCatalog = Catalog<CAPACITY>;

/// Alias used in tests (stack-safe, capacity 64).
pub type SmallCatalog = Catalog<64>;

impl<const N: usize> Catalog<N> {
    /// Create a table with every slot empty.
    pub const fn new() -> Self {
        Catalog {
            slots: [const { None }; N],
        }
    }

    /// Number of slots, occupied or not.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Store `draft` in the first empty slot and return that slot's index as
    /// the new book's id.
    ///
    /// Returns `Err(CatalogError::Full)` without touching the table when
    /// every slot is occupied.
    pub fn add(&mut self, draft: BookDraft) -> Result<usize, CatalogError> {
        let Some((id, slot)) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| slot.is_none())
        else {
            tracing::warn!(capacity = N, "catalog full, book rejected");
            return Err(CatalogError::Full { capacity: N });
        };

        *slot = Some(Book::from_draft(id, draft));
        tracing::debug!(id, "book added");
        Ok(id)
    }

    /// Remove the book with `id` and close the gap.
    ///
    /// Every slot after `id` shifts one position down, each shifted book's id
    /// is decremented to match its new slot, and the last slot becomes empty.
    /// Returns the removed book as it was before removal.
    ///
    /// Returns `Err(CatalogError::IdNotFound)` and leaves the table untouched
    /// when the slot is empty or `id >= N`.
    pub fn remove_by_id(&mut self, id: usize) -> Result<Book, CatalogError> {
        let tail = self
            .slots
            .get_mut(id..)
            .ok_or(CatalogError::IdNotFound(id))?;
        let removed = tail
            .first_mut()
            .and_then(Option::take)
            .ok_or(CatalogError::IdNotFound(id))?;

        // The now-empty slot at `id` travels to the end of the table.
        tail.rotate_left(1);
        let mut renumbered = 0usize;
        for (offset, slot) in tail.iter_mut().enumerate() {
            if let Some(book) = slot {
                book.id = id.saturating_add(offset);
                renumbered = renumbered.saturating_add(1);
            }
        }

        tracing::debug!(id, renumbered, "book removed");
        Ok(removed)
    }

    /// Return the book with `id`.
    pub fn search_by_id(&self, id: usize) -> Result<&Book, CatalogError> {
        tracing::trace!(id, "search by id");
        self.slots
            .get(id)
            .and_then(Option::as_ref)
            .filter(|book| book.id == id)
            .ok_or(CatalogError::IdNotFound(id))
    }

    /// Return the first book, in slot order, whose title equals `title`
    /// ignoring case.
    pub fn search_by_title(&self, title: &str) -> Result<&Book, CatalogError> {
        tracing::trace!(title, "search by title");
        self.list_all()
            .find(|book| book.title_matches(title))
            .ok_or_else(|| CatalogError::title_not_found(title))
    }

    /// Returns `true` when a book with `id` is stored.
    pub fn contains(&self, id: usize) -> bool {
        self.search_by_id(id).is_ok()
    }

    /// Number of occupied slots.
    pub fn count(&self) -> usize {
        self.list_all().count()
    }

    /// Returns `true` when no slot is occupied.
    pub fn is_empty(&self) -> bool {
        self.list_all().next().is_none()
    }

    /// Returns `true` when every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Every stored book in ascending id order.
    ///
    /// Each call starts a fresh pass over the table.
    pub fn list_all(&self) -> impl Iterator<Item = &Book> + '_ {
        self.slots.iter().flatten()
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        tracing::debug!("catalog cleared");
    }
}

impl<const N: usize> Default for Catalog<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::price::Price;

    fn draft(title: &str, pages: u32, cents: u32) -> BookDraft {
        BookDraft::new(title, pages, Price::from_cents(cents)).expect("draft")
    }

    fn filled(titles: &[&str]) -> SmallCatalog {
        let mut cat = SmallCatalog::new();
        for (i, title) in titles.iter().enumerate() {
            let pages = u32::try_from(i).expect("small index") + 100;
            cat.add(draft(title, pages, 500)).expect("add");
        }
        cat
    }

    #[test]
    fn test_catalog_starts_empty() {
        let cat = SmallCatalog::new();
        assert!(cat.is_empty());
        assert_eq!(cat.count(), 0);
        assert_eq!(cat.capacity(), 64);
    }

    #[test]
    fn test_add_assigns_first_free_slot() {
        let mut cat = SmallCatalog::new();
        assert_eq!(cat.add(draft("Dune", 412, 1999)).expect("add"), 0);
        assert_eq!(cat.add(draft("1984", 328, 950)).expect("add"), 1);
        assert_eq!(cat.count(), 2);
        assert!(!cat.is_empty());
    }

    #[test]
    fn test_add_full_returns_err_and_keeps_count() {
        let mut cat = Catalog::<4>::new();
        for i in 0..4 {
            cat.add(draft(&format!("t{i}"), 1, 1)).expect("should not be full yet");
        }
        assert!(cat.is_full());
        let err = cat.add(draft("overflow", 1, 1)).unwrap_err();
        assert_eq!(err, CatalogError::Full { capacity: 4 });
        assert_eq!(cat.count(), 4);
        assert!(cat.search_by_title("overflow").is_err());
    }

    #[test]
    fn test_search_by_id_after_add() {
        let mut cat = SmallCatalog::new();
        let id = cat.add(draft("Dune", 412, 1999)).expect("add");
        let book = cat.search_by_id(id).expect("found");
        assert_eq!(book.id, id);
        assert_eq!(book.title.as_str(), "Dune");
        assert_eq!(book.pages, 412);
        assert_eq!(book.price, Price::from_cents(1999));
    }

    #[test]
    fn test_search_by_id_missing() {
        let cat = filled(&["a"]);
        assert_eq!(cat.search_by_id(1).unwrap_err(), CatalogError::IdNotFound(1));
        assert_eq!(
            cat.search_by_id(10_000).unwrap_err(),
            CatalogError::IdNotFound(10_000)
        );
    }

    #[test]
    fn test_search_by_title_ignores_case() {
        let cat = filled(&["Dune"]);
        for query in ["Dune", "dune", "DUNE"] {
            assert_eq!(cat.search_by_title(query).expect("found").id, 0);
        }
    }

    #[test]
    fn test_search_by_title_returns_first_match() {
        let cat = filled(&["Emma", "Persuasion", "emma"]);
        assert_eq!(cat.search_by_title("EMMA").expect("found").id, 0);
    }

    #[test]
    fn test_search_by_title_missing_carries_query() {
        let cat = filled(&["Dune"]);
        let err = cat.search_by_title("Emma").unwrap_err();
        let expected = crate::book::Title::try_from("Emma").expect("fits");
        assert_eq!(
            err,
            CatalogError::TitleNotFound {
                query: expected,
                len: 4
            }
        );
    }

    #[test]
    fn test_search_by_title_overlong_query_keeps_full_length() {
        let cat = filled(&["Dune"]);
        let query = "x".repeat(crate::config::TITLE_CAPACITY + 16);
        let err = cat.search_by_title(&query).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::TitleNotFound { len, .. } if len == query.len()
        ));
        assert!(err.to_string().contains("...' not found!"));
    }

    #[test]
    fn test_long_and_non_ascii_titles_round_trip() {
        let mut cat = SmallCatalog::new();
        let titles = [
            "The Curious Incident of the Dog in the Night-Time: A Novel (Vintage)",
            "Преступление и наказание: роман в шести частях",
        ];
        for title in titles {
            let id = cat.add(draft(title, 300, 1299)).expect("add");
            assert_eq!(cat.search_by_title(title).expect("found").id, id);
        }
        let found = cat
            .search_by_title("ПРЕСТУПЛЕНИЕ И НАКАЗАНИЕ: РОМАН В ШЕСТИ ЧАСТЯХ")
            .expect("case-insensitive");
        assert_eq!(found.title.as_str(), titles[1]);
    }

    #[test]
    fn test_remove_shifts_and_renumbers() {
        let mut cat = filled(&["a", "b", "c", "d"]);
        let removed = cat.remove_by_id(1).expect("remove");
        assert_eq!(removed.title.as_str(), "b");
        assert_eq!(removed.id, 1);
        assert_eq!(cat.count(), 3);

        let titles: Vec<_> = cat.list_all().map(|b| (b.id, b.title.as_str())).collect();
        assert_eq!(titles, vec![(0, "a"), (1, "c"), (2, "d")]);
        // content moves with the record
        assert_eq!(cat.search_by_id(1).expect("c").pages, 102);
        assert!(cat.search_by_id(3).is_err());
    }

    #[test]
    fn test_remove_last_leaves_others_alone() {
        let mut cat = filled(&["a", "b"]);
        cat.remove_by_id(1).expect("remove");
        assert_eq!(cat.count(), 1);
        assert_eq!(cat.search_by_id(0).expect("a").title.as_str(), "a");
    }

    #[test]
    fn test_remove_from_full_table_frees_last_slot() {
        let mut cat = Catalog::<3>::new();
        for t in ["a", "b", "c"] {
            cat.add(draft(t, 1, 1)).expect("add");
        }
        cat.remove_by_id(0).expect("remove");
        assert!(!cat.is_full());
        assert_eq!(cat.add(draft("d", 1, 1)).expect("add"), 2);
    }

    #[test]
    fn test_remove_missing_is_err_and_untouched() {
        let mut cat = filled(&["a", "b"]);
        assert_eq!(cat.remove_by_id(2).unwrap_err(), CatalogError::IdNotFound(2));
        assert_eq!(cat.remove_by_id(64).unwrap_err(), CatalogError::IdNotFound(64));
        assert_eq!(
            cat.remove_by_id(usize::MAX).unwrap_err(),
            CatalogError::IdNotFound(usize::MAX)
        );
        assert_eq!(cat.count(), 2);
    }

    #[test]
    fn test_remove_on_empty_catalog() {
        let mut cat = SmallCatalog::new();
        assert!(cat.remove_by_id(0).is_err());
        assert!(cat.is_empty());
    }

    #[test]
    fn test_added_after_remove_reuses_freed_tail_slot() {
        let mut cat = filled(&["a", "b", "c"]);
        cat.remove_by_id(0).expect("remove");
        assert_eq!(cat.add(draft("d", 1, 1)).expect("add"), 2);
    }

    #[test]
    fn test_contains() {
        let cat = filled(&["a"]);
        assert!(cat.contains(0));
        assert!(!cat.contains(1));
    }

    #[test]
    fn test_list_all_is_restartable() {
        let cat = filled(&["a", "b", "c"]);
        assert_eq!(cat.list_all().count(), 3);
        let ids: Vec<_> = cat.list_all().map(|b| b.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_clear() {
        let mut cat = filled(&["a", "b"]);
        cat.clear();
        assert!(cat.is_empty());
        assert_eq!(cat.add(draft("c", 1, 1)).expect("add"), 0);
    }

    #[test]
    fn test_dune_1984_scenario() {
        let mut cat = SmallCatalog::new();
        assert_eq!(cat.add(draft("Dune", 412, 1999)).expect("add"), 0);
        assert_eq!(cat.add(draft("1984", 328, 950)).expect("add"), 1);
        cat.remove_by_id(0).expect("remove");
        let book = cat.search_by_id(0).expect("1984 moved to 0");
        assert_eq!(book.title.as_str(), "1984");
        assert_eq!(book.pages, 328);
        assert_eq!(cat.count(), 1);
    }
}
