use std::collections::HashMap;

use tallybook_core::{DomainError, DomainResult, Entity};

use crate::book::{BookKey, BookRecord, Quantity};

/// Outcome of [`Library::add_stock`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stocked {
    /// First time this title + author was seen.
    Created(BookRecord),
    /// Copies were added to an existing record.
    Restocked(BookRecord),
}

impl Stocked {
    pub fn record(&self) -> &BookRecord {
        match self {
            Stocked::Created(record) | Stocked::Restocked(record) => record,
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, Stocked::Created(_))
    }
}

/// In-memory catalog: one [`BookRecord`] per title + author.
///
/// Records are created by [`add_stock`](Self::add_stock) and never removed.
/// Every failed operation leaves the catalog exactly as it was.
#[derive(Debug, Clone, Default)]
pub struct Library {
    books: HashMap<BookKey, BookRecord>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add copies, creating the record if this title + author is new.
    pub fn add_stock(
        &mut self,
        title: &str,
        author: &str,
        quantity: Quantity,
    ) -> DomainResult<Stocked> {
        let key = BookKey::new(title, author);
        match self.books.get_mut(&key) {
            Some(record) => {
                record.deposit(quantity)?;
                Ok(Stocked::Restocked(record.clone()))
            }
            None => {
                let record = BookRecord::new(key, quantity);
                self.books.insert(record.id().clone(), record.clone());
                Ok(Stocked::Created(record))
            }
        }
    }

    /// Lend copies out.
    ///
    /// Fails with `NotFound` for an unknown book and `InsufficientStock`
    /// (carrying the available count) when fewer copies are on the shelf.
    pub fn borrow(
        &mut self,
        title: &str,
        author: &str,
        quantity: Quantity,
    ) -> DomainResult<BookRecord> {
        let record = self.record_mut(title, author)?;
        record.withdraw(quantity)?;
        Ok(record.clone())
    }

    /// Take copies back. Only books already in the catalog can be returned.
    pub fn return_stock(
        &mut self,
        title: &str,
        author: &str,
        quantity: Quantity,
    ) -> DomainResult<BookRecord> {
        let record = self.record_mut(title, author)?;
        record.deposit(quantity)?;
        Ok(record.clone())
    }

    pub fn get(&self, title: &str, author: &str) -> Option<&BookRecord> {
        self.books.get(&BookKey::new(title, author))
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// All records, in no particular order.
    pub fn records(&self) -> impl Iterator<Item = &BookRecord> {
        self.books.values()
    }

    fn record_mut(&mut self, title: &str, author: &str) -> DomainResult<&mut BookRecord> {
        let key = BookKey::new(title, author);
        match self.books.get_mut(&key) {
            Some(record) => Ok(record),
            None => Err(DomainError::not_found(key.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn qty(n: i64) -> Quantity {
        Quantity::new(n).unwrap()
    }

    #[test]
    fn add_creates_then_restocks() {
        let mut library = Library::new();

        let first = library.add_stock("A", "B", qty(5)).unwrap();
        assert!(first.is_new());
        assert_eq!(first.record().quantity(), 5);

        let second = library.add_stock("A", "B", qty(3)).unwrap();
        assert!(!second.is_new());
        assert_eq!(second.record().quantity(), 8);
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn borrow_and_return_scenario() {
        let mut library = Library::new();
        library.add_stock("A", "B", qty(5)).unwrap();
        library.add_stock("A", "B", qty(3)).unwrap();

        let err = library.borrow("A", "B", qty(10)).unwrap_err();
        assert_eq!(err, DomainError::insufficient_stock(10, 8));
        assert_eq!(library.get("A", "B").unwrap().quantity(), 8);

        let record = library.borrow("A", "B", qty(8)).unwrap();
        assert_eq!(record.quantity(), 0);

        let record = library.return_stock("A", "B", qty(2)).unwrap();
        assert_eq!(record.quantity(), 2);

        let err = library.borrow("X", "Y", qty(1)).unwrap_err();
        assert_eq!(err, DomainError::NotFound("X - Y".into()));
    }

    #[test]
    fn return_of_unknown_book_does_not_create_it() {
        let mut library = Library::new();
        let err = library
            .return_stock("Foreign", "Author", qty(1))
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
        assert!(library.is_empty());
        assert!(library.get("Foreign", "Author").is_none());
    }

    #[test]
    fn repeated_returns_keep_increasing() {
        let mut library = Library::new();
        library.add_stock("A", "B", qty(1)).unwrap();

        for expected in [4, 7, 10] {
            let record = library.return_stock("A", "B", qty(3)).unwrap();
            assert_eq!(record.quantity(), expected);
        }
    }

    #[test]
    fn title_and_author_must_both_match() {
        let mut library = Library::new();
        library.add_stock("Dune", "Frank Herbert", qty(1)).unwrap();

        assert!(library.borrow("Dune", "frank herbert", qty(1)).is_err());
        assert!(library.borrow("Dune ", "Frank Herbert", qty(1)).is_err());
        assert!(library.borrow("Dune", "Frank Herbert", qty(1)).is_ok());
    }

    #[test]
    fn records_lists_every_catalog_entry() {
        let mut library = Library::new();
        library.add_stock("Emma", "Jane Austen", qty(2)).unwrap();
        library.add_stock("Dune", "Frank Herbert", qty(1)).unwrap();

        let mut titles: Vec<(&str, &str)> = library
            .records()
            .map(|record| (record.title(), record.author()))
            .collect();
        titles.sort();
        assert_eq!(
            titles,
            vec![("Dune", "Frank Herbert"), ("Emma", "Jane Austen")]
        );
    }

    #[test]
    fn overflowing_stock_is_rejected_and_leaves_record_unchanged() {
        let nearly_full: BookRecord = serde_json::from_value(serde_json::json!({
            "title": "A",
            "author": "B",
            "quantity": u64::MAX - 1,
        }))
        .unwrap();
        let key = nearly_full.id().clone();
        let mut library = Library::new();
        library.books.insert(key, nearly_full);

        let err = library.add_stock("A", "B", qty(2)).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(library.get("A", "B").unwrap().quantity(), u64::MAX - 1);

        let err = library.return_stock("A", "B", qty(5)).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(library.get("A", "B").unwrap().quantity(), u64::MAX - 1);

        let record = library.return_stock("A", "B", qty(1)).unwrap();
        assert_eq!(record.quantity(), u64::MAX);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(usize, i64),
        Borrow(usize, i64),
        Return(usize, i64),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        (0u8..3, 0usize..4, 1i64..20).prop_map(|(kind, book, n)| match kind {
            0 => Op::Add(book, n),
            1 => Op::Borrow(book, n),
            _ => Op::Return(book, n),
        })
    }

    const TITLES: [(&str, &str); 4] = [
        ("Dune", "Frank Herbert"),
        ("Emma", "Jane Austen"),
        ("Ulysses", "James Joyce"),
        ("Dune", "Brian Herbert"),
    ];

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the catalog agrees with a plain counter model after any
        /// operation sequence, and failed operations change nothing.
        #[test]
        fn catalog_matches_counter_model(ops in prop::collection::vec(op_strategy(), 1..60)) {
            let mut library = Library::new();
            let mut model: HashMap<usize, u64> = HashMap::new();

            for op in ops {
                match op {
                    Op::Add(book, n) => {
                        let (title, author) = TITLES[book];
                        let out = library.add_stock(title, author, qty(n)).unwrap();
                        prop_assert_eq!(out.is_new(), !model.contains_key(&book));
                        *model.entry(book).or_insert(0) += n as u64;
                    }
                    Op::Borrow(book, n) => {
                        let (title, author) = TITLES[book];
                        let result = library.borrow(title, author, qty(n));
                        match model.get_mut(&book) {
                            None => prop_assert!(matches!(result, Err(DomainError::NotFound(_)))),
                            Some(stock) if *stock < n as u64 => {
                                prop_assert_eq!(
                                    result,
                                    Err(DomainError::insufficient_stock(n as u64, *stock))
                                );
                            }
                            Some(stock) => {
                                *stock -= n as u64;
                                prop_assert_eq!(result.unwrap().quantity(), *stock);
                            }
                        }
                    }
                    Op::Return(book, n) => {
                        let (title, author) = TITLES[book];
                        let result = library.return_stock(title, author, qty(n));
                        match model.get_mut(&book) {
                            None => prop_assert!(matches!(result, Err(DomainError::NotFound(_)))),
                            Some(stock) => {
                                *stock += n as u64;
                                prop_assert_eq!(result.unwrap().quantity(), *stock);
                            }
                        }
                    }
                }
            }

            prop_assert_eq!(library.len(), model.len());
            for (book, stock) in &model {
                let (title, author) = TITLES[*book];
                prop_assert_eq!(library.get(title, author).map(BookRecord::quantity), Some(*stock));
            }
        }
    }
}
