//! Concurrent append-only trade store.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use super::trade::Trade;

type Book = Arc<RwLock<Vec<Trade>>>;

/// Symbol → trade-sequence mapping, safe for many concurrent writers and
/// readers.
///
/// The outer lock guards only the map itself; each symbol's trades live
/// behind their own lock, so appends to different symbols never contend.
/// First insert for a symbol goes through `entry().or_default()` under the
/// write lock, so exactly one book is ever created per symbol even when
/// several callers race on a brand-new ticker.
#[derive(Debug, Default)]
pub struct TradeLedger {
    books: RwLock<HashMap<String, Book>>,
}

impl TradeLedger {
    pub fn new() -> Self {
        TradeLedger::default()
    }

    /// Append a trade to its symbol's sequence, creating the sequence on
    /// first use. Never fails; the catalog is not consulted here.
    pub fn record(&self, trade: Trade) {
        let book = {
            let books = self.books.read();
            books.get(&trade.symbol).cloned()
        };
        let book = match book {
            Some(book) => book,
            None => {
                let mut books = self.books.write();
                Arc::clone(books.entry(trade.symbol.clone()).or_default())
            }
        };
        book.write().push(trade);
    }

    /// Snapshot of all trades recorded for `symbol`, in insertion order.
    /// Copy-on-read: the returned Vec is isolated from concurrent appends.
    pub fn trades_for(&self, symbol: &str) -> Vec<Trade> {
        self.books
            .read()
            .get(symbol)
            .map(|book| book.read().clone())
            .unwrap_or_default()
    }

    /// Every symbol that has at least one recorded trade.
    pub fn symbols(&self) -> Vec<String> {
        self.books.read().keys().cloned().collect()
    }
}
