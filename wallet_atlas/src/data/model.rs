// Engine-agnostic holder records. HTTP/CSV specifics stay in fetch.rs and
// parse.rs; conversion happens there.

use serde::{Deserialize, Serialize};

/// One row of a token-holder ledger: a wallet address and its holding.
/// Addresses are lower-cased by the loader before storage or comparison.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub address: String,
    pub amount: f64,
}

/// A wallet present in both ledgers, carrying both sourced amounts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SharedEntry {
    pub address: String,
    pub amount_a: f64,
    pub amount_b: f64,
}

/// The loader's result object: one load cycle's three collections.
/// Produced once per cycle and treated as read-only downstream.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HolderSets {
    pub ledger_a: Vec<LedgerEntry>,
    pub ledger_b: Vec<LedgerEntry>,
    pub shared: Vec<SharedEntry>,
}

/// Names one of the three record collections for layout, scene, and UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollectionKind {
    LedgerA,
    LedgerB,
    Shared,
}

// All three cross thread boundaries (fetcher → channel → ECS).
impl HolderSets {
    pub fn is_empty(&self) -> bool {
        self.ledger_a.is_empty() && self.ledger_b.is_empty() && self.shared.is_empty()
    }
}
