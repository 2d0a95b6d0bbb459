mod channel;
pub mod embedded;
pub mod fetch;
pub mod loader;
mod model;
pub mod parse;

use crossbeam_channel::Receiver;

pub use channel::{init_fixture_channel, init_holder_channel, write_fixture, HolderChannel};
pub use model::{CollectionKind, HolderSets, LedgerEntry, SharedEntry};

use crate::config::AtlasConfig;

/// Interface for holder-set fetchers. One `HolderSets` payload is sent per
/// load cycle; the receiver side treats the collections as read-only.
pub trait HolderFetcher: Send + 'static {
    fn spawn(config: AtlasConfig) -> Receiver<HolderSets>;
}
