//! Minimal prelude for SDK consumers.

pub use crate::config::{atlas_config, AtlasConfig, TokenSource};
pub use crate::data::{CollectionKind, HolderFetcher, HolderSets, LedgerEntry, SharedEntry};
pub use crate::layout::{generate_layout, AtlasLayout, LayoutSettings, PlacedPoint, PointSource};
pub use crate::render::{HolderRenderer, SphereCloudRenderer};
pub use crate::sdk::WalletAtlasBuilder;
