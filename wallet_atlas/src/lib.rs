//! Wallet atlas — 3D visualization of token-holder ledgers.
//!
//! Library root: data pipeline, layout generator, SDK builder, and config
//! modules.

mod camera;
pub mod config;
pub mod data;
pub mod layout;
pub mod render;
mod scene;
mod ui;

pub mod prelude;
pub mod sdk;

pub use camera::fly_camera_plugin;
pub use data::fetch::CsvFetcher;
pub use data::loader::{compute_shared, load_holder_sets, resolve_ledger};
pub use data::parse::{parse_ledger, ParsedLedger};
pub use data::{
    init_holder_channel, CollectionKind, HolderChannel, HolderFetcher, HolderSets, LedgerEntry,
    SharedEntry,
};
pub use layout::{generate_layout, AtlasLayout, LayoutSettings, PlacedPoint};
pub use scene::{ingest_holders, setup_scene, AtlasState};
