pub(crate) mod clouds;
pub(crate) mod materials;
pub(crate) mod starfield;

pub use clouds::{
    ingest_holders, reload_system, setup_scene, AtlasState, CoreSphere, HolderPoint,
};
pub use starfield::starfield_plugin;
