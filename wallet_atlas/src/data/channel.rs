use std::path::Path;

use crossbeam_channel::Receiver;

use crate::config::AtlasConfig;
use crate::data::fetch::CsvFetcher;
use crate::data::{HolderFetcher, HolderSets};

/// Bevy resource holding the channel from the fetcher thread.
/// Systems drain this in ingest_holders.
#[derive(bevy::prelude::Resource)]
pub struct HolderChannel(pub Receiver<HolderSets>);

/// Create a holder channel for the given configuration: a fixture replay
/// channel when a fixture path is configured, otherwise a live CSV fetcher.
pub fn init_holder_channel(config: AtlasConfig) -> HolderChannel {
    if let Some(path) = config.fixture.clone() {
        return init_fixture_channel(&path);
    }
    HolderChannel(CsvFetcher::spawn(config))
}

/// Serialize one load cycle's collections to a fixture file as JSON.
/// Developer tooling: failures here panic rather than degrade.
pub fn write_fixture(path: &Path, sets: &HolderSets) {
    let json = serde_json::to_string_pretty(sets).expect("failed to serialize holder sets");
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    std::fs::write(path, json)
        .unwrap_or_else(|e| panic!("failed to write fixture to {}: {e}", path.display()));
    eprintln!(
        "orrery: recorded {} + {} holders ({} shared) to {}",
        sets.ledger_a.len(),
        sets.ledger_b.len(),
        sets.shared.len(),
        path.display()
    );
}

/// Create a holder channel that replays a pre-recorded `HolderSets` from a
/// JSON fixture file, bypassing the network entirely.
pub fn init_fixture_channel(path: &Path) -> HolderChannel {
    let json = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
    let sets: HolderSets = serde_json::from_str(&json)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", path.display()));

    let (tx, rx) = crossbeam_channel::bounded(1);
    std::thread::spawn(move || {
        let _ = tx.send(sets);
    });

    HolderChannel(rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LedgerEntry;
    use std::time::Duration;

    #[test]
    fn fixture_round_trips_through_the_channel() {
        let sets = HolderSets {
            ledger_a: vec![LedgerEntry {
                address: "w1".to_string(),
                amount: 100.0,
            }],
            ledger_b: Vec::new(),
            shared: Vec::new(),
        };

        let dir = std::env::temp_dir().join("wallet_atlas_fixture_test");
        let path = dir.join("holders.json");
        write_fixture(&path, &sets);

        let channel = init_fixture_channel(&path);
        let replayed = channel
            .0
            .recv_timeout(Duration::from_secs(5))
            .expect("fixture payload");

        assert_eq!(replayed.ledger_a, sets.ledger_a);
        std::fs::remove_dir_all(&dir).ok();
    }
}
