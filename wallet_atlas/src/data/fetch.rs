//! CSV ledger fetcher: dedicated thread + reqwest → HolderSets.

use crossbeam_channel::Receiver;
use std::thread;

use crate::config::AtlasConfig;
use crate::data::loader::load_holder_sets;
use crate::data::{HolderFetcher, HolderSets};

/// HTTP CSV fetcher. Spawns a dedicated thread with a current-thread tokio
/// runtime, runs one load cycle, and sends the resulting `HolderSets` on the
/// channel. The loader never fails, so the receiver always gets one payload
/// unless the runtime itself cannot be built.
pub struct CsvFetcher;

impl HolderFetcher for CsvFetcher {
    fn spawn(config: AtlasConfig) -> Receiver<HolderSets> {
        let (tx, rx) = crossbeam_channel::bounded(1);
        thread::spawn(move || {
            let rt = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(err) => {
                    eprintln!("orrery: failed to build tokio runtime: {err}");
                    return;
                }
            };
            let sets = rt.block_on(load_holder_sets(&config));
            if tx.send(sets).is_err() {
                eprintln!("orrery: holder channel closed before load finished");
            }
        });
        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TokenSource;
    use std::time::Duration;

    #[test]
    fn spawn_delivers_one_payload_without_network() {
        let config = AtlasConfig {
            token_a: TokenSource {
                label: "Token A".to_string(),
                csv_url: None,
            },
            token_b: TokenSource {
                label: "Token B".to_string(),
                csv_url: None,
            },
            fixture: None,
        };

        let rx = CsvFetcher::spawn(config);
        let sets = rx
            .recv_timeout(Duration::from_secs(10))
            .expect("expected one holder payload");

        assert!(!sets.is_empty());
        assert_eq!(sets.shared.len(), 5);
    }
}
