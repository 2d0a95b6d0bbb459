//! Wallet ledger loader: fetch both sources, fall back, normalize, intersect.
//!
//! Nothing here fails hard. A dead source degrades to the embedded snapshot,
//! a degenerate parse degrades to the minimal dataset, and the caller always
//! gets three usable collections.

use std::collections::HashMap;
use std::time::Duration;

use url::Url;

use crate::config::AtlasConfig;
use crate::data::embedded;
use crate::data::parse::parse_ledger;
use crate::data::{HolderSets, LedgerEntry, SharedEntry};

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetch one ledger text over HTTP. Any failure (no URL configured, transport
/// error, non-success status, unreadable body) yields `None` and is logged.
async fn fetch_csv(client: &reqwest::Client, label: &str, url: Option<&Url>) -> Option<String> {
    let url = url?;
    let response = match client.get(url.as_str()).send().await {
        Ok(response) => response,
        Err(err) => {
            eprintln!("orrery: failed to fetch {label} ledger from {url}: {err}");
            return None;
        }
    };
    let response = match response.error_for_status() {
        Ok(response) => response,
        Err(err) => {
            eprintln!("orrery: {label} ledger source rejected the request: {err}");
            return None;
        }
    };
    match response.text().await {
        Ok(text) => {
            eprintln!("orrery: fetched {} bytes of {label} ledger data", text.len());
            Some(text)
        }
        Err(err) => {
            eprintln!("orrery: failed to read {label} ledger body: {err}");
            None
        }
    }
}

/// Resolve one ledger: fetched text if non-empty, else the embedded snapshot;
/// parse, lower-case addresses, and substitute the minimal dataset if nothing
/// survived. Each ledger resolves independently of the other.
pub fn resolve_ledger(
    fetched: Option<String>,
    embedded_csv: &str,
    minimal: fn() -> Vec<LedgerEntry>,
) -> Vec<LedgerEntry> {
    let text = match fetched {
        Some(text) if !text.trim().is_empty() => text,
        _ => embedded_csv.to_string(),
    };

    let parsed = parse_ledger(&text);
    if parsed.skipped_rows > 0 {
        eprintln!("orrery: skipped {} malformed ledger rows", parsed.skipped_rows);
    }

    let mut entries = parsed.entries;
    for entry in &mut entries {
        entry.address = entry.address.to_lowercase();
    }

    if entries.is_empty() {
        return minimal();
    }
    entries
}

/// Intersect the two ledgers. The lookup keeps the last-seen amount when an
/// address repeats within ledger A; result order follows ledger B.
pub fn compute_shared(ledger_a: &[LedgerEntry], ledger_b: &[LedgerEntry]) -> Vec<SharedEntry> {
    let mut amounts_a: HashMap<&str, f64> = HashMap::with_capacity(ledger_a.len());
    for entry in ledger_a {
        amounts_a.insert(entry.address.as_str(), entry.amount);
    }

    ledger_b
        .iter()
        .filter_map(|entry| {
            amounts_a.get(entry.address.as_str()).map(|&amount_a| SharedEntry {
                address: entry.address.clone(),
                amount_a,
                amount_b: entry.amount,
            })
        })
        .collect()
}

/// One load cycle: both ledger fetches issued concurrently, resolved
/// independently, then joined. Always returns three collections.
pub async fn load_holder_sets(config: &AtlasConfig) -> HolderSets {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .unwrap_or_default();

    let (text_a, text_b) = tokio::join!(
        fetch_csv(&client, &config.token_a.label, config.token_a.csv_url.as_ref()),
        fetch_csv(&client, &config.token_b.label, config.token_b.csv_url.as_ref()),
    );

    let ledger_a = resolve_ledger(text_a, embedded::LEDGER_A, embedded::minimal_ledger_a);
    let ledger_b = resolve_ledger(text_b, embedded::LEDGER_B, embedded::minimal_ledger_b);
    let shared = compute_shared(&ledger_a, &ledger_b);

    eprintln!(
        "orrery: {} {} holders, {} {} holders, {} shared",
        ledger_a.len(),
        config.token_a.label,
        ledger_b.len(),
        config.token_b.label,
        shared.len()
    );

    HolderSets {
        ledger_a,
        ledger_b,
        shared,
    }
}
