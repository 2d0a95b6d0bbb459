//! Env parsing and source configuration.

use std::path::PathBuf;

use url::Url;

const TOKEN_A_URL_VAR: &str = "TOKEN_A_CSV_URL";
const TOKEN_B_URL_VAR: &str = "TOKEN_B_CSV_URL";
const TOKEN_A_NAME_VAR: &str = "TOKEN_A_NAME";
const TOKEN_B_NAME_VAR: &str = "TOKEN_B_NAME";
const FIXTURE_VAR: &str = "ATLAS_FIXTURE";

const DEFAULT_TOKEN_A_NAME: &str = "Token A";
const DEFAULT_TOKEN_B_NAME: &str = "Token B";

/// One ledger source: a display label and an optional CSV URL.
/// No URL means the embedded snapshot is used unconditionally.
#[derive(Clone, Debug)]
pub struct TokenSource {
    pub label: String,
    pub csv_url: Option<Url>,
}

/// Configuration for one load cycle: both ledger sources, plus an optional
/// fixture path that replays a recorded `HolderSets` instead of fetching.
#[derive(Clone, Debug, bevy::prelude::Resource)]
pub struct AtlasConfig {
    pub token_a: TokenSource,
    pub token_b: TokenSource,
    pub fixture: Option<PathBuf>,
}

/// Reads the full configuration from the environment. Absent or invalid URLs
/// leave that side without a network source (the loader then degrades to the
/// embedded snapshot); an invalid URL is warned about, never fatal.
pub fn atlas_config() -> AtlasConfig {
    AtlasConfig {
        token_a: TokenSource {
            label: env_label(TOKEN_A_NAME_VAR, DEFAULT_TOKEN_A_NAME),
            csv_url: env_url(TOKEN_A_URL_VAR),
        },
        token_b: TokenSource {
            label: env_label(TOKEN_B_NAME_VAR, DEFAULT_TOKEN_B_NAME),
            csv_url: env_url(TOKEN_B_URL_VAR),
        },
        fixture: std::env::var(FIXTURE_VAR).ok().map(PathBuf::from),
    }
}

fn env_label(var: &str, default: &str) -> String {
    match std::env::var(var) {
        Ok(label) if !label.trim().is_empty() => label,
        _ => default.to_string(),
    }
}

fn env_url(var: &str) -> Option<Url> {
    let raw = std::env::var(var).ok()?;
    match raw.parse::<Url>() {
        Ok(url) => Some(url),
        Err(err) => {
            eprintln!("orrery: invalid URL in {var}: {raw:?} ({err})");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn lock_env() -> std::sync::MutexGuard<'static, ()> {
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap()
    }

    struct EnvGuard {
        snapshot: Vec<(&'static str, Option<String>)>,
    }

    impl EnvGuard {
        fn capture(keys: &[&'static str]) -> Self {
            let snapshot = keys
                .iter()
                .map(|&key| (key, std::env::var(key).ok()))
                .collect();
            for &key in keys {
                std::env::remove_var(key);
            }
            Self { snapshot }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.snapshot {
                match value {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }

    const ENV_KEYS: [&str; 5] = [
        TOKEN_A_URL_VAR,
        TOKEN_B_URL_VAR,
        TOKEN_A_NAME_VAR,
        TOKEN_B_NAME_VAR,
        FIXTURE_VAR,
    ];

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        let config = atlas_config();

        assert_eq!(config.token_a.label, "Token A");
        assert_eq!(config.token_b.label, "Token B");
        assert!(config.token_a.csv_url.is_none());
        assert!(config.token_b.csv_url.is_none());
        assert!(config.fixture.is_none());
    }

    #[test]
    fn urls_and_labels_come_from_the_environment() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var(TOKEN_A_URL_VAR, "http://127.0.0.1:8080/a.csv");
        std::env::set_var(TOKEN_A_NAME_VAR, "Fartcoin");

        let config = atlas_config();

        assert_eq!(config.token_a.label, "Fartcoin");
        assert_eq!(
            config.token_a.csv_url.unwrap().as_str(),
            "http://127.0.0.1:8080/a.csv"
        );
        assert!(config.token_b.csv_url.is_none());
    }

    #[test]
    fn invalid_url_degrades_to_no_source() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var(TOKEN_B_URL_VAR, "not-a-url");

        let config = atlas_config();

        assert!(config.token_b.csv_url.is_none());
    }

    #[test]
    fn fixture_path_is_picked_up() {
        let _lock = lock_env();
        let _guard = EnvGuard::capture(&ENV_KEYS);

        std::env::set_var(FIXTURE_VAR, "fixtures/holders.json");

        let config = atlas_config();

        assert_eq!(
            config.fixture,
            Some(PathBuf::from("fixtures/holders.json"))
        );
    }
}
