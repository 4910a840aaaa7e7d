/// Service configuration: API credential and local settings.
///
/// The credential comes from the environment (with `.env` support); its
/// absence is a detectable condition surfaced as `service_key: None`, never a
/// crash — the store turns it into a `missing-credential` error before any
/// network call. Optional local settings (state directory, request timeout)
/// come from `aqmon.toml` in the working directory when present.

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable holding the issued AirKorea service key.
pub const SERVICE_KEY_ENV: &str = "AIRKOREA_SERVICE_KEY";

const CONFIG_FILE: &str = "aqmon.toml";
const DEFAULT_STATE_DIR: &str = ".aqmon_state";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Optional settings file contents.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    state_dir: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Resolved runtime configuration.
#[derive(Debug)]
pub struct Config {
    /// `None` when the key is unset or blank.
    pub service_key: Option<String>,
    /// Directory for the persisted preference records.
    pub state_dir: PathBuf,
    /// Deadline applied to every outbound request.
    pub request_timeout: Duration,
}

impl Config {
    /// Loads `.env`, the environment, and `aqmon.toml` if present.
    /// A malformed settings file is reported and ignored rather than fatal.
    pub fn load() -> Config {
        dotenv::dotenv().ok();

        let service_key = normalize_key(env::var(SERVICE_KEY_ENV).ok());

        let file = match fs::read_to_string(CONFIG_FILE) {
            Ok(contents) => match toml::from_str::<ConfigFile>(&contents) {
                Ok(file) => file,
                Err(e) => {
                    eprintln!("Warning: ignoring malformed {}: {}", CONFIG_FILE, e);
                    ConfigFile::default()
                }
            },
            Err(_) => ConfigFile::default(),
        };

        Config::from_parts(service_key, file)
    }

    fn from_parts(service_key: Option<String>, file: ConfigFile) -> Config {
        Config {
            service_key,
            state_dir: PathBuf::from(
                file.state_dir.unwrap_or_else(|| DEFAULT_STATE_DIR.to_string()),
            ),
            request_timeout: Duration::from_secs(
                file.request_timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
        }
    }

    /// The key to hand to the accessor; empty when none is configured, which
    /// the store rejects before any network call.
    pub fn service_key_or_empty(&self) -> &str {
        self.service_key.as_deref().unwrap_or("")
    }
}

/// A blank or whitespace-only key counts as absent.
fn normalize_key(raw: Option<String>) -> Option<String> {
    raw.filter(|k| !k.trim().is_empty())
}
