/// Durable user-preference records.
///
/// Three independent key-value records, one JSON file each under a state
/// directory: the region/station selection, the UI language, and the theme.
/// `load_*` distinguishes "never saved" (`Ok(None)`) from a load failure so
/// hydration can tell the two apart and never acts on defaults prematurely.
///
/// Saves on the fetch path are fire-and-forget: the `*_quiet` variants log
/// and continue, since only scalar preference fields are stored and
/// last-writer-wins is acceptable.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::i18n::Language;
use crate::theme::Theme;

const SELECTION_FILE: &str = "selection.json";
const LANGUAGE_FILE: &str = "language.json";
const THEME_FILE: &str = "theme.json";

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// The persisted region/station selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSelection {
    /// API region name, e.g. "서울".
    pub region: String,
    /// Remembered station name, if the user (or a fetch) picked one.
    pub station: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct LanguageRecord {
    language: String,
}

#[derive(Serialize, Deserialize)]
struct ThemeRecord {
    theme: String,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum PersistError {
    Io(std::io::Error),
    Format(serde_json::Error),
}

impl std::fmt::Display for PersistError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistError::Io(e) => write!(f, "State file I/O error: {}", e),
            PersistError::Format(e) => write!(f, "State file format error: {}", e),
        }
    }
}

impl std::error::Error for PersistError {}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// File-backed store for the three preference records.
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    /// Opens (creating if needed) the state directory.
    pub fn open(dir: impl Into<PathBuf>) -> Result<StateStore, PersistError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(PersistError::Io)?;
        Ok(StateStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    // --- selection ---------------------------------------------------------

    pub fn load_selection(&self) -> Result<Option<SavedSelection>, PersistError> {
        self.read_record(SELECTION_FILE)
    }

    pub fn save_selection(&self, selection: &SavedSelection) -> Result<(), PersistError> {
        self.write_record(SELECTION_FILE, selection)
    }

    /// Best-effort save used on the fetch path; failures are logged, never
    /// propagated.
    pub fn save_selection_quiet(&self, selection: &SavedSelection) {
        if let Err(e) = self.save_selection(selection) {
            eprintln!("Warning: failed to save selection: {}", e);
        }
    }

    // --- language ----------------------------------------------------------

    /// Loads the saved language. Unrecognized stored codes fall back to the
    /// default language rather than erroring.
    pub fn load_language(&self) -> Result<Option<Language>, PersistError> {
        let record: Option<LanguageRecord> = self.read_record(LANGUAGE_FILE)?;
        Ok(record.map(|r| Language::from_code(&r.language).unwrap_or_default()))
    }

    pub fn save_language(&self, language: Language) -> Result<(), PersistError> {
        self.write_record(
            LANGUAGE_FILE,
            &LanguageRecord { language: language.code().to_string() },
        )
    }

    // --- theme --------------------------------------------------------------

    pub fn load_theme(&self) -> Result<Option<Theme>, PersistError> {
        let record: Option<ThemeRecord> = self.read_record(THEME_FILE)?;
        Ok(record.map(|r| Theme::from_code(&r.theme).unwrap_or_default()))
    }

    pub fn save_theme(&self, theme: Theme) -> Result<(), PersistError> {
        self.write_record(THEME_FILE, &ThemeRecord { theme: theme.code().to_string() })
    }

    // --- plumbing -----------------------------------------------------------

    fn read_record<T: serde::de::DeserializeOwned>(
        &self,
        file: &str,
    ) -> Result<Option<T>, PersistError> {
        let path = self.dir.join(file);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path).map_err(PersistError::Io)?;
        let record = serde_json::from_str(&contents).map_err(PersistError::Format)?;
        Ok(Some(record))
    }

    fn write_record<T: Serialize>(&self, file: &str, record: &T) -> Result<(), PersistError> {
        let json = serde_json::to_string_pretty(record).map_err(PersistError::Format)?;
        fs::write(self.dir.join(file), json).map_err(PersistError::Io)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    fn temp_store(tag: &str) -> StateStore {
        let dir = std::env::temp_dir().join(format!(
            "aqmon_persist_{}_{}_{}",
            tag,
            std::process::id(),
            DIR_SEQ.fetch_add(1, Ordering::SeqCst)
        ));
        let _ = fs::remove_dir_all(&dir);
        StateStore::open(dir).expect("temp state dir should open")
    }

    #[test]
    fn test_never_saved_loads_as_none() {
        let store = temp_store("fresh");
        assert!(store.load_selection().unwrap().is_none());
        assert!(store.load_language().unwrap().is_none());
        assert!(store.load_theme().unwrap().is_none());
    }

    #[test]
    fn test_selection_round_trip() {
        let store = temp_store("selection");
        let selection = SavedSelection {
            region: "서울".to_string(),
            station: Some("중구".to_string()),
        };
        store.save_selection(&selection).expect("save should succeed");
        assert_eq!(store.load_selection().unwrap(), Some(selection));
    }

    #[test]
    fn test_saved_empty_station_is_distinct_from_never_saved() {
        let store = temp_store("empty_station");
        let selection = SavedSelection { region: "부산".to_string(), station: None };
        store.save_selection(&selection).unwrap();
        // Loaded-but-empty must not look like "not yet loaded".
        let loaded = store.load_selection().unwrap();
        assert_eq!(loaded, Some(selection));
    }

    #[test]
    fn test_language_and_theme_round_trip() {
        let store = temp_store("prefs");
        store.save_language(Language::Ja).unwrap();
        store.save_theme(Theme::Dark).unwrap();
        assert_eq!(store.load_language().unwrap(), Some(Language::Ja));
        assert_eq!(store.load_theme().unwrap(), Some(Theme::Dark));
    }

    #[test]
    fn test_unknown_stored_language_falls_back_to_default() {
        let store = temp_store("bad_lang");
        fs::write(
            store.dir().join("language.json"),
            r#"{ "language": "klingon" }"#,
        )
        .unwrap();
        assert_eq!(store.load_language().unwrap(), Some(Language::Ko));
    }

    #[test]
    fn test_corrupt_record_is_a_format_error_not_a_panic() {
        let store = temp_store("corrupt");
        fs::write(store.dir().join("selection.json"), "{ not json").unwrap();
        match store.load_selection() {
            Err(PersistError::Format(_)) => {}
            other => panic!("corrupt file should be a Format error, got {:?}", other),
        }
    }

    #[test]
    fn test_last_writer_wins() {
        let store = temp_store("lww");
        store
            .save_selection(&SavedSelection { region: "서울".to_string(), station: None })
            .unwrap();
        let newer = SavedSelection {
            region: "제주".to_string(),
            station: Some("연동".to_string()),
        };
        store.save_selection(&newer).unwrap();
        assert_eq!(store.load_selection().unwrap(), Some(newer));
    }
}
