use std::fs;
use std::path::{Path, PathBuf};

use mirror_core::DEFAULT_DARK_MODE;
use mirror_logging::{mirror_info, mirror_warn};
use serde_json::{Map, Value};

use crate::persist::{write_atomically, PersistError};

/// Key under which the light/dark flag is stored.
pub const THEME_KEY: &str = "theme";
pub const PREFERENCES_FILENAME: &str = "preferences.json";

/// Durable key-value store for UI preferences, backed by one JSON object file.
///
/// Values are JSON literals keyed by name; unknown keys written by other
/// versions survive a save.
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `{dir}/preferences.json`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(PREFERENCES_FILENAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the dark-mode flag. Missing or malformed data yields the default.
    pub fn load(&self) -> bool {
        let Some(entries) = self.read_entries() else {
            return DEFAULT_DARK_MODE;
        };
        match entries.get(THEME_KEY) {
            Some(Value::Bool(dark_mode)) => *dark_mode,
            Some(other) => {
                mirror_warn!(
                    "Ignoring non-boolean {:?} preference in {:?}: {}",
                    THEME_KEY,
                    self.path,
                    other
                );
                DEFAULT_DARK_MODE
            }
            None => DEFAULT_DARK_MODE,
        }
    }

    /// Writes the dark-mode flag. Returns once the file is on disk.
    pub fn save(&self, dark_mode: bool) -> Result<(), PersistError> {
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(THEME_KEY.to_owned(), Value::Bool(dark_mode));
        let content = serde_json::to_string_pretty(&Value::Object(entries))?;
        write_atomically(&self.path, &content)?;
        mirror_info!("Saved {}={} to {:?}", THEME_KEY, dark_mode, self.path);
        Ok(())
    }

    fn read_entries(&self) -> Option<Map<String, Value>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                mirror_warn!("Failed to read preferences from {:?}: {}", self.path, err);
                return None;
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(entries)) => Some(entries),
            Ok(_) => {
                mirror_warn!("Preferences in {:?} are not a JSON object", self.path);
                None
            }
            Err(err) => {
                mirror_warn!("Failed to parse preferences from {:?}: {}", self.path, err);
                None
            }
        }
    }
}
