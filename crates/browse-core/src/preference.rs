//! Persisted default-browser preference.
//!
//! The file holds a single line `default_browser=<id>`. Reads are best-effort:
//! a missing, unreadable or malformed file is the same as no preference.
//! Writes replace the whole file.

use crate::{BrowserId, Error, Result};
use std::cell::Cell;
use std::fs;
use std::path::{Path, PathBuf};

const KEY_PREFIX: &str = "default_browser=";

/// Storage for the user's chosen default browser
pub trait PreferenceStore {
    /// Stored browser, if any. Never fails.
    fn load(&self) -> Option<BrowserId>;

    /// Overwrite the stored browser
    fn save(&self, id: BrowserId) -> Result<()>;
}

/// Preference kept in a plain-text file, `~/.config/browse/config` by default
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: Option<PathBuf>,
}

impl FilePreferenceStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Store at the per-user default location. Without a home directory
    /// nothing is loaded and saving fails.
    pub fn at_default_location() -> Self {
        Self {
            path: Self::default_path().ok(),
        }
    }

    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(Error::HomeDirNotFound)?;
        Ok(home.join(".config").join("browse").join("config"))
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Option<BrowserId> {
        let Some(path) = &self.path else {
            tracing::debug!("No home directory, skipping preference");
            return None;
        };
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::debug!("No preference read from {}: {}", path.display(), e);
                return None;
            }
        };

        let id = parse_preference(&content);
        tracing::debug!("Loaded preference {:?} from {}", id, path.display());
        id
    }

    fn save(&self, id: BrowserId) -> Result<()> {
        let path = self.path.as_ref().ok_or(Error::HomeDirNotFound)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, format!("{KEY_PREFIX}{id}"))?;
        tracing::debug!("Saved preference {} to {}", id, path.display());
        Ok(())
    }
}

/// First `default_browser=` line wins; the value ends at the next `=`
fn parse_preference(content: &str) -> Option<BrowserId> {
    let line = content.lines().find(|line| line.starts_with(KEY_PREFIX))?;
    let value = line.trim()[KEY_PREFIX.len()..].split('=').next()?;
    value.parse().ok()
}

/// In-memory store, for callers that must not touch the filesystem
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    value: Cell<Option<BrowserId>>,
}

impl MemoryPreferenceStore {
    pub fn new(value: Option<BrowserId>) -> Self {
        Self {
            value: Cell::new(value),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Option<BrowserId> {
        self.value.get()
    }

    fn save(&self, id: BrowserId) -> Result<()> {
        self.value.set(Some(id));
        Ok(())
    }
}
