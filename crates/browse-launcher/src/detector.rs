use crate::{Error, ProcessEnv, Result};
use browse_core::BrowserId;
use browse_core::registry::PROBE_ORDER;
use std::path::Path;

/// Browsers found on the host, deduplicated, in probe order. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledSet {
    browsers: Vec<BrowserId>,
}

impl InstalledSet {
    /// Returns `None` for an empty list
    pub fn new(browsers: Vec<BrowserId>) -> Option<Self> {
        if browsers.is_empty() {
            None
        } else {
            Some(Self { browsers })
        }
    }

    pub fn contains(&self, id: BrowserId) -> bool {
        self.browsers.contains(&id)
    }

    /// First detected browser
    pub fn first(&self) -> BrowserId {
        self.browsers[0]
    }

    pub fn iter(&self) -> impl Iterator<Item = BrowserId> + '_ {
        self.browsers.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.browsers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.browsers.is_empty()
    }

    /// Comma separated canonical ids, for "available browsers" messages
    pub fn names(&self) -> String {
        self.browsers
            .iter()
            .map(BrowserId::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Probes registry candidates against a [`ProcessEnv`]
pub struct Detector<'e, E: ProcessEnv> {
    env: &'e E,
}

impl<'e, E: ProcessEnv> Detector<'e, E> {
    pub fn new(env: &'e E) -> Self {
        Self { env }
    }

    /// Whether any candidate for `name` (canonical id or alias) can be launched
    pub fn is_installed(&self, name: &str) -> bool {
        match name.parse::<BrowserId>() {
            Ok(id) => self.resolve_executable(id).is_some(),
            Err(_) => false,
        }
    }

    /// First candidate that resolves: the primary command via the search path,
    /// then each alternate via the search path or as an executable file
    pub fn resolve_executable(&self, id: BrowserId) -> Option<&'static str> {
        let entry = id.entry();

        if self.env.on_search_path(entry.primary_command) {
            tracing::debug!("{}: found {} on PATH", id, entry.primary_command);
            return Some(entry.primary_command);
        }

        for candidate in entry.alternate_commands.iter().copied() {
            if self.env.on_search_path(candidate)
                || self.env.is_executable_file(Path::new(candidate))
            {
                tracing::debug!("{}: found alternate {}", id, candidate);
                return Some(candidate);
            }
        }

        tracing::debug!("{}: no candidate found", id);
        None
    }

    /// Probe every known browser once
    pub fn detect_all(&self) -> Result<InstalledSet> {
        let mut browsers = Vec::new();

        for name in PROBE_ORDER {
            let Ok(id) = name.parse::<BrowserId>() else {
                continue;
            };
            if browsers.contains(&id) {
                continue;
            }
            if self.is_installed(name) {
                browsers.push(id);
            }
        }

        tracing::debug!("Detected browsers: {:?}", browsers);
        InstalledSet::new(browsers).ok_or(Error::NoBrowsersDetected)
    }
}
