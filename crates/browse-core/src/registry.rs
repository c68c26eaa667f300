//! Static table of supported browsers.
//!
//! The registry answers two independent questions:
//! - which canonical id a user-supplied name refers to ([`canonical_name`], [`BrowserId::from_str`])
//! - which executables may launch a given browser ([`BrowserId::entry`])
//!
//! Both are pure lookups with no I/O; probing the host happens in `browse-launcher`.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Canonical identifier of a supported browser
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BrowserId {
    Firefox,
    Chrome,
    Chromium,
    Brave,
    Opera,
    Vivaldi,
    Librewolf,
    Zen,
}

/// Names probed during detection, in order. Aliases are listed where their
/// canonical id would otherwise be probed only once.
pub const PROBE_ORDER: [&str; 10] = [
    "firefox",
    "chrome",
    "chromium",
    "brave",
    "opera",
    "vivaldi",
    "librewolf",
    "google-chrome",
    "zen",
    "brave-browser",
];

/// Tie-break order used when no preference is stored
pub const DEFAULT_PRIORITY: [BrowserId; 7] = [
    BrowserId::Firefox,
    BrowserId::Chromium,
    BrowserId::Chrome,
    BrowserId::Brave,
    BrowserId::Librewolf,
    BrowserId::Opera,
    BrowserId::Vivaldi,
];

const ALIASES: [(&str, &str); 2] = [("google-chrome", "chrome"), ("brave-browser", "brave")];

/// Collapse a known alias onto its canonical name. Anything else is returned as-is.
pub fn canonical_name(name: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, canonical)| *canonical)
        .unwrap_or(name)
}

/// Launch candidates for one browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowserEntry {
    pub id: BrowserId,
    pub primary_command: &'static str,
    /// Tried in order after the primary command; executable names or absolute paths
    pub alternate_commands: &'static [&'static str],
    pub private_flag: Option<&'static str>,
}

impl BrowserEntry {
    /// Every candidate in resolution order, primary first
    pub fn candidates(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.primary_command).chain(self.alternate_commands.iter().copied())
    }
}

const CHROME_ALTERNATES: &[&str] = &[
    "chrome",
    "/usr/bin/google-chrome",
    "/usr/bin/chrome",
    "/usr/bin/google-chrome-stable",
    "google-chrome-stable",
];

static ENTRIES: [BrowserEntry; 8] = [
    BrowserEntry {
        id: BrowserId::Firefox,
        primary_command: "firefox",
        alternate_commands: &[],
        private_flag: Some("--private-window"),
    },
    BrowserEntry {
        id: BrowserId::Chrome,
        primary_command: "google-chrome",
        alternate_commands: CHROME_ALTERNATES,
        private_flag: Some("--incognito"),
    },
    BrowserEntry {
        id: BrowserId::Chromium,
        primary_command: "chromium",
        alternate_commands: &[],
        private_flag: Some("--incognito"),
    },
    BrowserEntry {
        id: BrowserId::Brave,
        primary_command: "brave-browser",
        alternate_commands: &["brave", "/usr/bin/brave-browser", "/usr/bin/brave"],
        private_flag: Some("--incognito"),
    },
    BrowserEntry {
        id: BrowserId::Opera,
        primary_command: "opera",
        alternate_commands: &["opera-browser", "/usr/bin/opera"],
        private_flag: Some("--private"),
    },
    BrowserEntry {
        id: BrowserId::Vivaldi,
        primary_command: "vivaldi",
        alternate_commands: &["vivaldi-stable", "/usr/bin/vivaldi-stable"],
        private_flag: Some("--incognito"),
    },
    BrowserEntry {
        id: BrowserId::Librewolf,
        primary_command: "librewolf",
        alternate_commands: &[],
        private_flag: Some("--private-window"),
    },
    BrowserEntry {
        id: BrowserId::Zen,
        primary_command: "zen-browser",
        alternate_commands: &["zen", "/usr/bin/zen"],
        private_flag: None,
    },
];

impl BrowserId {
    pub const ALL: [BrowserId; 8] = [
        BrowserId::Firefox,
        BrowserId::Chrome,
        BrowserId::Chromium,
        BrowserId::Brave,
        BrowserId::Opera,
        BrowserId::Vivaldi,
        BrowserId::Librewolf,
        BrowserId::Zen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserId::Firefox => "firefox",
            BrowserId::Chrome => "chrome",
            BrowserId::Chromium => "chromium",
            BrowserId::Brave => "brave",
            BrowserId::Opera => "opera",
            BrowserId::Vivaldi => "vivaldi",
            BrowserId::Librewolf => "librewolf",
            BrowserId::Zen => "zen",
        }
    }

    /// Name shown in status messages
    pub fn display_name(&self) -> &'static str {
        match self {
            BrowserId::Firefox => "Firefox",
            BrowserId::Chrome => "Chrome",
            BrowserId::Chromium => "Chromium",
            BrowserId::Brave => "Brave",
            BrowserId::Opera => "Opera",
            BrowserId::Vivaldi => "Vivaldi",
            BrowserId::Librewolf => "Librewolf",
            BrowserId::Zen => "Zen",
        }
    }

    pub fn entry(&self) -> &'static BrowserEntry {
        // ENTRIES is laid out in the same order as ALL
        &ENTRIES[*self as usize]
    }

    /// Parse a user-supplied name: case-insensitive, aliases accepted
    pub fn parse_user(name: &str) -> Result<Self> {
        name.trim().to_ascii_lowercase().parse()
    }
}

impl FromStr for BrowserId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let canonical = canonical_name(s);
        BrowserId::ALL
            .into_iter()
            .find(|id| id.as_str() == canonical)
            .ok_or_else(|| Error::UnknownBrowser(s.to_string()))
    }
}

impl fmt::Display for BrowserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_collapse_to_canonical() {
        assert_eq!(canonical_name("google-chrome"), "chrome");
        assert_eq!(canonical_name("brave-browser"), "brave");
        assert_eq!(canonical_name("chrome"), "chrome");
        assert_eq!(canonical_name("firefox"), "firefox");
    }

    #[test]
    fn test_canonicalization_is_idempotent() {
        for name in PROBE_ORDER.iter().chain(["unknown", ""].iter()) {
            let once = canonical_name(name);
            assert_eq!(canonical_name(once), once);
        }
    }

    #[test]
    fn test_alias_parses_to_same_id() {
        assert_eq!("google-chrome".parse::<BrowserId>().unwrap(), BrowserId::Chrome);
        assert_eq!("brave-browser".parse::<BrowserId>().unwrap(), BrowserId::Brave);
        assert_eq!("chrome".parse::<BrowserId>().unwrap(), BrowserId::Chrome);
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "netscape".parse::<BrowserId>().unwrap_err();
        assert!(err.to_string().contains("netscape"));
    }

    #[test]
    fn test_parse_user_is_case_insensitive() {
        assert_eq!(BrowserId::parse_user("FireFox").unwrap(), BrowserId::Firefox);
        assert_eq!(BrowserId::parse_user(" Google-Chrome ").unwrap(), BrowserId::Chrome);
    }

    #[test]
    fn test_entries_match_ids() {
        for id in BrowserId::ALL {
            assert_eq!(id.entry().id, id);
            assert_eq!(id.as_str().parse::<BrowserId>().unwrap(), id);
        }
    }

    #[test]
    fn test_every_probe_name_is_known() {
        for name in PROBE_ORDER {
            assert!(name.parse::<BrowserId>().is_ok(), "{name} should resolve");
        }
    }

    #[test]
    fn test_candidates_start_with_primary() {
        let candidates: Vec<_> = BrowserId::Chrome.entry().candidates().collect();
        assert_eq!(candidates[0], "google-chrome");
        assert_eq!(candidates[1], "chrome");
        assert_eq!(candidates.len(), 6);
    }

    #[test]
    fn test_private_flags() {
        assert_eq!(BrowserId::Firefox.entry().private_flag, Some("--private-window"));
        assert_eq!(BrowserId::Opera.entry().private_flag, Some("--private"));
        assert_eq!(BrowserId::Zen.entry().private_flag, None);
    }
}
