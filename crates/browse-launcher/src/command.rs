use crate::{Detector, ProcessEnv};
use browse_core::BrowserId;

/// Search engines with known query templates. Only Google is reachable from the CLI.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum SearchEngine {
    #[default]
    Google,
    DuckDuckGo,
    Bing,
}

impl SearchEngine {
    pub fn template(&self) -> &'static str {
        match self {
            SearchEngine::Google => "https://www.google.com/search?q={}",
            SearchEngine::DuckDuckGo => "https://duckduckgo.com/?q={}",
            SearchEngine::Bing => "https://www.bing.com/search?q={}",
        }
    }

    pub fn query_url(&self, term: &str) -> String {
        self.template().replace("{}", &encode_term(term))
    }
}

const YOUTUBE_TEMPLATE: &str = "https://www.youtube.com/results?search_query={}";

/// What the browser should open
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Mode {
    Plain,
    OpenUrl(String),
    Search(String),
    YoutubeSearch(String),
}

/// A single launch, built from the command line and consumed by [`LaunchRequest::argv`]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LaunchRequest {
    pub browser: BrowserId,
    pub mode: Mode,
    pub private: bool,
}

impl LaunchRequest {
    pub fn new(browser: BrowserId, mode: Mode) -> Self {
        Self {
            browser,
            mode,
            private: false,
        }
    }

    /// Open in a private window, for browsers that have a flag for it
    pub fn private(mut self, private: bool) -> Self {
        self.private = private;
        self
    }

    /// Target handed to the browser, if any
    pub fn target(&self) -> Option<String> {
        match &self.mode {
            Mode::Plain => None,
            Mode::OpenUrl(url) => Some(normalize_url(url)),
            Mode::Search(term) => Some(SearchEngine::Google.query_url(term)),
            Mode::YoutubeSearch(term) => Some(YOUTUBE_TEMPLATE.replace("{}", &encode_term(term))),
        }
    }

    /// Full command line. The executable is the first candidate the detector
    /// resolves, falling back to the canonical id.
    pub fn argv<E: ProcessEnv>(&self, detector: &Detector<'_, E>) -> Vec<String> {
        let executable = detector
            .resolve_executable(self.browser)
            .unwrap_or(self.browser.as_str());

        let mut argv = vec![executable.to_string()];
        if self.private {
            if let Some(flag) = self.browser.entry().private_flag {
                argv.push(flag.to_string());
            }
        }
        argv.extend(self.target());

        tracing::debug!("Built command: {:?}", argv);
        argv
    }

    /// Status line printed before launching
    pub fn describe(&self) -> String {
        let name = self.browser.display_name();
        match &self.mode {
            Mode::Plain => format!("Starting {name}"),
            Mode::OpenUrl(url) => format!("Opening {} with {name}", normalize_url(url)),
            Mode::Search(term) => format!("Searching for '{term}' with {name}"),
            Mode::YoutubeSearch(term) => format!("Opening YouTube search for '{term}' with {name}"),
        }
    }
}

/// Prefix `https://` unless the url already names http or https
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

/// Spaces become `+`; nothing else is escaped
pub fn encode_term(term: &str) -> String {
    term.replace(' ', "+")
}
