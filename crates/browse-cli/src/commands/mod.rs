pub mod list;
pub mod open;
pub mod set_default;

use crate::output;
use browse_core::BrowserId;
use browse_launcher::{Detector, InstalledSet, ProcessEnv};

/// Validate a browser named on the command line.
///
/// Unknown or undetectable names are reported together with the installed
/// browsers, and `None` is returned so the caller can abort the action.
pub fn select_browser<E: ProcessEnv>(
    name: &str,
    installed: &InstalledSet,
    detector: &Detector<'_, E>,
) -> Option<BrowserId> {
    let choice = BrowserId::parse_user(name)
        .ok()
        .filter(|id| installed.contains(*id) || detector.is_installed(id.as_str()));

    tracing::debug!("Browser choice '{}' resolved to {:?}", name, choice);
    if choice.is_none() {
        output::error(&format!("Browser '{name}' is not installed"));
        output::info(&format!("Available browsers: {}", installed.names()));
    }
    choice
}
