use crate::output;
use browse_core::BrowserId;
use browse_launcher::InstalledSet;

/// Print installed browsers in detection order, marking the default
pub fn execute(installed: &InstalledSet, default: BrowserId) {
    tracing::debug!("Listing {} browsers, default {}", installed.len(), default);
    output::info("Installed browsers:");
    for browser in installed.iter() {
        let marker = if browser == default { " (default)" } else { "" };
        println!("  - {}{}", browser.display_name(), marker);
    }
}
