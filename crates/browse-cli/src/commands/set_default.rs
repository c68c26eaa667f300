use super::select_browser;
use crate::output;
use anyhow::{Context, Result};
use browse_core::PreferenceStore;
use browse_launcher::{Detector, InstalledSet, ProcessEnv};

/// Persist `name` as the default browser if it is installed.
///
/// An unknown browser is reported and ignored; a failed write is an error.
pub fn execute<E: ProcessEnv>(
    name: &str,
    installed: &InstalledSet,
    detector: &Detector<'_, E>,
    store: &dyn PreferenceStore,
) -> Result<()> {
    let Some(browser) = select_browser(name, installed, detector) else {
        return Ok(());
    };

    tracing::debug!("Saving {} as default browser", browser);
    store
        .save(browser)
        .with_context(|| format!("Failed to set default browser to {browser}"))?;

    output::success(&format!("Default browser set to {}", browser.display_name()));
    Ok(())
}
