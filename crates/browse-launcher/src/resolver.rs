use crate::{Detector, InstalledSet, ProcessEnv};
use browse_core::registry::DEFAULT_PRIORITY;
use browse_core::{BrowserId, PreferenceStore};

/// Pick the browser used when none is named on the command line.
///
/// A stored preference wins while it is still detectable. Otherwise the first
/// installed browser in [`DEFAULT_PRIORITY`], and failing that the first detected.
pub fn resolve_default<E: ProcessEnv>(
    installed: &InstalledSet,
    store: &dyn PreferenceStore,
    detector: &Detector<'_, E>,
) -> BrowserId {
    if let Some(saved) = store.load() {
        if detector.is_installed(saved.as_str()) {
            tracing::debug!("Using saved default browser {}", saved);
            return saved;
        }
        tracing::debug!("Saved default browser {} is not installed, ignoring", saved);
    }

    let chosen = DEFAULT_PRIORITY
        .into_iter()
        .find(|id| installed.contains(*id))
        .unwrap_or_else(|| installed.first());
    tracing::debug!("Default browser resolved to {}", chosen);
    chosen
}
