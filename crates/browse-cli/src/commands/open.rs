use crate::output;
use browse_launcher::{Detector, Error, LaunchRequest, Launcher, ProcessEnv};

/// Build and spawn the browser command. Returns whether the launch succeeded;
/// failures are reported, never propagated.
pub fn execute<E: ProcessEnv>(
    request: &LaunchRequest,
    detector: &Detector<'_, E>,
    launcher: &Launcher<'_, E>,
) -> bool {
    tracing::debug!("Opening {} in {:?} mode", request.browser, request.mode);
    let argv = request.argv(detector);
    output::info(&request.describe());

    match launcher.launch(&argv) {
        Ok(()) => {
            output::success("Browser launched successfully!");
            true
        }
        Err(Error::Launch { source, .. }) => {
            output::error(&format!("Failed to launch {}: {}", request.browser, source));
            false
        }
        Err(e) => {
            output::error(&format!("Failed to launch {}: {}", request.browser, e));
            false
        }
    }
}
