mod command;
mod detector;
mod environment;
mod error;
mod launcher;
mod resolver;

#[cfg(test)]
mod testing;

pub use command::{LaunchRequest, Mode, SearchEngine, encode_term, normalize_url};
pub use detector::{Detector, InstalledSet};
pub use environment::{ProcessEnv, SystemEnv};
pub use error::{Error, Result};
pub use launcher::Launcher;
pub use resolver::resolve_default;
