use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "No supported browsers found. Please install Firefox, Chrome, Chromium, Brave, Opera, Vivaldi, or LibreWolf."
    )]
    NoBrowsersDetected,

    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Core(#[from] browse_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
