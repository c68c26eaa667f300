use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to access preference file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown browser: {0}")]
    UnknownBrowser(String),

    #[error("Could not determine home directory")]
    HomeDirNotFound,
}

pub type Result<T> = std::result::Result<T, Error>;
