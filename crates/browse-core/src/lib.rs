pub mod error;
pub mod preference;
pub mod registry;

pub use error::{Error, Result};
pub use preference::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use registry::{BrowserEntry, BrowserId, canonical_name};
