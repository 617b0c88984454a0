//! Settings persistence for llmmar.
//!
//! Four scalar preferences are kept in a per-app key-value store, each under
//! its own key. Loading tolerates missing keys; saving writes the keys one
//! by one with no transaction across them.

mod error;
pub mod paths;
mod settings;
mod store;

pub use error::SettingsError;
pub use settings::{
    Settings, SettingsStore, DARK_MODE_KEY, IP_ADDRESS_KEY, MODEL_NAME_KEY, VERBOSE_KEY,
};
pub use store::{FileStore, KeyValueStore, MemoryStore};
