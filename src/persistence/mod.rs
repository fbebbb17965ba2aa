pub mod files;
pub mod prefs;
pub mod store;

pub use files::{
    atomic_write, defaults_file, ensure_data_dir, init_local_data_dir, LOG_FILE_NAME,
};
pub use prefs::system_locale;
pub use store::{JsonFileStore, KeyValueStore};
