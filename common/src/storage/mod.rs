mod key_value_store;
mod profile_store;

pub use key_value_store::{KeyValueStore, MemoryStore, YamlFileStore};
pub use profile_store::{BEST_SCORE_KEY, DEFAULT_THEME, ProfileStore, THEME_KEY};
