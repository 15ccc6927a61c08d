pub mod memory;
pub mod state;
pub mod traits;

pub use memory::MemoryStores;
pub use state::StateFile;
pub use traits::{
    AuthStore, BookmarkStore, LanguageStore, PreferencesStore, ProgressStore, QualityStore,
    SettingsStores, SubtitleStore, ThemeStore, VolumeStore,
};
