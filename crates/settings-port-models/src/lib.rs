pub mod auth;
pub mod bookmarks;
pub mod media;
pub mod progress;
pub mod quality;
pub mod snapshot;
pub mod subtitles;

pub use auth::{Account, AuthSettings, Profile};
pub use bookmarks::{Bookmark, BookmarkSettings};
pub use media::MediaKind;
pub use progress::{Episode, MediaProgress, PlaybackProgress, ProgressSettings, Season};
pub use quality::{QualityPreference, QualitySettings, QualityTier};
pub use snapshot::{LanguageSettings, PreferenceSettings, Snapshot, ThemeSettings, VolumeSettings};
pub use subtitles::{SubtitleSettings, SubtitleStyling};
