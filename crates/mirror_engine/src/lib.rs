//! RepoMirror engine: service transport, preference storage and effect execution.
mod api;
mod engine;
mod persist;
mod preferences;
mod types;
mod wire;

pub use api::{ApiSettings, ReqwestReviewApi, ReviewApi, DEFAULT_API_BASE_URL};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use persist::{ensure_dir, write_atomically, PersistError};
pub use preferences::{PreferenceStore, PREFERENCES_FILENAME, THEME_KEY};
pub use types::{ApiError, EngineEvent, FailureKind};
