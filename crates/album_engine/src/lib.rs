//! Album engine: data-source IO and effect execution.
mod decode;
mod engine;
mod fetch;
mod types;

pub use decode::{decode_albums, AlbumRecord, DecodeError};
pub use engine::{fetch_albums, EngineError, EngineHandle};
pub use fetch::{ChannelProgressSink, FetchSettings, Fetcher, ProgressSink, ReqwestFetcher};
pub use types::{EngineEvent, FailureKind, FetchError, FetchMetadata, FetchOutput};
