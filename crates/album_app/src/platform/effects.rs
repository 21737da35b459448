use album_core::{Album, Effect, Msg};
use album_engine::{AlbumRecord, EngineEvent, EngineHandle};
use chrono::Local;
use engine_logging::{engine_info, engine_warn};

/// Bridges core effects to the engine and engine events back to messages.
pub struct EffectRunner {
    engine: EngineHandle,
    endpoint: String,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, endpoint: impl Into<String>) -> Self {
        Self {
            engine,
            endpoint: endpoint.into(),
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchAlbums => {
                    engine_info!("FetchAlbums endpoint={}", self.endpoint);
                    self.engine.fetch_albums(self.endpoint.as_str());
                }
            }
        }
    }

    /// Messages for every engine event received since the last call.
    pub fn drain_events(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            msgs.push(map_event(event, || Local::now().format("%H:%M:%S").to_string()));
        }
        msgs
    }
}

fn map_event(event: EngineEvent, now: impl FnOnce() -> String) -> Msg {
    match event {
        EngineEvent::Progress { bytes } => Msg::LoadProgress { bytes },
        EngineEvent::AlbumsFetched(Ok(records)) => Msg::AlbumsLoaded {
            albums: records.into_iter().map(map_record).collect(),
            fetched_at: now(),
        },
        EngineEvent::AlbumsFetched(Err(err)) => {
            engine_warn!("Album load failed: {}", err);
            Msg::AlbumsLoadFailed {
                reason: err.to_string(),
            }
        }
    }
}

fn map_record(record: AlbumRecord) -> Album {
    Album::new(record.id, record.user_id, record.title)
}
