use std::sync::{mpsc, Arc};
use std::thread;

use engine_logging::{engine_info, engine_warn};
use tokio_util::sync::CancellationToken;

use crate::decode::decode_albums;
use crate::fetch::{ChannelProgressSink, FetchSettings, Fetcher, ProgressSink, ReqwestFetcher};
use crate::{AlbumRecord, EngineEvent, FetchError};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] std::io::Error),
    #[error("failed to spawn engine thread: {0}")]
    Spawn(#[source] std::io::Error),
}

enum EngineCommand {
    FetchAlbums { url: String },
}

/// Handle to the background fetch engine.
///
/// Dropping the handle cancels any in-flight fetch; a cancelled fetch sends
/// no completion event.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
    cancel: CancellationToken,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Result<Self, EngineError> {
        Self::with_fetcher(Arc::new(ReqwestFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let runtime = tokio::runtime::Runtime::new().map_err(EngineError::Runtime)?;

        let worker_cancel = cancel.clone();
        thread::Builder::new()
            .name("album-engine".to_string())
            .spawn(move || {
                while let Ok(command) = cmd_rx.recv() {
                    let fetcher = fetcher.clone();
                    let event_tx = event_tx.clone();
                    let cancel = worker_cancel.clone();
                    runtime.spawn(async move {
                        handle_command(fetcher.as_ref(), command, event_tx, cancel).await;
                    });
                }
            })
            .map_err(EngineError::Spawn)?;

        Ok(Self {
            cmd_tx,
            event_rx,
            cancel,
        })
    }

    pub fn fetch_albums(&self, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::FetchAlbums { url: url.into() });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }
}

impl Drop for EngineHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Fetch and decode the album list in one step.
pub async fn fetch_albums(
    fetcher: &dyn Fetcher,
    url: &str,
    sink: &dyn ProgressSink,
) -> Result<Vec<AlbumRecord>, FetchError> {
    let output = fetcher.fetch(url, sink).await?;
    let meta = &output.metadata;
    engine_info!(
        "Received {} bytes from {} (requested {}, {} redirects, content type {:?})",
        meta.byte_len,
        meta.final_url,
        meta.original_url,
        meta.redirect_count,
        meta.content_type
    );
    Ok(decode_albums(&output.bytes)?)
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
    cancel: CancellationToken,
) {
    match command {
        EngineCommand::FetchAlbums { url } => {
            engine_info!("Fetching albums from {}", url);
            let sink = ChannelProgressSink::new(event_tx.clone());
            let result = tokio::select! {
                _ = cancel.cancelled() => {
                    engine_info!("Album fetch cancelled");
                    return;
                }
                result = fetch_albums(fetcher, &url, &sink) => result,
            };
            match &result {
                Ok(albums) => engine_info!("Fetched {} albums", albums.len()),
                Err(err) => engine_warn!("Album fetch failed: {}", err),
            }
            let _ = event_tx.send(EngineEvent::AlbumsFetched(result));
        }
    }
}
