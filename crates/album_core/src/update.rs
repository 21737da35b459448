use engine_logging::{engine_debug, engine_warn};

use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::AppStarted => {
            if state.begin_loading() {
                vec![Effect::FetchAlbums]
            } else {
                engine_debug!("AppStarted ignored; load state {:?}", state.load_state());
                Vec::new()
            }
        }
        Msg::LoadProgress { bytes } => {
            state.apply_progress(bytes);
            Vec::new()
        }
        Msg::AlbumsLoaded { albums, fetched_at } => {
            let count = albums.len();
            if !state.finish_loading(albums, fetched_at) {
                // The list is loaded once per session; later deliveries are stale.
                engine_warn!(
                    "Dropping delivery of {} albums; load state {:?}",
                    count,
                    state.load_state()
                );
            }
            Vec::new()
        }
        Msg::AlbumsLoadFailed { reason } => {
            if !state.fail_loading(reason) {
                engine_debug!("Load failure ignored; load state {:?}", state.load_state());
            }
            Vec::new()
        }
        Msg::AlbumSelected(album_id) => {
            state.select_album(album_id);
            Vec::new()
        }
        Msg::ItemClicked(item) => {
            state.mark_seen(item);
            Vec::new()
        }
        Msg::SearchChanged(raw) => {
            state.set_search_query(&raw);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
