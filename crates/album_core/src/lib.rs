//! Album browser core: pure state machine and view-model helpers.
mod album;
mod effect;
mod msg;
mod search;
mod state;
mod update;
mod view_model;

pub use album::{Album, AlbumId};
pub use effect::Effect;
pub use msg::Msg;
pub use search::{matches_query, normalize_query, search_albums};
pub use state::{AppState, LoadState};
pub use update::update;
pub use view_model::{
    AlbumCardView, AppViewModel, ContentView, ItemBreakdown, ItemView, SearchResultView,
};
