use crate::{Album, AlbumId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Application finished starting; kicks off the one album fetch.
    AppStarted,
    /// Engine progress for the album fetch.
    LoadProgress { bytes: u64 },
    /// Engine delivered the album list.
    AlbumsLoaded {
        albums: Vec<Album>,
        fetched_at: String,
    },
    /// Engine could not fetch or decode the album list.
    AlbumsLoadFailed { reason: String },
    /// User picked an album card.
    AlbumSelected(AlbumId),
    /// User clicked an item token.
    ItemClicked(String),
    /// User edited the search box (raw text).
    SearchChanged(String),
    /// UI tick to coalesce rendering.
    Tick,
    /// Leaves state untouched.
    NoOp,
}
