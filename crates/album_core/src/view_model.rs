use std::collections::HashSet;

use crate::{Album, AlbumId, LoadState};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub load: LoadState,
    pub search_query: String,
    pub cards: Vec<AlbumCardView>,
    pub content: ContentView,
    /// Distinct item strings seen this session.
    pub seen_total: usize,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumCardView {
    pub album_id: AlbumId,
    pub user_id: u64,
    pub unseen_count: usize,
    pub selected: bool,
}

/// Two view modes, switched solely by whether an album is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentView {
    Detail(ItemBreakdown),
    SearchResults(Vec<SearchResultView>),
}

impl Default for ContentView {
    fn default() -> Self {
        ContentView::SearchResults(Vec::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultView {
    pub album_id: AlbumId,
    pub user_id: u64,
    pub items: Vec<ItemView>,
}

impl SearchResultView {
    pub(crate) fn for_album(album: &Album, seen: &HashSet<String>) -> Self {
        Self {
            album_id: album.id,
            user_id: album.user_id,
            items: item_views(album, seen),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub text: String,
    pub seen: bool,
}

/// Per-album item list with seen flags and aggregate counts.
///
/// Counts are taken over the raw item list, so a seen word that occurs twice
/// in a title contributes two to `seen_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBreakdown {
    pub album_id: AlbumId,
    pub items: Vec<ItemView>,
    pub total_items: usize,
    pub seen_count: usize,
    pub unseen_count: usize,
}

impl ItemBreakdown {
    pub(crate) fn for_album(album: &Album, seen: &HashSet<String>) -> Self {
        let items = item_views(album, seen);
        let total_items = items.len();
        let seen_count = items.iter().filter(|item| item.seen).count();
        Self {
            album_id: album.id,
            items,
            total_items,
            seen_count,
            unseen_count: total_items - seen_count,
        }
    }

    pub(crate) fn empty(album_id: AlbumId) -> Self {
        Self {
            album_id,
            items: Vec::new(),
            total_items: 0,
            seen_count: 0,
            unseen_count: 0,
        }
    }
}

fn item_views(album: &Album, seen: &HashSet<String>) -> Vec<ItemView> {
    album
        .items()
        .map(|item| ItemView {
            text: item.to_owned(),
            seen: seen.contains(item),
        })
        .collect()
}
