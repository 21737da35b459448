use std::collections::HashSet;

use crate::search::{normalize_query, search_albums};
use crate::view_model::{AlbumCardView, AppViewModel, ContentView, ItemBreakdown, SearchResultView};
use crate::{Album, AlbumId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    Loading {
        bytes: u64,
    },
    Loaded {
        count: usize,
        fetched_at: String,
    },
    Failed {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    albums: Vec<Album>,
    selected_album: Option<AlbumId>,
    /// Grows for the whole session; items are never removed.
    seen_items: HashSet<String>,
    search_query: String,
    load: LoadState,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn selected_album(&self) -> Option<AlbumId> {
        self.selected_album
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn is_seen(&self, item: &str) -> bool {
        self.seen_items.contains(item)
    }

    pub fn seen_item_count(&self) -> usize {
        self.seen_items.len()
    }

    /// Albums matching the current query, in album-list order. Always derived,
    /// never cached.
    pub fn search_results(&self) -> Vec<&Album> {
        search_albums(&self.albums, &self.search_query)
    }

    /// Item breakdown for `album_id`; an unknown id yields an empty breakdown.
    pub fn item_breakdown(&self, album_id: AlbumId) -> ItemBreakdown {
        match self.find_album(album_id) {
            Some(album) => ItemBreakdown::for_album(album, &self.seen_items),
            None => ItemBreakdown::empty(album_id),
        }
    }

    pub fn view(&self) -> AppViewModel {
        let cards = self
            .albums
            .iter()
            .map(|album| AlbumCardView {
                album_id: album.id,
                user_id: album.user_id,
                unseen_count: ItemBreakdown::for_album(album, &self.seen_items).unseen_count,
                selected: self.selected_album == Some(album.id),
            })
            .collect();

        let content = match self.selected_album {
            Some(album_id) => ContentView::Detail(self.item_breakdown(album_id)),
            None => ContentView::SearchResults(
                self.search_results()
                    .into_iter()
                    .map(|album| SearchResultView::for_album(album, &self.seen_items))
                    .collect(),
            ),
        };

        AppViewModel {
            load: self.load.clone(),
            search_query: self.search_query.clone(),
            cards,
            content,
            seen_total: self.seen_items.len(),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn find_album(&self, album_id: AlbumId) -> Option<&Album> {
        self.albums.iter().find(|album| album.id == album_id)
    }

    pub(crate) fn begin_loading(&mut self) -> bool {
        if self.load != LoadState::Idle {
            return false;
        }
        self.load = LoadState::Loading { bytes: 0 };
        self.mark_dirty();
        true
    }

    pub(crate) fn apply_progress(&mut self, bytes: u64) -> bool {
        let LoadState::Loading { bytes: current } = &mut self.load else {
            return false;
        };
        if *current == bytes {
            return false;
        }
        *current = bytes;
        self.mark_dirty();
        true
    }

    pub(crate) fn finish_loading(&mut self, albums: Vec<Album>, fetched_at: String) -> bool {
        if !matches!(self.load, LoadState::Loading { .. }) {
            return false;
        }
        self.load = LoadState::Loaded {
            count: albums.len(),
            fetched_at,
        };
        self.albums = albums;
        self.mark_dirty();
        true
    }

    pub(crate) fn fail_loading(&mut self, reason: String) -> bool {
        if !matches!(self.load, LoadState::Loading { .. }) {
            return false;
        }
        self.load = LoadState::Failed { reason };
        self.mark_dirty();
        true
    }

    pub(crate) fn select_album(&mut self, album_id: AlbumId) {
        self.selected_album = Some(album_id);
        self.search_query.clear();
        if let Some(album) = self.albums.iter().find(|album| album.id == album_id) {
            self.seen_items.extend(album.items().map(ToOwned::to_owned));
        }
        self.mark_dirty();
    }

    pub(crate) fn mark_seen(&mut self, item: String) -> bool {
        if self.seen_items.contains(&item) {
            return false;
        }
        self.seen_items.insert(item);
        self.mark_dirty();
        true
    }

    pub(crate) fn set_search_query(&mut self, raw: &str) -> bool {
        let query = normalize_query(raw);
        if query == self.search_query {
            return false;
        }
        self.search_query = query;
        self.mark_dirty();
        true
    }
}
