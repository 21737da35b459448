use crate::Album;

/// Search is case-insensitive: queries are stored lower-cased.
pub fn normalize_query(raw: &str) -> String {
    raw.to_lowercase()
}

/// `query` must already be normalized. The empty query matches every album,
/// including ones whose title has no items.
pub fn matches_query(album: &Album, query: &str) -> bool {
    query.is_empty() || album.items().any(|item| item.to_lowercase().contains(query))
}

pub fn search_albums<'a>(albums: &'a [Album], query: &str) -> Vec<&'a Album> {
    albums
        .iter()
        .filter(|album| matches_query(album, query))
        .collect()
}
