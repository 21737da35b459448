pub type AlbumId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Album {
    pub id: AlbumId,
    pub user_id: u64,
    pub title: String,
}

impl Album {
    pub fn new(id: AlbumId, user_id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
        }
    }

    /// Words of the title in order. Repeated words are yielded once per occurrence.
    pub fn items(&self) -> impl Iterator<Item = &str> + '_ {
        self.title.split_whitespace()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_split_on_any_whitespace() {
        let album = Album::new(1, 1, "  a\tb  a ");
        assert_eq!(album.items().collect::<Vec<_>>(), vec!["a", "b", "a"]);
    }

    #[test]
    fn empty_title_has_no_items() {
        assert_eq!(Album::new(1, 1, "").items().count(), 0);
        assert_eq!(Album::new(2, 1, "   ").items().count(), 0);
    }
}
