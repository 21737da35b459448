#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Request the album list from the data source.
    FetchAlbums,
}
