use serde::{Deserialize, Serialize, Serializer};
use tabled::Tabled;

use crate::catalog::Record;

/// Catalog id of a track, album or artist.
pub type TrackId = u64;

/// Element kinds as they appear in the `type` field of search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Track = 1,
    Album = 2,
    Artist = 3,
    Playlist = 4,
}

impl Serialize for ElementKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Search buckets understood by the remote catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchKind {
    Artists,
    Albums,
    Playlists,
    Tracks,
}

impl SearchKind {
    /// Singular field name passed to the remote search.
    pub fn field(&self) -> &'static str {
        match self {
            SearchKind::Artists => "artist",
            SearchKind::Albums => "album",
            SearchKind::Playlists => "playlist",
            SearchKind::Tracks => "track",
        }
    }

    pub fn element(&self) -> ElementKind {
        match self {
            SearchKind::Artists => ElementKind::Artist,
            SearchKind::Albums => ElementKind::Album,
            SearchKind::Playlists => ElementKind::Playlist,
            SearchKind::Tracks => ElementKind::Track,
        }
    }
}

/// Raw search results grouped by bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub artists: Vec<Record>,
    pub albums: Vec<Record>,
    pub playlists: Vec<Record>,
    pub tracks: Vec<Record>,
}

impl SearchResults {
    pub fn bucket(&self, kind: SearchKind) -> &[Record] {
        match kind {
            SearchKind::Artists => &self.artists,
            SearchKind::Albums => &self.albums,
            SearchKind::Playlists => &self.playlists,
            SearchKind::Tracks => &self.tracks,
        }
    }
}

/// Opaque TIDAL session token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionToken(pub String);

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginState {
    LoggedIn,
    LoggedOut,
}

impl LoginState {
    pub fn is_logged_in(&self) -> bool {
        matches!(self, LoginState::LoggedIn)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackInfo {
    pub album: String,
    pub albumid: u64,
    pub artist: String,
    pub artistid: u64,
    pub disc_num: u64,
    pub name: String,
    pub image: String,
    pub track_num: u64,
    pub id: u64,
}

impl TrackInfo {
    pub fn from_record(record: &Record) -> Self {
        Self {
            album: record.attribute("album.name"),
            albumid: record.numeric("album.id"),
            artist: record.attribute("artist.name"),
            artistid: record.numeric("artist.id"),
            disc_num: record.numeric("disc_num"),
            name: record.attribute("name"),
            image: record.attribute("album.image"),
            track_num: record.numeric("track_num"),
            id: record.numeric("id"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlbumInfo {
    pub artist: String,
    pub duration: String,
    pub image: String,
    pub name: String,
    pub num_tracks: String,
    // the consumers read this misspelled key
    #[serde(rename = "relase")]
    pub release: String,
    pub id: u64,
}

impl AlbumInfo {
    pub fn from_record(record: &Record) -> Self {
        Self {
            artist: record.attribute("artist.name"),
            duration: record.attribute("duration"),
            image: record.attribute("image"),
            name: record.attribute("name"),
            num_tracks: record.attribute("num_tracks"),
            release: record.attribute("release_date"),
            id: record.numeric("id"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtistInfo {
    pub name: String,
    pub image: String,
    pub id: u64,
}

impl ArtistInfo {
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.attribute("name"),
            image: record.attribute("image"),
            id: record.numeric("id"),
        }
    }
}

/// Id of a search hit. TIDAL playlists are keyed by UUID, everything else by number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogId {
    Numeric(u64),
    Text(String),
}

impl std::fmt::Display for CatalogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogId::Numeric(id) => write!(f, "{}", id),
            CatalogId::Text(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchEntry {
    pub name: String,
    pub id: CatalogId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
}

impl SearchEntry {
    pub fn from_record(record: &Record, kind: ElementKind) -> Self {
        let raw_id = record.attribute("id");
        let id = if raw_id.is_empty() {
            CatalogId::Numeric(0)
        } else {
            match raw_id.parse::<u64>() {
                Ok(numeric) => CatalogId::Numeric(numeric),
                Err(_) => CatalogId::Text(raw_id),
            }
        };

        Self {
            name: record.attribute("name"),
            id,
            kind,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    pub id: TrackId,
}

#[derive(Tabled)]
pub struct SearchTableRow {
    pub id: String,
    pub name: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub marker: String,
    pub id: TrackId,
}

// TIDAL web API responses

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TidalArtist {
    pub id: u64,
    pub name: String,
    pub picture: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TidalAlbumRef {
    pub id: u64,
    pub title: String,
    pub cover: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TidalTrack {
    pub id: u64,
    pub title: String,
    pub duration: Option<u64>,
    #[serde(rename = "trackNumber")]
    pub track_number: Option<u64>,
    #[serde(rename = "volumeNumber")]
    pub volume_number: Option<u64>,
    pub album: Option<TidalAlbumRef>,
    pub artist: Option<TidalArtist>,
    pub artists: Vec<TidalArtist>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TidalAlbum {
    pub id: u64,
    pub title: String,
    pub duration: Option<u64>,
    #[serde(rename = "numberOfTracks")]
    pub number_of_tracks: Option<u64>,
    #[serde(rename = "releaseDate")]
    pub release_date: Option<String>,
    pub cover: Option<String>,
    pub artist: Option<TidalArtist>,
    pub artists: Vec<TidalArtist>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TidalPlaylist {
    pub uuid: String,
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<u64>,
    #[serde(rename = "numberOfTracks")]
    pub number_of_tracks: Option<u64>,
    #[serde(rename = "squareImage")]
    pub square_image: Option<String>,
    pub image: Option<String>,
}

/// Paged list wrapper (`{"limit": .., "offset": .., "items": [..]}`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TidalPage<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TidalSearchResponse {
    pub artists: Option<TidalPage<TidalArtist>>,
    pub albums: Option<TidalPage<TidalAlbum>>,
    pub playlists: Option<TidalPage<TidalPlaylist>>,
    pub tracks: Option<TidalPage<TidalTrack>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TidalLoginResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
    #[serde(rename = "countryCode")]
    pub country_code: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TidalSessionResponse {
    #[serde(rename = "userId")]
    pub user_id: Option<u64>,
    #[serde(rename = "countryCode")]
    pub country_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TidalSubscription {
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TidalStreamUrl {
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TidalErrorResponse {
    #[serde(rename = "userMessage")]
    pub user_message: Option<String>,
}
