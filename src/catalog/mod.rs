//! # Remote Catalog
//!
//! The capability the player core consumes from a streaming service: session
//! handling, record lookups, search and stream URLs. The [`tidal`](crate::tidal)
//! module provides the production implementation; tests plug in their own.
//!
//! Lookups return `None` on any failure. The cache facade substitutes safe
//! defaults instead of propagating remote errors, so a richer error type would
//! be thrown away. Only [`CatalogClient::authenticate`] reports why it failed,
//! because the session bridge surfaces that message as the last error.

mod record;

pub use record::Record;

use std::fmt;

use crate::types::{SearchKind, SearchResults, SessionToken, TrackId};

#[derive(Debug)]
pub enum ClientError {
    HttpError(reqwest::Error),
    Rejected(String),
    NotLoggedIn,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::HttpError(e) => write!(f, "request failed: {}", e),
            ClientError::Rejected(reason) => write!(f, "rejected by service: {}", reason),
            ClientError::NotLoggedIn => write!(f, "no active session"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::HttpError(err)
    }
}

#[allow(async_fn_in_trait)]
pub trait CatalogClient {
    /// Logs in with user credentials and returns the new session token.
    async fn authenticate(&mut self, login: &str, password: &str)
    -> Result<SessionToken, ClientError>;

    /// Adopts an existing session token. `false` when the service does not know it.
    async fn resume_session(&mut self, token: &str) -> bool;

    /// Whether the adopted session is still accepted by the service.
    async fn check_login(&self) -> bool;

    async fn fetch_track(&self, id: TrackId) -> Option<Record>;

    async fn fetch_album(&self, id: TrackId) -> Option<Record>;

    async fn fetch_artist(&self, id: TrackId) -> Option<Record>;

    async fn search(&self, kind: SearchKind, query: &str, limit: u32) -> Option<SearchResults>;

    async fn track_stream_url(&self, id: TrackId) -> Option<String>;

    async fn album_tracks(&self, id: TrackId) -> Option<Vec<Record>>;

    async fn artist_top_tracks(&self, id: TrackId, limit: u32) -> Option<Vec<Record>>;

    async fn playlist_tracks(&self, uuid: &str) -> Option<Vec<Record>>;
}
