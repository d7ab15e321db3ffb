//! # TIDAL Integration Module
//!
//! This module implements the [`CatalogClient`] capability against the TIDAL web
//! API. It is the only place in the crate that knows TIDAL's endpoints, headers
//! and JSON spelling.
//!
//! ## Architecture
//!
//! ```text
//! Player Core (Sequencer, Cache Facade, Session Bridge)
//!          ↓
//! CatalogClient trait
//!          ↓
//! TIDAL Integration Layer
//!     ├── Authentication (username login, session resume, login check)
//!     └── Normalization (raw TIDAL JSON → player records)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! TIDAL Web API
//! ```
//!
//! ## Core Modules
//!
//! ### Authentication Module
//!
//! [`auth`] - Session establishment:
//! - **Username Login**: `POST login/username` with the application token and a random
//!   client unique key
//! - **Session Resume**: `GET sessions` resolves user and country of a stored session id
//! - **Login Check**: `GET users/{id}/subscription` confirms the session is still accepted
//!
//! ### Normalization Module
//!
//! [`parse`] - Maps TIDAL's field names onto the player's attribute names and turns
//! image UUIDs into resource URLs.
//!
//! ## Error Handling Philosophy
//!
//! Lookups never fail loudly. Any transport error, non-success status or
//! unparsable body becomes `None`, which the cache facade turns into a
//! best-effort document. Only login reports a reason. There is no retry and
//! no timeout layer: every call is awaited to completion by its caller.
//!
//! ## API Coverage
//!
//! - `POST /login/username` - Credential login
//! - `GET /sessions` - Session owner lookup
//! - `GET /users/{id}/subscription` - Login check
//! - `GET /tracks/{id}` - Track metadata
//! - `GET /tracks/{id}/streamUrl` - Playable stream URL
//! - `GET /albums/{id}` and `/albums/{id}/tracks` - Album metadata and track list
//! - `GET /artists/{id}` and `/artists/{id}/toptracks` - Artist metadata and top tracks
//! - `GET /playlists/{uuid}/tracks` - Playlist track list
//! - `GET /search` - Catalog search per bucket
//!
//! ## Configuration Integration
//!
//! The client is built from a [`ClientConfig`]: API base URL, application token,
//! stream quality and image size, all read from the environment by
//! [`crate::config`].
//!
//! ## Thread Safety
//!
//! The client is used from a single task. Session state lives in the client and
//! changes only through `&mut self` methods.

pub mod auth;
pub mod parse;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    catalog::{CatalogClient, ClientError, Record},
    config::ClientConfig,
    debug,
    types::{
        SearchKind, SearchResults, SessionToken, TidalAlbum, TidalArtist, TidalPage,
        TidalSearchResponse, TidalStreamUrl, TidalTrack, TrackId,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct TidalSession {
    pub session_id: String,
    pub country_code: String,
    pub user_id: u64,
}

pub struct TidalClient {
    http: Client,
    config: ClientConfig,
    session: Option<TidalSession>,
}

impl TidalClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
            session: None,
        }
    }

    pub fn session(&self) -> Option<&TidalSession> {
        self.session.as_ref()
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let session = self.session.as_ref().ok_or(ClientError::NotLoggedIn)?;
        let url = format!("{}/{}", self.config.api_url, path);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("X-Tidal-Token", &self.config.api_token)
            .query(&[
                ("sessionId", session.session_id.as_str()),
                ("countryCode", session.country_code.as_str()),
            ])
            .query(params)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }

    async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Option<T> {
        match self.get_json(path, params).await {
            Ok(json) => Some(json),
            Err(e) => {
                debug!("request {} failed: {}", path, e);
                None
            }
        }
    }
}

impl CatalogClient for TidalClient {
    async fn authenticate(
        &mut self,
        login: &str,
        password: &str,
    ) -> Result<SessionToken, ClientError> {
        auth::login(self, login, password).await
    }

    async fn resume_session(&mut self, token: &str) -> bool {
        auth::load_session(self, token).await
    }

    async fn check_login(&self) -> bool {
        auth::check_login(self).await
    }

    async fn fetch_track(&self, id: TrackId) -> Option<Record> {
        let raw: TidalTrack = self.get_optional(&format!("tracks/{}", id), &[]).await?;
        Some(parse::track(&raw, self.config.image_size))
    }

    async fn fetch_album(&self, id: TrackId) -> Option<Record> {
        let raw: TidalAlbum = self.get_optional(&format!("albums/{}", id), &[]).await?;
        Some(parse::album(&raw, self.config.image_size))
    }

    async fn fetch_artist(&self, id: TrackId) -> Option<Record> {
        let raw: TidalArtist = self.get_optional(&format!("artists/{}", id), &[]).await?;
        Some(parse::artist(&raw, self.config.image_size))
    }

    async fn search(&self, kind: SearchKind, query: &str, limit: u32) -> Option<SearchResults> {
        let params = [
            ("query", query.to_string()),
            ("limit", limit.to_string()),
            ("types", format!("{}S", kind.field().to_uppercase())),
        ];
        let raw: TidalSearchResponse = self.get_optional("search", &params).await?;
        Some(parse::search_results(&raw, self.config.image_size))
    }

    async fn track_stream_url(&self, id: TrackId) -> Option<String> {
        let params = [("soundQuality", self.config.sound_quality.clone())];
        let raw: TidalStreamUrl = self
            .get_optional(&format!("tracks/{}/streamUrl", id), &params)
            .await?;
        Some(raw.url).filter(|url| !url.is_empty())
    }

    async fn album_tracks(&self, id: TrackId) -> Option<Vec<Record>> {
        let raw: TidalPage<TidalTrack> = self
            .get_optional(&format!("albums/{}/tracks", id), &[])
            .await?;
        Some(parse::tracks(&raw, self.config.image_size))
    }

    async fn artist_top_tracks(&self, id: TrackId, limit: u32) -> Option<Vec<Record>> {
        let params = [("limit", limit.to_string())];
        let raw: TidalPage<TidalTrack> = self
            .get_optional(&format!("artists/{}/toptracks", id), &params)
            .await?;
        Some(parse::tracks(&raw, self.config.image_size))
    }

    async fn playlist_tracks(&self, uuid: &str) -> Option<Vec<Record>> {
        let raw: TidalPage<TidalTrack> = self
            .get_optional(&format!("playlists/{}/tracks", uuid), &[])
            .await?;
        Some(parse::tracks(&raw, self.config.image_size))
    }
}
