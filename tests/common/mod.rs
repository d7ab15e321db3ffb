#![allow(dead_code)]

use std::{cell::RefCell, collections::HashMap};

use serde_json::{Value, json};
use tidalplayer::{
    catalog::{CatalogClient, ClientError, Record},
    management::{SecretError, SecretStore},
    types::{SearchKind, SearchResults, SessionToken, TrackId},
};

/// In-memory catalog that records every call it receives.
#[derive(Default)]
pub struct MockClient {
    pub tracks: HashMap<TrackId, Record>,
    pub albums: HashMap<TrackId, Record>,
    pub artists: HashMap<TrackId, Record>,
    pub album_tracks: HashMap<TrackId, Vec<Record>>,
    pub playlist_tracks: HashMap<String, Vec<Record>>,
    pub stream_urls: HashMap<TrackId, String>,
    pub search_results: Option<SearchResults>,
    pub credentials: Option<(String, String)>,
    pub issued_token: String,
    pub valid_sessions: Vec<String>,
    pub resumed: Option<String>,
    calls: RefCell<Vec<String>>,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls.borrow().iter().filter(|call| *call == name).count()
    }

    fn record_call(&self, name: &str) {
        self.calls.borrow_mut().push(name.to_string());
    }
}

impl CatalogClient for MockClient {
    async fn authenticate(
        &mut self,
        login: &str,
        password: &str,
    ) -> Result<SessionToken, ClientError> {
        self.record_call("authenticate");
        match &self.credentials {
            Some((l, p)) if l == login && p == password => {
                Ok(SessionToken(self.issued_token.clone()))
            }
            _ => Err(ClientError::Rejected("invalid credentials".to_string())),
        }
    }

    async fn resume_session(&mut self, token: &str) -> bool {
        self.record_call("resume_session");
        if self.valid_sessions.iter().any(|session| session == token) {
            self.resumed = Some(token.to_string());
            true
        } else {
            false
        }
    }

    async fn check_login(&self) -> bool {
        self.record_call("check_login");
        self.resumed.is_some()
    }

    async fn fetch_track(&self, id: TrackId) -> Option<Record> {
        self.record_call("fetch_track");
        self.tracks.get(&id).cloned()
    }

    async fn fetch_album(&self, id: TrackId) -> Option<Record> {
        self.record_call("fetch_album");
        self.albums.get(&id).cloned()
    }

    async fn fetch_artist(&self, id: TrackId) -> Option<Record> {
        self.record_call("fetch_artist");
        self.artists.get(&id).cloned()
    }

    async fn search(&self, _kind: SearchKind, _query: &str, _limit: u32) -> Option<SearchResults> {
        self.record_call("search");
        self.search_results.clone()
    }

    async fn track_stream_url(&self, id: TrackId) -> Option<String> {
        self.record_call("track_stream_url");
        self.stream_urls.get(&id).cloned()
    }

    async fn album_tracks(&self, id: TrackId) -> Option<Vec<Record>> {
        self.record_call("album_tracks");
        self.album_tracks.get(&id).cloned()
    }

    async fn artist_top_tracks(&self, id: TrackId, limit: u32) -> Option<Vec<Record>> {
        self.record_call("artist_top_tracks");
        self.album_tracks
            .get(&id)
            .map(|tracks| tracks.iter().take(limit as usize).cloned().collect())
    }

    async fn playlist_tracks(&self, uuid: &str) -> Option<Vec<Record>> {
        self.record_call("playlist_tracks");
        self.playlist_tracks.get(uuid).cloned()
    }
}

pub fn track_record(id: TrackId, name: &str, album: &str, artist: &str) -> Record {
    Record::new(json!({
        "id": id,
        "name": name,
        "track_num": 3,
        "disc_num": 1,
        "album": { "id": 5, "name": album, "image": "http://img/5.jpg" },
        "artist": { "id": 7, "name": artist },
    }))
}

pub fn record(value: Value) -> Record {
    Record::new(value)
}

/// Secret store kept in memory.
#[derive(Default)]
pub struct MemorySecrets {
    pub secrets: RefCell<HashMap<String, String>>,
    pub writes: RefCell<usize>,
}

impl SecretStore for MemorySecrets {
    fn get(&self, key: &str) -> Result<Option<String>, SecretError> {
        Ok(self.secrets.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, secret: &str) -> Result<(), SecretError> {
        *self.writes.borrow_mut() += 1;
        self.secrets
            .borrow_mut()
            .insert(key.to_string(), secret.to_string());
        Ok(())
    }

    fn unset(&self, key: &str) -> Result<(), SecretError> {
        self.secrets.borrow_mut().remove(key);
        Ok(())
    }
}

/// Secret store whose collection can never be opened.
pub struct UnavailableSecrets;

impl SecretStore for UnavailableSecrets {
    fn get(&self, _key: &str) -> Result<Option<String>, SecretError> {
        Err(SecretError::StorageUnavailable("no collection".to_string()))
    }

    fn set(&self, _key: &str, _secret: &str) -> Result<(), SecretError> {
        Err(SecretError::StorageUnavailable("no collection".to_string()))
    }

    fn unset(&self, _key: &str) -> Result<(), SecretError> {
        Err(SecretError::StorageUnavailable("no collection".to_string()))
    }
}
