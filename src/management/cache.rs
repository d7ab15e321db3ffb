use std::collections::HashMap;

use crate::{
    catalog::{CatalogClient, Record},
    debug,
    types::{
        AlbumInfo, ArtistInfo, ElementKind, SearchEntry, SearchKind, SearchResults, TrackId,
        TrackInfo,
    },
    utils,
};

/// Memoizes rendered track, album and artist documents by catalog id.
///
/// Entries are never invalidated. A remote failure produces a best-effort
/// document that is returned but not cached, and records a last error.
#[derive(Debug, Default)]
pub struct CatalogCache {
    tracks: HashMap<TrackId, String>,
    albums: HashMap<TrackId, String>,
    artists: HashMap<TrackId, String>,
    last_error: Option<String>,
}

impl CatalogCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn fetch_track_info<C: CatalogClient>(&mut self, client: &C, id: TrackId) -> String {
        if let Some(cached) = self.tracks.get(&id) {
            return cached.clone();
        }

        match client.fetch_track(id).await {
            Some(record) => {
                let json = utils::to_json(&TrackInfo::from_record(&record));
                self.tracks.insert(id, json.clone());
                json
            }
            None => {
                self.fail(format!("Could not fetch track {}", id));
                utils::to_json(&TrackInfo {
                    id,
                    ..Default::default()
                })
            }
        }
    }

    pub async fn fetch_album_info<C: CatalogClient>(&mut self, client: &C, id: TrackId) -> String {
        if let Some(cached) = self.albums.get(&id) {
            return cached.clone();
        }

        match client.fetch_album(id).await {
            Some(record) => {
                let json = utils::to_json(&AlbumInfo::from_record(&record));
                self.albums.insert(id, json.clone());
                json
            }
            None => {
                self.fail(format!("Could not fetch album {}", id));
                utils::to_json(&AlbumInfo {
                    id,
                    ..Default::default()
                })
            }
        }
    }

    pub async fn fetch_artist_info<C: CatalogClient>(
        &mut self,
        client: &C,
        id: TrackId,
    ) -> String {
        if let Some(cached) = self.artists.get(&id) {
            return cached.clone();
        }

        match client.fetch_artist(id).await {
            Some(record) => {
                let json = utils::to_json(&ArtistInfo::from_record(&record));
                self.artists.insert(id, json.clone());
                json
            }
            None => {
                self.fail(format!("Could not fetch artist {}", id));
                utils::to_json(&ArtistInfo {
                    id,
                    ..Default::default()
                })
            }
        }
    }

    /// Album track list as a JSON array of track documents.
    pub async fn fetch_album_tracks<C: CatalogClient>(
        &mut self,
        client: &C,
        album_id: TrackId,
    ) -> String {
        match client.album_tracks(album_id).await {
            Some(records) => self.compile_tracks(&records),
            None => {
                self.fail(format!("Could not fetch tracks of album {}", album_id));
                "[]".to_string()
            }
        }
    }

    pub async fn fetch_artist_top_tracks<C: CatalogClient>(
        &mut self,
        client: &C,
        artist_id: TrackId,
        limit: u32,
    ) -> String {
        match client.artist_top_tracks(artist_id, limit).await {
            Some(records) => self.compile_tracks(&records),
            None => {
                self.fail(format!("Could not fetch top tracks of artist {}", artist_id));
                "[]".to_string()
            }
        }
    }

    pub async fn search_generic<C: CatalogClient>(
        &mut self,
        client: &C,
        kind: SearchKind,
        query: &str,
        limit: u32,
    ) -> SearchResults {
        debug!("search {} '{}' limit {}", kind.field(), query, limit);
        match client.search(kind, query, limit).await {
            Some(results) => results,
            None => {
                self.fail(format!("Search for '{}' failed", query));
                SearchResults::default()
            }
        }
    }

    /// Searches one bucket and compiles it to the search result JSON.
    pub async fn search<C: CatalogClient>(
        &mut self,
        client: &C,
        kind: SearchKind,
        query: &str,
        limit: u32,
    ) -> String {
        let results = self.search_generic(client, kind, query, limit).await;
        Self::compile_search_results(results.bucket(kind), kind.element())
    }

    pub fn compile_search_results(records: &[Record], kind: ElementKind) -> String {
        let entries: Vec<SearchEntry> = records
            .iter()
            .map(|record| SearchEntry::from_record(record, kind))
            .collect();
        utils::to_json(&entries)
    }

    pub async fn track_url<C: CatalogClient>(&mut self, client: &C, id: TrackId) -> Option<String> {
        let url = client.track_stream_url(id).await;
        if url.is_none() {
            self.fail("Could not find track url!".to_string());
        }
        url
    }

    pub fn cached_track(&self, id: TrackId) -> Option<&str> {
        self.tracks.get(&id).map(String::as_str)
    }

    pub fn cached_album(&self, id: TrackId) -> Option<&str> {
        self.albums.get(&id).map(String::as_str)
    }

    pub fn cached_artist(&self, id: TrackId) -> Option<&str> {
        self.artists.get(&id).map(String::as_str)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn compile_tracks(&mut self, records: &[Record]) -> String {
        let infos: Vec<TrackInfo> = records.iter().map(TrackInfo::from_record).collect();
        for info in &infos {
            // id 0 means the record carried no id
            if info.id != 0 && !self.tracks.contains_key(&info.id) {
                self.tracks.insert(info.id, utils::to_json(info));
            }
        }
        utils::to_json(&infos)
    }

    fn fail(&mut self, message: String) {
        debug!("{}", message);
        self.last_error = Some(message);
    }
}
