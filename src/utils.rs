use rand::Rng;
use serde::Serialize;

use crate::{
    management::PasswordStorage,
    types::{PlaylistEntry, SearchKind, TrackId},
    warning,
};

const IMAGE_BASE_URL: &str = "https://resources.tidal.com/images";

/// Replaces double quotes with `*` so names survive hand-built JSON consumers.
pub fn sanitize_quotes(text: &str) -> String {
    text.replace('"', "*")
}

pub fn generate_client_unique_key() -> String {
    format!("{:016x}", rand::rng().random::<u64>())
}

/// Builds the resources URL for a TIDAL image UUID (`cover`, `picture`, `image`).
pub fn image_url(uuid: &str, size: u32) -> String {
    if uuid.is_empty() {
        return String::new();
    }

    format!(
        "{base}/{path}/{size}x{size}.jpg",
        base = IMAGE_BASE_URL,
        path = uuid.replace('-', "/"),
        size = size
    )
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            warning!("Failed to serialize record. Err: {}", e);
            String::new()
        }
    }
}

pub fn serialize_track_ids(ids: &[TrackId]) -> String {
    let entries: Vec<PlaylistEntry> = ids.iter().map(|&id| PlaylistEntry { id }).collect();
    to_json(&entries)
}

pub fn parse_search_kind(s: &str) -> Result<SearchKind, String> {
    match s.trim().to_lowercase().as_str() {
        "artist" | "artists" => Ok(SearchKind::Artists),
        "album" | "albums" => Ok(SearchKind::Albums),
        "playlist" | "playlists" => Ok(SearchKind::Playlists),
        "track" | "tracks" => Ok(SearchKind::Tracks),
        other => Err(format!(
            "Invalid search kind '{}'. Allowed: artists, albums, playlists, tracks",
            other
        )),
    }
}

pub fn parse_password_storage(s: &str) -> Result<PasswordStorage, String> {
    match s.trim().to_lowercase().as_str() {
        "none" | "0" => Ok(PasswordStorage::None),
        "secure" | "keyring" | "1" => Ok(PasswordStorage::Secure),
        "plain" | "2" => Ok(PasswordStorage::Plain),
        other => Err(format!(
            "Invalid password storage '{}'. Allowed: none, secure, plain",
            other
        )),
    }
}

/// Parses a whitespace or comma separated list of track ids.
pub fn parse_track_ids(s: &str) -> Result<Vec<TrackId>, String> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<TrackId>()
                .map_err(|_| format!("'{}' is not a valid track id", part))
        })
        .collect()
}
