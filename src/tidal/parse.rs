//! Normalization of TIDAL responses into player records.
//!
//! TIDAL spells things its own way (`title`, `trackNumber`, `cover`, ...). Every
//! response is deserialized into the `Tidal*` types and passes through here once,
//! so the rest of the crate only ever sees the player's attribute names.

use serde_json::{Value, json};

use crate::{
    catalog::Record,
    types::{
        SearchResults, TidalAlbum, TidalArtist, TidalPage, TidalPlaylist, TidalSearchResponse,
        TidalTrack,
    },
    utils,
};

fn image(uuid: Option<&str>, size: u32) -> String {
    uuid.map(|uuid| utils::image_url(uuid, size))
        .unwrap_or_default()
}

/// Main artist of a track or album; falls back to the first entry of `artists`.
fn main_artist<'a>(
    artist: &'a Option<TidalArtist>,
    artists: &'a [TidalArtist],
) -> Option<&'a TidalArtist> {
    artist.as_ref().or_else(|| artists.first())
}

fn artist_ref(artist: Option<&TidalArtist>, size: u32) -> Value {
    match artist {
        Some(artist) => json!({
            "id": artist.id,
            "name": artist.name,
            "image": image(artist.picture.as_deref(), size),
        }),
        None => Value::Null,
    }
}

pub fn track(raw: &TidalTrack, size: u32) -> Record {
    let album = raw.album.as_ref().map(|album| {
        json!({
            "id": album.id,
            "name": album.title,
            "image": image(album.cover.as_deref(), size),
        })
    });

    Record::new(json!({
        "id": raw.id,
        "name": raw.title,
        "duration": raw.duration,
        "track_num": raw.track_number,
        "disc_num": raw.volume_number,
        "album": album,
        "artist": artist_ref(main_artist(&raw.artist, &raw.artists), size),
    }))
}

pub fn album(raw: &TidalAlbum, size: u32) -> Record {
    Record::new(json!({
        "id": raw.id,
        "name": raw.title,
        "duration": raw.duration,
        "num_tracks": raw.number_of_tracks,
        "release_date": raw.release_date,
        "image": image(raw.cover.as_deref(), size),
        "artist": artist_ref(main_artist(&raw.artist, &raw.artists), size),
    }))
}

pub fn artist(raw: &TidalArtist, size: u32) -> Record {
    Record::new(json!({
        "id": raw.id,
        "name": raw.name,
        "image": image(raw.picture.as_deref(), size),
    }))
}

pub fn playlist(raw: &TidalPlaylist, size: u32) -> Record {
    let cover = raw.square_image.as_deref().or(raw.image.as_deref());

    Record::new(json!({
        "id": raw.uuid,
        "name": raw.title,
        "description": raw.description,
        "duration": raw.duration,
        "num_tracks": raw.number_of_tracks,
        "image": image(cover, size),
    }))
}

pub fn tracks(page: &TidalPage<TidalTrack>, size: u32) -> Vec<Record> {
    page.items.iter().map(|item| track(item, size)).collect()
}

fn bucket<T>(page: &Option<TidalPage<T>>, size: u32, parse: fn(&T, u32) -> Record) -> Vec<Record> {
    page.as_ref()
        .map(|page| page.items.iter().map(|item| parse(item, size)).collect())
        .unwrap_or_default()
}

pub fn search_results(raw: &TidalSearchResponse, size: u32) -> SearchResults {
    SearchResults {
        artists: bucket(&raw.artists, size, artist),
        albums: bucket(&raw.albums, size, album),
        playlists: bucket(&raw.playlists, size, playlist),
        tracks: bucket(&raw.tracks, size, track),
    }
}
