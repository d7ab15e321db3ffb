mod common;

use common::{MockClient, record, track_record};
use serde_json::json;
use tidalplayer::{
    management::CatalogCache,
    types::{ElementKind, SearchKind, SearchResults},
};

#[test]
fn test_record_attribute_paths() {
    let track = track_record(10, "Song", "Foo", "Bar");

    assert_eq!(track.attribute("album.name"), "Foo");
    assert_eq!(track.attribute("artist.name"), "Bar");
    assert_eq!(track.attribute("album.missing"), "");
    assert_eq!(track.attribute("lyrics.text"), "");
    assert_eq!(track.attribute("id"), "10");
    assert_eq!(track.numeric("album.id"), 5);
}

#[test]
fn test_record_attribute_without_album() {
    let track = record(json!({ "id": 1, "name": "Lonely", "album": null }));

    assert_eq!(track.attribute("album.name"), "");
    assert_eq!(track.numeric("album.id"), 0);
}

#[test]
fn test_record_attribute_value_forms() {
    let value = record(json!({
        "quoted": "He said \"hi\"",
        "empty": "",
        "count": 12,
        "ratio": 2.5,
        "explicit": true,
        "list": [1, 2],
    }));

    assert_eq!(value.attribute("quoted"), "He said *hi*");
    assert_eq!(value.attribute("empty"), "");
    assert_eq!(value.attribute("count"), "12");
    assert_eq!(value.attribute("explicit"), "1");
    assert_eq!(value.attribute("list"), "");
    assert_eq!(value.numeric("ratio"), 2);
    assert_eq!(value.numeric("quoted"), 0);
}

#[tokio::test]
async fn test_track_info_is_cached() {
    let mut client = MockClient::new();
    client
        .tracks
        .insert(10, track_record(10, "Song", "Foo", "Bar"));
    let mut cache = CatalogCache::new();

    let first = cache.fetch_track_info(&client, 10).await;
    let second = cache.fetch_track_info(&client, 10).await;

    assert_eq!(
        first,
        r#"{"album":"Foo","albumid":5,"artist":"Bar","artistid":7,"disc_num":1,"name":"Song","image":"http://img/5.jpg","track_num":3,"id":10}"#
    );
    assert_eq!(first, second);
    assert_eq!(client.count("fetch_track"), 1);
    assert_eq!(cache.cached_track(10), Some(first.as_str()));
    assert!(cache.last_error().is_none());
}

#[tokio::test]
async fn test_failed_track_fetch_is_not_cached() {
    let client = MockClient::new();
    let mut cache = CatalogCache::new();

    let document = cache.fetch_track_info(&client, 404).await;
    let value: serde_json::Value = serde_json::from_str(&document).unwrap();

    assert_eq!(value["id"], 404);
    assert_eq!(value["name"], "");
    assert_eq!(value["album"], "");
    assert!(cache.cached_track(404).is_none());
    assert!(cache.last_error().unwrap().contains("404"));

    cache.fetch_track_info(&client, 404).await;
    assert_eq!(client.count("fetch_track"), 2);
}

#[tokio::test]
async fn test_track_without_album_has_empty_album_fields() {
    let mut client = MockClient::new();
    client
        .tracks
        .insert(1, record(json!({ "id": 1, "name": "Lonely" })));
    let mut cache = CatalogCache::new();

    let document = cache.fetch_track_info(&client, 1).await;
    let value: serde_json::Value = serde_json::from_str(&document).unwrap();

    assert_eq!(value["album"], "");
    assert_eq!(value["albumid"], 0);
    assert_eq!(value["image"], "");
    assert_eq!(value["name"], "Lonely");
}

#[tokio::test]
async fn test_album_info_uses_relase_key() {
    let mut client = MockClient::new();
    client.albums.insert(
        5,
        record(json!({
            "id": 5,
            "name": "Foo",
            "duration": 2400,
            "num_tracks": 12,
            "release_date": "2020-01-01",
            "image": "u",
            "artist": { "id": 7, "name": "Bar" },
        })),
    );
    let mut cache = CatalogCache::new();

    let document = cache.fetch_album_info(&client, 5).await;

    assert_eq!(
        document,
        r#"{"artist":"Bar","duration":"2400","image":"u","name":"Foo","num_tracks":"12","relase":"2020-01-01","id":5}"#
    );
    cache.fetch_album_info(&client, 5).await;
    assert_eq!(client.count("fetch_album"), 1);
}

#[tokio::test]
async fn test_artist_info_and_failure() {
    let mut client = MockClient::new();
    client
        .artists
        .insert(7, record(json!({ "id": 7, "name": "Bar" })));
    let mut cache = CatalogCache::new();

    assert_eq!(
        cache.fetch_artist_info(&client, 7).await,
        r#"{"name":"Bar","image":"","id":7}"#
    );
    assert_eq!(
        cache.fetch_artist_info(&client, 8).await,
        r#"{"name":"","image":"","id":8}"#
    );
    assert!(cache.cached_artist(7).is_some());
    assert!(cache.cached_artist(8).is_none());
    assert_eq!(cache.last_error(), Some("Could not fetch artist 8"));
}

#[tokio::test]
async fn test_album_tracks_fill_track_cache() {
    let mut client = MockClient::new();
    client.album_tracks.insert(
        5,
        vec![
            track_record(11, "One", "Foo", "Bar"),
            track_record(12, "Two", "Foo", "Bar"),
        ],
    );
    let mut cache = CatalogCache::new();

    let list = cache.fetch_album_tracks(&client, 5).await;
    let value: serde_json::Value = serde_json::from_str(&list).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[1]["name"], "Two");

    let track = cache.fetch_track_info(&client, 12).await;
    assert!(track.contains(r#""name":"Two""#));
    assert_eq!(client.count("fetch_track"), 0);
}

#[tokio::test]
async fn test_missing_album_tracks_yield_empty_list() {
    let client = MockClient::new();
    let mut cache = CatalogCache::new();

    assert_eq!(cache.fetch_album_tracks(&client, 99).await, "[]");
    assert_eq!(cache.fetch_artist_top_tracks(&client, 99, 10).await, "[]");
    assert!(cache.last_error().is_some());
}

#[tokio::test]
async fn test_artist_top_tracks_respect_limit() {
    let mut client = MockClient::new();
    client.album_tracks.insert(
        7,
        vec![
            track_record(1, "A", "X", "Bar"),
            track_record(2, "B", "X", "Bar"),
            track_record(3, "C", "X", "Bar"),
        ],
    );
    let mut cache = CatalogCache::new();

    let list = cache.fetch_artist_top_tracks(&client, 7, 2).await;
    let value: serde_json::Value = serde_json::from_str(&list).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_compiles_requested_bucket() {
    let mut client = MockClient::new();
    client.search_results = Some(SearchResults {
        tracks: vec![record(json!({ "id": 1, "name": "He said \"hi\"" }))],
        playlists: vec![record(json!({ "id": "abc-def", "name": "Mix" }))],
        ..Default::default()
    });
    let mut cache = CatalogCache::new();

    assert_eq!(
        cache.search(&client, SearchKind::Tracks, "hi", 50).await,
        r#"[{"name":"He said *hi*","id":1,"type":1}]"#
    );
    assert_eq!(
        cache.search(&client, SearchKind::Playlists, "mix", 50).await,
        r#"[{"name":"Mix","id":"abc-def","type":4}]"#
    );
    assert_eq!(cache.search(&client, SearchKind::Artists, "x", 50).await, "[]");
}

#[tokio::test]
async fn test_failed_search_is_empty() {
    let client = MockClient::new();
    let mut cache = CatalogCache::new();

    let results = cache
        .search_generic(&client, SearchKind::Albums, "nothing", 10)
        .await;
    assert_eq!(results, SearchResults::default());
    assert_eq!(cache.last_error(), Some("Search for 'nothing' failed"));
}

#[test]
fn test_compile_search_results_empty() {
    assert_eq!(
        CatalogCache::compile_search_results(&[], ElementKind::Album),
        "[]"
    );
}

#[tokio::test]
async fn test_track_url() {
    let mut client = MockClient::new();
    client
        .stream_urls
        .insert(10, "https://stream/10.m4a".to_string());
    let mut cache = CatalogCache::new();

    assert_eq!(
        cache.track_url(&client, 10).await.as_deref(),
        Some("https://stream/10.m4a")
    );
    assert!(cache.last_error().is_none());

    assert_eq!(cache.track_url(&client, 11).await, None);
    assert_eq!(cache.last_error(), Some("Could not find track url!"));
}

#[test]
fn test_search_entry_without_id_is_numeric_zero() {
    let records = vec![record(json!({ "name": "Untitled" }))];

    assert_eq!(
        CatalogCache::compile_search_results(&records, ElementKind::Album),
        r#"[{"name":"Untitled","id":0,"type":2}]"#
    );
}

#[tokio::test]
async fn test_album_tracks_without_id_are_not_cached() {
    let mut client = MockClient::new();
    client.album_tracks.insert(
        5,
        vec![
            record(json!({ "name": "Hidden Track" })),
            track_record(11, "One", "Foo", "Bar"),
        ],
    );
    let mut cache = CatalogCache::new();

    let list = cache.fetch_album_tracks(&client, 5).await;
    let value: serde_json::Value = serde_json::from_str(&list).unwrap();

    assert_eq!(value.as_array().unwrap().len(), 2);
    assert_eq!(value[0]["id"], 0);
    assert!(cache.cached_track(0).is_none());
    assert!(cache.cached_track(11).is_some());
}
