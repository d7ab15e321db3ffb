use crate::{
    cli::auth::{connect, spinner},
    error,
    management::CatalogCache,
    types::TrackId,
    warning,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoKind {
    Track,
    Album,
    Artist,
}

/// Prints the JSON document of one catalog item, optionally with its tracks.
pub async fn info(kind: InfoKind, id: TrackId, with_tracks: bool, top: u32) {
    let (client, _bridge) = connect().await;
    let mut cache = CatalogCache::new();

    let pb = spinner("Fetching from TIDAL...");
    let (document, tracks) = match kind {
        InfoKind::Track => (cache.fetch_track_info(&client, id).await, None),
        InfoKind::Album => {
            let document = cache.fetch_album_info(&client, id).await;
            let tracks = if with_tracks {
                Some(cache.fetch_album_tracks(&client, id).await)
            } else {
                None
            };
            (document, tracks)
        }
        InfoKind::Artist => {
            let document = cache.fetch_artist_info(&client, id).await;
            let tracks = if top > 0 {
                Some(cache.fetch_artist_top_tracks(&client, id, top).await)
            } else {
                None
            };
            (document, tracks)
        }
    };
    pb.finish_and_clear();

    if let Some(e) = cache.last_error() {
        warning!("{}", e);
    }

    println!("{}", document);
    if let Some(tracks) = tracks {
        println!("{}", tracks);
    }
}

pub async fn url(id: TrackId) {
    let (client, _bridge) = connect().await;
    let mut cache = CatalogCache::new();

    let pb = spinner("Requesting stream url...");
    let url = cache.track_url(&client, id).await;
    pb.finish_and_clear();

    match url {
        Some(url) => println!("{}", url),
        None => error!("{}", cache.last_error().unwrap_or("Could not find track url!")),
    }
}
