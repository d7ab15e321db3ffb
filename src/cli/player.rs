use tabled::Table;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::{
    catalog::{CatalogClient, Record},
    cli::auth::{connect, spinner},
    debug, info,
    management::{CatalogCache, InsertLookup, PlaylistEvent, PlaylistSequencer},
    success,
    tidal::TidalClient,
    types::{PlaylistTableRow, TrackId, TrackInfo},
    utils, warning,
};

const HELP: &str = "commands: next | prev | play | add <ids> | insert <id> | queue <id> | \
jump <index> | list | ids | clear | reset | help | quit";

/// Where the initial playlist comes from.
#[derive(Debug, Clone, Default)]
pub struct PlayerSource {
    pub tracks: Vec<TrackId>,
    pub album: Option<TrackId>,
    pub playlist: Option<String>,
}

struct Player {
    client: TidalClient,
    cache: CatalogCache,
    playlist: PlaylistSequencer,
}

pub async fn player(source: PlayerSource, insert_by_index: bool) {
    let (client, _bridge) = connect().await;
    let lookup = if insert_by_index {
        InsertLookup::CursorIndex
    } else {
        InsertLookup::CursorValue
    };

    let mut player = Player {
        client,
        cache: CatalogCache::new(),
        playlist: PlaylistSequencer::with_insert_lookup(lookup),
    };

    player.fill(&source).await;
    if player.playlist.is_empty() {
        warning!("Playlist is empty. Use add <ids> to queue tracks.");
    } else {
        player.playlist.advance();
        player.handle_events().await;
    }

    info!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        if !player.execute(line.trim()) {
            break;
        }
        player.handle_events().await;
    }
}

fn track_ids(records: &[Record]) -> Vec<TrackId> {
    records
        .iter()
        .map(|record| record.numeric("id"))
        .filter(|&id| id != 0)
        .collect()
}

impl Player {
    async fn fill(&mut self, source: &PlayerSource) {
        self.playlist.append_all(source.tracks.iter().copied());

        if let Some(album) = source.album {
            let pb = spinner("Loading album tracks...");
            match self.client.album_tracks(album).await {
                Some(records) => self.playlist.append_all(track_ids(&records)),
                None => warning!("Could not load tracks of album {}", album),
            }
            pb.finish_and_clear();
        }

        if let Some(uuid) = &source.playlist {
            let pb = spinner("Loading playlist tracks...");
            match self.client.playlist_tracks(uuid).await {
                Some(records) => self.playlist.append_all(track_ids(&records)),
                None => warning!("Could not load tracks of playlist {}", uuid),
            }
            pb.finish_and_clear();
        }
    }

    /// Runs one prompt command. Returns `false` when the player should stop.
    fn execute(&mut self, line: &str) -> bool {
        let (command, argument) = match line.split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "next" | "n" => {
                self.playlist.advance();
            }
            "prev" | "p" => {
                self.playlist.retreat();
            }
            "play" => {
                self.playlist.play();
            }
            "add" | "a" => match utils::parse_track_ids(argument) {
                Ok(ids) => self.playlist.append_all(ids),
                Err(e) => warning!("{}", e),
            },
            "insert" | "i" => match argument.parse::<TrackId>() {
                Ok(id) => {
                    self.playlist.insert_next(id);
                }
                Err(_) => warning!("Usage: insert <track id>"),
            },
            "queue" => match argument.parse::<TrackId>() {
                Ok(id) => self.playlist.enqueue_next(id),
                Err(_) => warning!("Usage: queue <track id>"),
            },
            "jump" | "j" => match argument.parse::<usize>() {
                Ok(index) => {
                    self.playlist.jump(index);
                }
                Err(_) => warning!("Usage: jump <playlist index>"),
            },
            "list" | "ls" => self.list(),
            "ids" => println!("{}", self.playlist.serialized_ids()),
            "clear" => self.playlist.clear(),
            "reset" => self.playlist.reset(),
            "help" | "h" => info!("{}", HELP),
            "quit" | "q" | "exit" => return false,
            other => warning!("Unknown command '{}'. {}", other, HELP),
        }

        true
    }

    fn list(&self) {
        if self.playlist.is_empty() {
            info!("Playlist is empty.");
            return;
        }

        let playing = self
            .playlist
            .cursor()
            .checked_sub(1)
            .filter(|&index| self.playlist.track_at(index) == self.playlist.current_track());

        let rows: Vec<PlaylistTableRow> = self
            .playlist
            .entries()
            .iter()
            .enumerate()
            .map(|(position, &id)| PlaylistTableRow {
                position,
                marker: if Some(position) == playing {
                    "▶".to_string()
                } else if position == self.playlist.cursor() {
                    "next".to_string()
                } else {
                    String::new()
                },
                id,
            })
            .collect();

        println!("{}", Table::new(rows));
        info!(
            "can advance: {}, can retreat: {}",
            self.playlist.can_advance(),
            self.playlist.can_retreat()
        );
    }

    async fn handle_events(&mut self) {
        for event in self.playlist.drain_events() {
            match event {
                PlaylistEvent::CurrentTrackChanged(id) => self.announce(id).await,
                PlaylistEvent::PlaylistFinished => info!("Playlist finished."),
                PlaylistEvent::PlaylistChanged => {
                    debug!("playlist: {}", self.playlist.serialized_ids())
                }
            }
        }
    }

    async fn announce(&mut self, id: TrackId) {
        let document = self.cache.fetch_track_info(&self.client, id).await;
        let track: TrackInfo = serde_json::from_str(&document).unwrap_or_default();

        success!("Now playing: {} - {} ({})", track.artist, track.name, track.album);
        match self.cache.track_url(&self.client, id).await {
            Some(url) => info!("{}", url),
            None => warning!(
                "{}",
                self.cache.last_error().unwrap_or("Could not find track url!")
            ),
        }
    }
}
