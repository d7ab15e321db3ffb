use std::collections::VecDeque;

use crate::{debug, types::TrackId, utils};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistEvent {
    PlaylistChanged,
    CurrentTrackChanged(TrackId),
    PlaylistFinished,
}

/// How [`PlaylistSequencer::insert_next`] finds the position to insert after.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InsertLookup {
    /// Searches `entries` for a track id equal to the cursor value. Inserts at
    /// the front when nothing matches. This is what existing playlists rely on.
    #[default]
    CursorValue,
    /// Uses the cursor as an index into `entries`.
    CursorIndex,
}

/// Ordered track list with a cursor pointing at the next track to consume.
#[derive(Debug, Clone, Default)]
pub struct PlaylistSequencer {
    entries: Vec<TrackId>,
    cursor: usize,
    current_track: Option<TrackId>,
    suppress_advance: bool,
    insert_lookup: InsertLookup,
    track_ids: String,
    events: VecDeque<PlaylistEvent>,
}

impl PlaylistSequencer {
    pub fn new() -> Self {
        Self::with_insert_lookup(InsertLookup::default())
    }

    pub fn with_insert_lookup(insert_lookup: InsertLookup) -> Self {
        Self {
            insert_lookup,
            track_ids: utils::serialize_track_ids(&[]),
            ..Default::default()
        }
    }

    pub fn append(&mut self, id: TrackId) {
        self.entries.push(id);
        self.update_playlist();
    }

    pub fn append_all(&mut self, ids: impl IntoIterator<Item = TrackId>) {
        self.entries.extend(ids);
        self.update_playlist();
    }

    /// Inserts `id` right after the cursor position and starts playing it.
    pub fn insert_next(&mut self, id: TrackId) -> Option<TrackId> {
        let position = match self.insert_lookup {
            InsertLookup::CursorValue => self
                .entries
                .iter()
                .position(|&entry| entry == self.cursor as TrackId)
                .map_or(0, |index| index + 1),
            InsertLookup::CursorIndex => self.cursor.saturating_add(1).min(self.entries.len()),
        };

        self.entries.insert(position, id);
        self.update_playlist();
        self.jump(position)
    }

    /// Queues `id` to be consumed by the next [`advance`](Self::advance) without
    /// interrupting the current track.
    pub fn enqueue_next(&mut self, id: TrackId) {
        let position = self.cursor.min(self.entries.len());
        self.entries.insert(position, id);
        self.update_playlist();
    }

    /// Moves the cursor to `index` and latches that track without stepping past it.
    pub fn jump(&mut self, index: usize) -> Option<TrackId> {
        self.suppress_advance = true;
        self.cursor = index;
        self.advance()
    }

    pub fn advance(&mut self) -> Option<TrackId> {
        debug!(
            "tracks in playlist: {}, cursor: {}",
            self.entries.len(),
            self.cursor
        );

        let latched = match self.entries.get(self.cursor).copied() {
            Some(id) => {
                self.latch(id);
                if !self.suppress_advance {
                    self.cursor += 1;
                }
                Some(id)
            }
            None => {
                self.events.push_back(PlaylistEvent::PlaylistFinished);
                None
            }
        };

        self.suppress_advance = false;
        latched
    }

    /// Steps the cursor back by one and latches the track it lands on.
    ///
    /// The cursor never goes below zero; at the start this only reports
    /// `PlaylistFinished`.
    pub fn retreat(&mut self) -> Option<TrackId> {
        let previous = self
            .cursor
            .checked_sub(1)
            .and_then(|index| self.entries.get(index).copied().map(|id| (index, id)));

        match previous {
            Some((index, id)) => {
                self.cursor = index;
                self.latch(id);
                Some(id)
            }
            None => {
                self.events.push_back(PlaylistEvent::PlaylistFinished);
                None
            }
        }
    }

    /// Latches the track under the cursor again without moving.
    pub fn play(&mut self) -> Option<TrackId> {
        match self.entries.get(self.cursor).copied() {
            Some(id) => {
                self.latch(id);
                Some(id)
            }
            None => {
                self.events.push_back(PlaylistEvent::PlaylistFinished);
                None
            }
        }
    }

    pub fn can_advance(&self) -> bool {
        self.cursor.saturating_add(1) < self.entries.len()
    }

    pub fn can_retreat(&self) -> bool {
        self.cursor > 0
    }

    /// Drops all entries. The cursor keeps its value; use [`reset`](Self::reset)
    /// to start over completely.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.update_playlist();
    }

    pub fn reset(&mut self) {
        self.entries.clear();
        self.cursor = 0;
        self.current_track = None;
        self.suppress_advance = false;
        self.update_playlist();
    }

    /// JSON list of `{"id": n}` objects in playback order.
    pub fn serialized_ids(&self) -> &str {
        &self.track_ids
    }

    pub fn entries(&self) -> &[TrackId] {
        &self.entries
    }

    pub fn track_at(&self, index: usize) -> Option<TrackId> {
        self.entries.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_track(&self) -> Option<TrackId> {
        self.current_track
    }

    pub fn insert_lookup(&self) -> InsertLookup {
        self.insert_lookup
    }

    pub fn drain_events(&mut self) -> Vec<PlaylistEvent> {
        self.events.drain(..).collect()
    }

    fn latch(&mut self, id: TrackId) {
        self.current_track = Some(id);
        self.events.push_back(PlaylistEvent::CurrentTrackChanged(id));
    }

    fn update_playlist(&mut self) {
        self.track_ids = utils::serialize_track_ids(&self.entries);
        self.events.push_back(PlaylistEvent::PlaylistChanged);
    }
}
