use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::entities::{NewSong, Song, SongId};
use crate::domain::errors::StoreError;
use crate::domain::ports::SongStore;

pub(crate) type SongTable = Arc<Mutex<BTreeMap<SongId, Song>>>;

#[derive(Clone, Copy, Default)]
pub(crate) struct FailureFlags {
    pub list: bool,
    pub find: bool,
    pub insert: bool,
    pub replace: bool,
    // Report the row as gone on replace even though lookups still find it.
    pub replace_missing: bool,
    pub remove: bool,
}

// Fake song store that counts every port call so tests can assert ordering.
#[derive(Clone)]
pub(crate) struct RecordingStore {
    songs: SongTable,
    next_id: Arc<Mutex<SongId>>,
    calls: Arc<AtomicUsize>,
    failures: FailureFlags,
}

impl RecordingStore {
    pub(crate) fn new() -> Self {
        Self {
            songs: Arc::new(Mutex::new(BTreeMap::new())),
            next_id: Arc::new(Mutex::new(1)),
            calls: Arc::new(AtomicUsize::new(0)),
            failures: FailureFlags::default(),
        }
    }

    pub(crate) fn with_failures(mut self, failures: FailureFlags) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn insert_test_song(&self, song: Song) {
        let mut next_id = self.next_id.lock().expect("next id mutex poisoned");
        *next_id = (*next_id).max(song.id + 1);
        let mut guard = self.songs.lock().expect("songs mutex poisoned");
        guard.insert(song.id, song);
    }

    pub(crate) fn get_test_song(&self, id: SongId) -> Option<Song> {
        let guard = self.songs.lock().expect("songs mutex poisoned");
        guard.get(&id).cloned()
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

pub(crate) fn test_song(id: SongId, name: &str, artist: &str) -> Song {
    Song {
        id,
        name: name.to_string(),
        artist: artist.to_string(),
        image_url: "https://picsum.photos/200/300".to_string(),
    }
}

#[async_trait]
impl SongStore for RecordingStore {
    async fn list_all(&self) -> Result<Vec<Song>, StoreError> {
        self.record();
        if self.failures.list {
            return Err(StoreError::Backend("list failed".to_string()));
        }

        let guard = self.songs.lock().expect("songs mutex poisoned");
        Ok(guard.values().cloned().collect())
    }

    async fn find_by_id(&self, id: SongId) -> Result<Option<Song>, StoreError> {
        self.record();
        if self.failures.find {
            return Err(StoreError::Backend("find failed".to_string()));
        }

        let guard = self.songs.lock().expect("songs mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    async fn insert(&self, song: NewSong) -> Result<Song, StoreError> {
        self.record();
        if self.failures.insert {
            return Err(StoreError::Unavailable);
        }

        let id = {
            let mut next_id = self.next_id.lock().expect("next id mutex poisoned");
            let id = *next_id;
            *next_id += 1;
            id
        };
        let song = song.with_id(id);
        let mut guard = self.songs.lock().expect("songs mutex poisoned");
        guard.insert(id, song.clone());
        Ok(song)
    }

    async fn replace(&self, id: SongId, song: NewSong) -> Result<bool, StoreError> {
        self.record();
        if self.failures.replace {
            return Err(StoreError::Backend("replace failed".to_string()));
        }
        if self.failures.replace_missing {
            return Ok(false);
        }

        let mut guard = self.songs.lock().expect("songs mutex poisoned");
        match guard.get_mut(&id) {
            Some(slot) => {
                *slot = song.with_id(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove_by_id(&self, id: SongId) -> Result<bool, StoreError> {
        self.record();
        if self.failures.remove {
            return Err(StoreError::Backend("remove failed".to_string()));
        }

        let mut guard = self.songs.lock().expect("songs mutex poisoned");
        Ok(guard.remove(&id).is_some())
    }
}
