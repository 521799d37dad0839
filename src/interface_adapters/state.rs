use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::entities::{NewSong, Song, SongId};
use crate::domain::errors::StoreError;
use crate::domain::ports::SongStore;

// Application state holding the song storage adapter.
#[derive(Clone)]
pub struct AppState {
    pub songs: Arc<dyn SongStore>,
}

impl AppState {
    pub fn new(songs: impl SongStore + 'static) -> Self {
        Self {
            songs: Arc::new(songs),
        }
    }

    // State backed by a fresh in-memory store holding the given songs.
    pub fn in_memory(seed: Vec<Song>) -> Self {
        Self::new(InMemorySongStore::with_songs(seed))
    }
}

#[derive(Default)]
struct SongTable {
    songs: BTreeMap<SongId, Song>,
    // Last id handed out; ids are never reused after a delete.
    last_id: SongId,
}

// In-memory song store adapter used when no database is configured.
#[derive(Clone, Default)]
pub struct InMemorySongStore {
    table: Arc<Mutex<SongTable>>,
}

impl InMemorySongStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_songs(songs: Vec<Song>) -> Self {
        let last_id = songs.iter().map(|song| song.id).max().unwrap_or(0).max(0);
        let songs = songs.into_iter().map(|song| (song.id, song)).collect();
        Self {
            table: Arc::new(Mutex::new(SongTable { songs, last_id })),
        }
    }
}

#[async_trait]
impl SongStore for InMemorySongStore {
    async fn list_all(&self) -> Result<Vec<Song>, StoreError> {
        let table = self.table.lock().await;
        Ok(table.songs.values().cloned().collect())
    }

    async fn find_by_id(&self, id: SongId) -> Result<Option<Song>, StoreError> {
        let table = self.table.lock().await;
        Ok(table.songs.get(&id).cloned())
    }

    async fn insert(&self, song: NewSong) -> Result<Song, StoreError> {
        let mut table = self.table.lock().await;
        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Backend("song id space exhausted".to_string()))?;
        table.last_id = id;

        let song = song.with_id(id);
        table.songs.insert(id, song.clone());
        Ok(song)
    }

    async fn replace(&self, id: SongId, song: NewSong) -> Result<bool, StoreError> {
        let mut table = self.table.lock().await;
        match table.songs.get_mut(&id) {
            Some(slot) => {
                *slot = song.with_id(id);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove_by_id(&self, id: SongId) -> Result<bool, StoreError> {
        let mut table = self.table.lock().await;
        Ok(table.songs.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frameworks::seed::seed_songs;

    fn new_song(name: &str) -> NewSong {
        NewSong {
            name: name.to_string(),
            artist: "Linkin Park".to_string(),
            image_url: "https://picsum.photos/200/300".to_string(),
        }
    }

    #[tokio::test]
    async fn when_store_is_seeded_then_inserts_continue_after_highest_id() {
        let store = InMemorySongStore::with_songs(seed_songs());

        let created = store
            .insert(new_song("Numb"))
            .await
            .expect("expected insert to succeed");

        assert_eq!(created.id, 5);
        assert_eq!(store.list_all().await.expect("expected list").len(), 5);
    }

    #[tokio::test]
    async fn when_last_song_is_removed_then_its_id_is_not_reused() {
        let store = InMemorySongStore::new();
        let first = store.insert(new_song("Numb")).await.expect("insert");

        assert!(store.remove_by_id(first.id).await.expect("remove"));
        let second = store.insert(new_song("Faint")).await.expect("insert");

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn when_replacing_missing_song_then_returns_false_and_stores_nothing() {
        let store = InMemorySongStore::new();

        let replaced = store.replace(9, new_song("Numb")).await.expect("replace");

        assert!(!replaced);
        assert_eq!(store.find_by_id(9).await.expect("find"), None);
    }

    #[tokio::test]
    async fn when_replacing_existing_song_then_identity_is_kept() {
        let store = InMemorySongStore::with_songs(seed_songs());

        assert!(store.replace(1, new_song("Numb")).await.expect("replace"));
        let saved = store
            .find_by_id(1)
            .await
            .expect("find")
            .expect("expected song 1");

        assert_eq!(saved.id, 1);
        assert_eq!(saved.name, "Numb");
    }
}
