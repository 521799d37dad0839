use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::entities::{NewSong, Song, SongId};
use crate::domain::errors::StoreError;

// Port for song storage used by the song service.
#[async_trait]
pub trait SongStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Song>, StoreError>;
    async fn find_by_id(&self, id: SongId) -> Result<Option<Song>, StoreError>;
    // Persists a new song and returns it with the identifier storage assigned.
    async fn insert(&self, song: NewSong) -> Result<Song, StoreError>;
    // Returns false when no song with the given id exists.
    async fn replace(&self, id: SongId, song: NewSong) -> Result<bool, StoreError>;
    async fn remove_by_id(&self, id: SongId) -> Result<bool, StoreError>;
}

#[async_trait]
impl<S> SongStore for Arc<S>
where
    S: SongStore + ?Sized,
{
    async fn list_all(&self) -> Result<Vec<Song>, StoreError> {
        self.as_ref().list_all().await
    }

    async fn find_by_id(&self, id: SongId) -> Result<Option<Song>, StoreError> {
        self.as_ref().find_by_id(id).await
    }

    async fn insert(&self, song: NewSong) -> Result<Song, StoreError> {
        self.as_ref().insert(song).await
    }

    async fn replace(&self, id: SongId, song: NewSong) -> Result<bool, StoreError> {
        self.as_ref().replace(id, song).await
    }

    async fn remove_by_id(&self, id: SongId) -> Result<bool, StoreError> {
        self.as_ref().remove_by_id(id).await
    }
}
