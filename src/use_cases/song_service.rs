use tracing::{debug, warn};

use crate::domain::entities::{NewSong, Song, SongId};
use crate::domain::errors::StoreError;
use crate::domain::outcome::ServiceResponse;
use crate::domain::ports::SongStore;

// Song CRUD use cases with an injected storage port.
pub struct SongService<S> {
    pub store: S,
}

impl<S> SongService<S>
where
    S: SongStore,
{
    // Lists every song. An empty catalogue is still a successful result.
    pub async fn list_songs(&self) -> ServiceResponse<Vec<Song>> {
        match self.store.list_all().await {
            Ok(songs) => ServiceResponse::Ok(songs),
            Err(err) => storage_failure("list_songs", err),
        }
    }

    pub async fn get_song(&self, id: SongId) -> ServiceResponse<Song> {
        match self.store.find_by_id(id).await {
            Ok(Some(song)) => ServiceResponse::Ok(song),
            Ok(None) => ServiceResponse::NotFound,
            Err(err) => storage_failure("get_song", err),
        }
    }

    // Inserts the song under a storage-assigned id; any id the caller sent is dropped.
    pub async fn add_song(&self, song: Song) -> ServiceResponse<Song> {
        match self.store.insert(NewSong::from(song)).await {
            Ok(created) => {
                debug!(song_id = created.id, "song created");
                ServiceResponse::Ok(created)
            }
            Err(err) => storage_failure("add_song", err),
        }
    }

    pub async fn update_song(&self, id: SongId, song: Song) -> ServiceResponse {
        // Identity mismatch is rejected before storage is consulted.
        if id != song.id {
            debug!(path_id = id, body_id = song.id, "song id mismatch");
            return ServiceResponse::BadRequest;
        }

        match self.store.find_by_id(id).await {
            Ok(Some(_)) => {}
            Ok(None) => return ServiceResponse::NotFound,
            Err(err) => return storage_failure("update_song", err),
        }

        match self.store.replace(id, NewSong::from(song)).await {
            Ok(true) => ServiceResponse::ok(),
            // Removed between lookup and replace.
            Ok(false) => ServiceResponse::NotFound,
            Err(err) => storage_failure("update_song", err),
        }
    }

    pub async fn delete_song(&self, id: SongId) -> ServiceResponse {
        match self.store.remove_by_id(id).await {
            Ok(true) => {
                debug!(song_id = id, "song deleted");
                ServiceResponse::ok()
            }
            Ok(false) => ServiceResponse::NotFound,
            Err(err) => storage_failure("delete_song", err),
        }
    }
}

fn storage_failure<T>(operation: &'static str, err: StoreError) -> ServiceResponse<T> {
    warn!(operation, error = %err, "song storage failure");
    ServiceResponse::Err
}
