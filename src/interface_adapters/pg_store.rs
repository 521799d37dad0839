use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::entities::{NewSong, Song, SongId};
use crate::domain::errors::StoreError;
use crate::domain::ports::SongStore;

#[derive(sqlx::FromRow)]
struct SongRow {
    id: i32,
    name: String,
    artist: String,
    image_url: String,
}

impl From<SongRow> for Song {
    fn from(row: SongRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            artist: row.artist,
            image_url: row.image_url,
        }
    }
}

// PostgreSQL-backed song store.
#[derive(Clone)]
pub struct PostgresSongStore {
    pub db: PgPool,
}

impl PostgresSongStore {
    // Insert the given songs with their fixed ids, but only into an empty table.
    pub async fn seed_if_empty(&self, songs: &[Song]) -> Result<bool, StoreError> {
        let mut tx = self.db.begin().await.map_err(store_error)?;

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM songs")
            .fetch_one(&mut *tx)
            .await
            .map_err(store_error)?;
        if count > 0 {
            return Ok(false);
        }

        for song in songs {
            sqlx::query("INSERT INTO songs (id, name, artist, image_url) VALUES ($1, $2, $3, $4)")
                .bind(song.id)
                .bind(&song.name)
                .bind(&song.artist)
                .bind(&song.image_url)
                .execute(&mut *tx)
                .await
                .map_err(store_error)?;
        }

        // Move the serial past the explicit ids so generated ids do not collide.
        sqlx::query(
            r#"
            SELECT setval(
                pg_get_serial_sequence('songs', 'id'),
                COALESCE((SELECT MAX(id) FROM songs), 0) + 1,
                false
            )
            "#,
        )
        .execute(&mut *tx)
        .await
        .map_err(store_error)?;

        tx.commit().await.map_err(store_error)?;
        Ok(true)
    }
}

#[async_trait]
impl SongStore for PostgresSongStore {
    async fn list_all(&self) -> Result<Vec<Song>, StoreError> {
        let rows: Vec<SongRow> =
            sqlx::query_as("SELECT id, name, artist, image_url FROM songs ORDER BY id")
                .fetch_all(&self.db)
                .await
                .map_err(store_error)?;

        Ok(rows.into_iter().map(Song::from).collect())
    }

    async fn find_by_id(&self, id: SongId) -> Result<Option<Song>, StoreError> {
        let row: Option<SongRow> =
            sqlx::query_as("SELECT id, name, artist, image_url FROM songs WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.db)
                .await
                .map_err(store_error)?;

        Ok(row.map(Song::from))
    }

    async fn insert(&self, song: NewSong) -> Result<Song, StoreError> {
        let row: SongRow = sqlx::query_as(
            r#"
            INSERT INTO songs (name, artist, image_url)
            VALUES ($1, $2, $3)
            RETURNING id, name, artist, image_url
            "#,
        )
        .bind(&song.name)
        .bind(&song.artist)
        .bind(&song.image_url)
        .fetch_one(&self.db)
        .await
        .map_err(store_error)?;

        Ok(row.into())
    }

    async fn replace(&self, id: SongId, song: NewSong) -> Result<bool, StoreError> {
        let result =
            sqlx::query("UPDATE songs SET name = $2, artist = $3, image_url = $4 WHERE id = $1")
                .bind(id)
                .bind(&song.name)
                .bind(&song.artist)
                .bind(&song.image_url)
                .execute(&self.db)
                .await
                .map_err(store_error)?;

        Ok(result.rows_affected() > 0)
    }

    async fn remove_by_id(&self, id: SongId) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await
            .map_err(store_error)?;

        Ok(result.rows_affected() > 0)
    }
}

// Connection-level failures mean the store is unreachable; everything else is a backend error.
fn store_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreError::Unavailable
        }
        other => StoreError::Backend(other.to_string()),
    }
}
