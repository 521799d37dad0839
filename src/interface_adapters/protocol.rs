use serde::{Deserialize, Serialize};

use crate::domain::entities::{Song, SongId};

// Song as it appears on the wire, in request and response bodies.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongPayload {
    // Optional on create; storage assigns the real id.
    #[serde(default)]
    pub id: SongId,
    pub name: String,
    pub artist: String,
    pub image_url: String,
}

impl From<Song> for SongPayload {
    fn from(song: Song) -> Self {
        Self {
            id: song.id,
            name: song.name,
            artist: song.artist,
            image_url: song.image_url,
        }
    }
}

impl From<SongPayload> for Song {
    fn from(payload: SongPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            artist: payload.artist,
            image_url: payload.image_url,
        }
    }
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
