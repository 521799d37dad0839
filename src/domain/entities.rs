// Identifier assigned by storage when a song is created.
pub type SongId = i32;

// Song record as held by storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Song {
    pub id: SongId,
    pub name: String,
    pub artist: String,
    pub image_url: String,
}

// Song fields without an identity, used for inserts and replacements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewSong {
    pub name: String,
    pub artist: String,
    pub image_url: String,
}

impl NewSong {
    pub fn with_id(self, id: SongId) -> Song {
        Song {
            id,
            name: self.name,
            artist: self.artist,
            image_url: self.image_url,
        }
    }
}

impl From<Song> for NewSong {
    fn from(song: Song) -> Self {
        Self {
            name: song.name,
            artist: song.artist,
            image_url: song.image_url,
        }
    }
}
