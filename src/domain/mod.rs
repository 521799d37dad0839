pub mod entities;
pub mod errors;
pub mod outcome;
pub mod ports;

pub use entities::{NewSong, Song, SongId};
pub use errors::StoreError;
pub use outcome::{Outcome, ServiceResponse};
pub use ports::SongStore;
