pub mod song_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use song_service::SongService;
