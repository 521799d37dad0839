use crate::domain::entities::Song;

const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/200/300";

// Songs loaded into an empty store at startup.
pub fn seed_songs() -> Vec<Song> {
    [
        (1, "Unstoppable", "For The Fallen Dreams"),
        (2, "sTraNgeRs", "Bring Me The Horizon"),
        (3, "A Place For My Head", "Linkin Park"),
        (4, "X Gon' Give It To Ya", "DMX"),
    ]
    .into_iter()
    .map(|(id, name, artist)| Song {
        id,
        name: name.to_string(),
        artist: artist.to_string(),
        image_url: PLACEHOLDER_IMAGE_URL.to_string(),
    })
    .collect()
}
