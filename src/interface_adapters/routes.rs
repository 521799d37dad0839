use crate::interface_adapters::handlers::{delete_song, get_song, list_songs, post_song, put_song};
use crate::interface_adapters::state::AppState;
use axum::{Router, routing::get};

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/song", get(list_songs).post(post_song))
        .route("/api/song/", get(list_songs).post(post_song))
        .route(
            "/api/song/{id}",
            get(get_song).put(put_song).delete(delete_song),
        )
        .with_state(state)
}
