use crate::domain::entities::{Song, SongId};
use crate::domain::outcome::ServiceResponse;
use crate::domain::ports::SongStore;
use crate::interface_adapters::protocol::{ErrorResponse, SongPayload};
use crate::interface_adapters::state::AppState;
use crate::use_cases::SongService;
use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
};
use std::sync::Arc;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn song_service(state: &AppState) -> SongService<Arc<dyn SongStore>> {
    SongService {
        store: state.songs.clone(),
    }
}

// Handler for listing every song.
pub async fn list_songs(
    State(state): State<AppState>,
) -> Result<Json<Vec<SongPayload>>, ApiError> {
    let songs = into_http(song_service(&state).list_songs().await)?;

    Ok(Json(songs.into_iter().map(SongPayload::from).collect()))
}

// Handler for fetching one song by id.
pub async fn get_song(
    State(state): State<AppState>,
    Path(id): Path<SongId>,
) -> Result<Json<SongPayload>, ApiError> {
    let song = into_http(song_service(&state).get_song(id).await)?;

    Ok(Json(song.into()))
}

// Handler for replacing an existing song; the path id must match the body id.
pub async fn put_song(
    State(state): State<AppState>,
    Path(id): Path<SongId>,
    Json(payload): Json<SongPayload>,
) -> Result<StatusCode, ApiError> {
    into_http(song_service(&state).update_song(id, Song::from(payload)).await)?;

    Ok(StatusCode::NO_CONTENT)
}

// Handler for creating a song; responds with its location.
pub async fn post_song(
    State(state): State<AppState>,
    Json(payload): Json<SongPayload>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<SongPayload>), ApiError> {
    let created = into_http(song_service(&state).add_song(Song::from(payload)).await)?;
    let location = format!("/api/song/{}", created.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created.into()),
    ))
}

// Handler for deleting a song by id.
pub async fn delete_song(
    State(state): State<AppState>,
    Path(id): Path<SongId>,
) -> Result<StatusCode, ApiError> {
    into_http(song_service(&state).delete_song(id).await)?;

    Ok(StatusCode::NO_CONTENT)
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            message: message.to_string(),
        }),
    )
}

// Splits a service response into its payload or the HTTP error for its classification.
fn into_http<T>(response: ServiceResponse<T>) -> Result<T, ApiError> {
    tracing::debug!(outcome = ?response.outcome(), "song service responded");
    match response {
        ServiceResponse::Ok(data) => Ok(data),
        ServiceResponse::NotFound => Err(error_response(StatusCode::NOT_FOUND, "song not found")),
        ServiceResponse::BadRequest => Err(error_response(
            StatusCode::BAD_REQUEST,
            "id does not match song id",
        )),
        ServiceResponse::Err => Err(error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "song storage error",
        )),
    }
}
