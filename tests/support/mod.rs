// Boots a private song server per test so mutations in one test never leak into another.
use song_server::frameworks::seed::seed_songs;
use song_server::interface_adapters::state::AppState;

// Start a server seeded with the default songs and return its base URL.
pub async fn spawn_server() -> String {
    spawn_server_with(AppState::in_memory(seed_songs())).await
}

pub async fn spawn_server_with(state: AppState) -> String {
    // Bind to an ephemeral port to avoid collisions with local services.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");

    // The listener is already accepting, so requests queue until serve() polls it.
    tokio::spawn(async move {
        song_server::serve(listener, state)
            .await
            .expect("server failed");
    });

    format!("http://{addr}")
}
