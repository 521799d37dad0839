use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Delegate to the server framework entry point.
    match song_server::run_with_config().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "song server stopped");
            ExitCode::FAILURE
        }
    }
}
