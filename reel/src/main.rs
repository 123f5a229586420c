use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use axum::routing::delete;
use axum::routing::get;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;

mod config;
mod error;
mod store;
#[cfg(test)]
mod tests;
mod videos;

use config::ServerConfig;
use error::ReelError;
use store::VideoStore;

/// Shared by every handler. All store access goes through the one lock so
/// a lookup and the mutation that follows it are atomic.
#[derive(Clone)]
pub struct ReelState {
    pub store: Arc<Mutex<VideoStore>>,
}

impl ReelState {
    pub fn new(store: VideoStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = ServerConfig::from_env()?;
    let app = build_server(ReelState::new(VideoStore::seeded()));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    log::info!("Listening on {}", config.bind_addr());
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_server(state: ReelState) -> Router {
    Router::new()
        .route(
            "/videos",
            get(videos::list_videos)
                .post(videos::create_video)
                .delete(videos::delete_all_videos),
        )
        .route(
            "/videos/{id}",
            get(videos::get_video)
                .put(videos::update_video)
                .delete(videos::delete_video),
        )
        .route("/testing/all-data", delete(videos::delete_all_videos))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
