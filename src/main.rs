use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fonoteca::api;
use fonoteca::config::Config;
use fonoteca::ServerState;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                [
                    format!("{}=info", env!("CARGO_PKG_NAME")),
                    "tower_http=info".to_owned(),
                ]
                .join(",")
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::new();
    tracing::info!("configuration: {:?}", config);

    // state
    let server_state = ServerState::new();

    // run it
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.server.host, config.server.port))
            .await
            .unwrap();
    tracing::info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app(server_state)).await.unwrap();
}

fn app(server_state: ServerState) -> Router {
    Router::new()
        // system
        .merge(api::system::router())
        // artist
        .merge(api::artist::router())
        // album
        .merge(api::album::router())
        // layer
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(server_state)
}
