use axum::routing::get;
use axum::Router;

use crate::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(hello_handler))
}

pub async fn hello_handler() -> &'static str {
    "hello world!"
}
