use axum::extract::{Query, State};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use super::{parse_id_param, ServiceError, ServiceResult};
use crate::logic::artist::{create_artist, get_artist};
use crate::models::{Artist, NewArtist};
use crate::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route(
        "/artist",
        post(post_artist_handler).get(get_artist_handler),
    )
}

fn has_missing_parameters(body: &Value) -> bool {
    body.get("name").is_none()
        || body.get("isGroup").is_none()
        || body.get("nationality").is_none()
        || body.get("albums").is_none()
}

fn has_invalid_parameters(body: &Value) -> bool {
    if !body["name"].is_string() || !body["isGroup"].is_boolean() || !body["nationality"].is_string()
    {
        return true;
    }

    // every entry of `albums` has to be an album id
    match body["albums"].as_array() {
        Some(albums) => !albums.iter().all(Value::is_i64),
        None => true,
    }
}

pub async fn post_artist_handler(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> ServiceResult<Json<Artist>> {
    if has_missing_parameters(&body) {
        return Err(ServiceError::MissingParameter);
    }
    if has_invalid_parameters(&body) {
        return Err(ServiceError::InvalidParameter);
    }

    let new_artist: NewArtist = serde_json::from_value(body)?;
    Ok(Json(create_artist(&state.artists, new_artist).await))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetArtistParams {
    artist_id: Option<String>,
}

pub async fn get_artist_handler(
    State(state): State<ServerState>,
    Query(params): Query<GetArtistParams>,
) -> ServiceResult<Json<Option<Artist>>> {
    let artist_id = parse_id_param(params.artist_id.as_deref())?;
    Ok(Json(get_artist(&state.artists, artist_id).await))
}
