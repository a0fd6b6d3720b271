use axum::extract::{Query, State};
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::Value;

use super::{parse_id_param, ServiceError, ServiceResult};
use crate::logic::album::{create_album, get_album};
use crate::models::{Album, NewAlbum};
use crate::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/album", post(post_album_handler).get(get_album_handler))
}

fn has_missing_parameters(body: &Value) -> bool {
    body.get("artistId").is_none()
        || body.get("name").is_none()
        || body.get("label").is_none()
        || body.get("year").is_none()
        || body.get("songs").is_none()
}

fn has_invalid_parameters(body: &Value) -> bool {
    if !body["name"].is_string()
        || !body["label"].is_string()
        || !body["artistId"].is_i64()
        || !body["year"].is_i64()
    {
        return true;
    }

    // every entry of `songs` has to be a well-formed song
    match body["songs"].as_array() {
        Some(songs) => !songs
            .iter()
            .all(|song| song["id"].is_i64() && song["name"].is_string()),
        None => true,
    }
}

pub async fn post_album_handler(
    State(state): State<ServerState>,
    Json(body): Json<Value>,
) -> ServiceResult<Json<Album>> {
    if has_missing_parameters(&body) {
        return Err(ServiceError::MissingParameter);
    }
    if has_invalid_parameters(&body) {
        return Err(ServiceError::InvalidParameter);
    }

    let new_album: NewAlbum = serde_json::from_value(body)?;
    let album = create_album(&state.albums, &state.artists, new_album)
        .await
        .map_err(|err| ServiceError::BadRequest {
            message: err.to_string().into(),
        })?;
    Ok(Json(album))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAlbumParams {
    album_id: Option<String>,
}

pub async fn get_album_handler(
    State(state): State<ServerState>,
    Query(params): Query<GetAlbumParams>,
) -> ServiceResult<Json<Option<Album>>> {
    let album_id = parse_id_param(params.album_id.as_deref())?;
    Ok(Json(get_album(&state.albums, album_id).await))
}
