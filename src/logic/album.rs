use thiserror::Error;

use crate::models::{Album, Artist, NewAlbum};
use crate::repository::Repository;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LinkError {
    #[error("Artist ID not found! Please create the artist in the system.")]
    ArtistNotFound,
}

/// Persists a new album and links its id into the referenced artist's
/// album list. The referenced artist must exist; no id is taken from the
/// sequence and nothing is written otherwise.
pub async fn create_album(
    albums: &impl Repository<Album>,
    artists: &impl Repository<Artist>,
    new_album: NewAlbum,
) -> Result<Album, LinkError> {
    let mut artist = artists
        .find(new_album.artist_id)
        .await
        .ok_or(LinkError::ArtistNotFound)?;

    let album = Album::new(albums.next_id().await, new_album);
    albums.create(album.clone()).await;

    artist.albums.push(album.id);
    artists.update(artist).await;

    Ok(album)
}

/// A miss is not an error, the caller gets `None`.
pub async fn get_album(albums: &impl Repository<Album>, album_id: i64) -> Option<Album> {
    albums.find(album_id).await
}
