use crate::models::{Artist, NewArtist};
use crate::repository::Repository;

/// Persists a new artist under the next id in the sequence. The input is
/// already validated at the boundary.
pub async fn create_artist(artists: &impl Repository<Artist>, new_artist: NewArtist) -> Artist {
    let artist = Artist::new(artists.next_id().await, new_artist);
    artists.create(artist.clone()).await;
    artist
}

/// A miss is not an error, the caller gets `None`.
pub async fn get_artist(artists: &impl Repository<Artist>, artist_id: i64) -> Option<Artist> {
    artists.find(artist_id).await
}
