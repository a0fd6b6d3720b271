use serde::{Deserialize, Serialize};

use crate::repository::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(test, derive(fake::Dummy))]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(test, derive(fake::Dummy))]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: i64,
    /// Checked against the artist store when the album is created, never
    /// re-validated afterwards.
    pub artist_id: i64,
    pub name: String,
    pub label: String,
    pub year: i64,
    pub songs: Vec<Song>,
}

/// Shape of an album before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(test, derive(fake::Dummy))]
#[serde(rename_all = "camelCase")]
pub struct NewAlbum {
    pub artist_id: i64,
    pub name: String,
    pub label: String,
    pub year: i64,
    pub songs: Vec<Song>,
}

impl Record for Album {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Album {
    pub fn new(id: i64, new_album: NewAlbum) -> Self {
        Self {
            id,
            artist_id: new_album.artist_id,
            name: new_album.name,
            label: new_album.label,
            year: new_album.year,
            songs: new_album.songs,
        }
    }
}
