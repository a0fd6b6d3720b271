use serde::{Deserialize, Serialize};

use crate::repository::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(test, derive(fake::Dummy))]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub is_group: bool,
    pub nationality: String,
    /// Album ids in creation order. Only ever appended to, by the album
    /// logic when a new album is linked.
    pub albums: Vec<i64>,
}

/// Shape of an artist before the store has assigned it an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(test, derive(fake::Dummy))]
#[serde(rename_all = "camelCase")]
pub struct NewArtist {
    pub name: String,
    pub is_group: bool,
    pub nationality: String,
    pub albums: Vec<i64>,
}

impl Record for Artist {
    fn id(&self) -> i64 {
        self.id
    }
}

impl Artist {
    pub fn new(id: i64, new_artist: NewArtist) -> Self {
        Self {
            id,
            name: new_artist.name,
            is_group: new_artist.is_group,
            nationality: new_artist.nationality,
            albums: new_artist.albums,
        }
    }
}
