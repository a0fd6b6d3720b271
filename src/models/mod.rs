pub mod albums;
pub mod artists;

pub use albums::{Album, NewAlbum, Song};
pub use artists::{Artist, NewArtist};
