use serde::{Deserialize, Serialize};

/// Opaque Spotify track identifier. Never validated client side.
pub type TrackId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
}

/// Audio features of one track. Only `mode` is consumed; `None` covers both
/// a missing record and a value the API could not determine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioFeatureRecord {
    pub id: TrackId,
    #[serde(default)]
    pub mode: Option<i32>,
}

/// One page of an offset-paginated listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Server-side count of every item across all pages
    pub total: u32,
}
