//! Offset-based pagination loops over a [`MusicApi`].
//!
//! Each loop keeps requesting pages until the server-reported `total` is
//! covered and returns every item in server order.

use log::debug;

use crate::clients::{
    api::{MAX_FEATURE_BATCH, MusicApi},
    entities::{AudioFeatureRecord, Playlist, TrackId},
    errors::Result,
};

/// Every playlist of `username`, fetched `page_size` at a time.
pub async fn list_playlists<A: MusicApi>(
    api: &A,
    username: &str,
    page_size: u32,
) -> Result<Vec<Playlist>> {
    let mut playlists = Vec::new();
    let mut offset = 0;
    loop {
        let page = api.user_playlists(username, page_size, offset).await?;
        debug!(
            "Fetched {} playlists at offset {offset} (total {})",
            page.items.len(),
            page.total
        );
        playlists.extend(page.items);
        if page.total <= offset.saturating_add(page_size) {
            break;
        }
        offset += page_size;
    }
    Ok(playlists)
}

/// Every track id of `playlist`, fetched `page_size` at a time.
pub async fn list_track_ids<A: MusicApi>(
    api: &A,
    playlist: &Playlist,
    page_size: u32,
) -> Result<Vec<TrackId>> {
    let mut track_ids = Vec::new();
    let mut offset = 0;
    loop {
        let page = api.playlist_track_ids(playlist, page_size, offset).await?;
        debug!(
            "Fetched {} track ids of {:?} at offset {offset} (total {})",
            page.items.len(),
            playlist.name,
            page.total
        );
        track_ids.extend(page.items);
        if page.total <= offset.saturating_add(page_size) {
            break;
        }
        offset += page_size;
    }
    Ok(track_ids)
}

/// Keeps the playlists whose name is exactly one of `allowed_names`.
pub fn filter_by_name(playlists: Vec<Playlist>, allowed_names: &[String]) -> Vec<Playlist> {
    playlists
        .into_iter()
        .filter(|p| allowed_names.contains(&p.name))
        .collect()
}

/// Audio features for `track_ids`, requested in consecutive chunks of at
/// most `batch_size` ids. An empty input issues no request.
pub async fn fetch_audio_features<A: MusicApi>(
    api: &A,
    track_ids: &[TrackId],
    batch_size: usize,
) -> Result<Vec<AudioFeatureRecord>> {
    let batch_size = batch_size.clamp(1, MAX_FEATURE_BATCH);
    let mut features = Vec::with_capacity(track_ids.len());
    for chunk in track_ids.chunks(batch_size) {
        if features.len() >= track_ids.len() {
            break;
        }
        features.extend(api.audio_features(chunk).await?);
    }
    debug!(
        "Fetched {} audio feature records for {} tracks",
        features.len(),
        track_ids.len()
    );
    Ok(features)
}
