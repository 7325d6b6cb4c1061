use std::future::Future;

use crate::clients::{
    entities::{AudioFeatureRecord, Page, Playlist, TrackId},
    errors::Result,
};

/// Most track ids the audio-features endpoint accepts per request.
pub const MAX_FEATURE_BATCH: usize = 50;

/// Single-page access to the music Web API.
///
/// Implementors translate exactly one request into one typed response and
/// never paginate on their own; the loops in [`crate::pagination`] own that.
pub trait MusicApi {
    /// One page of the playlists owned or followed by `username`.
    fn user_playlists(
        &self,
        username: &str,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Page<Playlist>>> + Send;

    /// One page of track ids contained in `playlist`.
    fn playlist_track_ids(
        &self,
        playlist: &Playlist,
        limit: u32,
        offset: u32,
    ) -> impl Future<Output = Result<Page<TrackId>>> + Send;

    /// Audio features for at most [`MAX_FEATURE_BATCH`] ids, one record per
    /// id in request order.
    fn audio_features(
        &self,
        track_ids: &[TrackId],
    ) -> impl Future<Output = Result<Vec<AudioFeatureRecord>>> + Send;
}
