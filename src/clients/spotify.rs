use std::{collections::HashMap, path::PathBuf};

use log::{debug, warn};
use rspotify::{
    AuthCodeSpotify, Config, Credentials, OAuth,
    model::{
        AudioFeatures, PlayableItem, PlaylistId, PlaylistItem, SimplifiedPlaylist,
        TrackId as SpotifyTrackId, UserId,
    },
    prelude::*,
    scopes,
};

use crate::clients::{
    api::MusicApi,
    entities::{AudioFeatureRecord, Page, Playlist, TrackId},
    errors::{Error, Result},
};

impl From<SimplifiedPlaylist> for Playlist {
    fn from(p: SimplifiedPlaylist) -> Playlist {
        Playlist {
            id: p.id.id().to_string(),
            name: p.name,
        }
    }
}

impl From<AudioFeatures> for AudioFeatureRecord {
    fn from(f: AudioFeatures) -> AudioFeatureRecord {
        AudioFeatureRecord {
            id: f.id.id().to_string(),
            // Minor = 0, Major = 1, NoResult = -1
            mode: Some(f.mode as i32),
        }
    }
}

// Local files and podcast episodes carry no track id
fn track_id_of(item: PlaylistItem) -> Option<TrackId> {
    match item.track {
        Some(PlayableItem::Track(track)) => track.id.map(|id| id.id().to_string()),
        _ => None,
    }
}

/// Production [`MusicApi`] adapter backed by rspotify's authorization code flow.
pub struct SpotifyClient {
    pub spotify: AuthCodeSpotify,
    username: String,
}

impl SpotifyClient {
    pub fn new(spotify: AuthCodeSpotify, username: &str) -> Self {
        SpotifyClient {
            spotify,
            username: username.to_string(),
        }
    }

    // Authorize the Spotify client via CLI prompt and OAuth flow
    // This function requires the `cli` feature enabled.
    pub async fn authorize_client(&self) -> Result<()> {
        debug!("Starting Spotify authorization for {} ...", self.username);
        let url = self.spotify.get_authorize_url(false)?;
        if let Err(e) = self.spotify.prompt_for_token(&url).await {
            debug!("Token prompt failed: {e}");
            return Err(Error::MissingToken {
                username: self.username.clone(),
            });
        }
        let user = self.spotify.me().await?;
        debug!("Authenticated as user: {:?}", user.display_name);
        Ok(())
    }

    // Create a SpotifyClient from environment variables or raise a configuration error
    pub fn try_default(username: &str) -> Result<Self> {
        let missing_creds =
            "Missing RSPOTIFY_CLIENT_ID or RSPOTIFY_CLIENT_SECRET in environment variables.";
        let creds = Credentials::from_env()
            .ok_or_else(|| Error::ConfigurationError(missing_creds.into()))?;

        let missing_redirect = "Missing RSPOTIFY_REDIRECT_URI in environment variables.";
        let oauth = OAuth::from_env(scopes!(
            "playlist-read-private",
            "playlist-read-collaborative",
            "playlist-modify-public",
            "playlist-modify-private"
        ))
        .ok_or_else(|| Error::ConfigurationError(missing_redirect.into()))?;

        // One token cache per user
        let cache_path = dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp")) // Fallback to /tmp if cache directory can't be determined
            .join(format!(".spfy_mode_cache-{username}"));

        let spotify = AuthCodeSpotify::with_config(
            creds,
            oauth,
            Config {
                token_cached: true,
                cache_path,
                ..Default::default()
            },
        );

        Ok(Self::new(spotify, username))
    }
}

impl MusicApi for SpotifyClient {
    async fn user_playlists(
        &self,
        username: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Page<Playlist>> {
        let user_id = UserId::from_id(username)?;
        let page = self
            .spotify
            .user_playlists_manual(user_id, Some(limit), Some(offset))
            .await?;
        Ok(Page {
            items: page.items.into_iter().map(Playlist::from).collect(),
            total: page.total,
        })
    }

    async fn playlist_track_ids(
        &self,
        playlist: &Playlist,
        limit: u32,
        offset: u32,
    ) -> Result<Page<TrackId>> {
        let playlist_id = PlaylistId::from_id(playlist.id.as_str())?;
        // The typed page model needs full items, so no field selector is sent
        let page = self
            .spotify
            .playlist_items_manual(playlist_id, None, None, Some(limit), Some(offset))
            .await?;

        let received = page.items.len();
        let items: Vec<TrackId> = page.items.into_iter().filter_map(track_id_of).collect();
        if items.len() < received {
            warn!(
                "Skipped {} items without a track id in playlist {:?}",
                received - items.len(),
                playlist.name
            );
        }
        Ok(Page {
            items,
            total: page.total,
        })
    }

    // Deprecated upstream, yet still the only source of track modes
    #[allow(deprecated)]
    async fn audio_features(&self, track_ids: &[TrackId]) -> Result<Vec<AudioFeatureRecord>> {
        let ids = track_ids
            .iter()
            .map(|id| SpotifyTrackId::from_id(id.as_str()))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let features = self.spotify.tracks_features(ids).await?;

        // rspotify drops null entries, so match records back by id
        let modes: HashMap<TrackId, Option<i32>> = features
            .unwrap_or_default()
            .into_iter()
            .map(AudioFeatureRecord::from)
            .map(|record| (record.id, record.mode))
            .collect();
        let missing = track_ids.iter().filter(|id| !modes.contains_key(*id)).count();
        if missing > 0 {
            warn!(
                "No audio features returned for {missing} of {} tracks",
                track_ids.len()
            );
        }

        Ok(track_ids
            .iter()
            .map(|id| AudioFeatureRecord {
                id: id.clone(),
                mode: modes.get(id).copied().flatten(),
            })
            .collect())
    }
}
