use log::{debug, info, warn};

use crate::{
    clients::{
        api::{MAX_FEATURE_BATCH, MusicApi},
        errors::{Error, Result},
    },
    modes::{ModeReport, aggregate},
    pagination::{fetch_audio_features, filter_by_name, list_playlists, list_track_ids},
};

/// Playlist analysed when none is configured.
pub const DEFAULT_PLAYLIST_NAME: &str = "Ω";
/// Playlists requested per page.
pub const DEFAULT_PLAYLIST_PAGE_SIZE: u32 = 50;
/// Playlist items requested per page.
pub const DEFAULT_TRACK_PAGE_SIZE: u32 = 100;

// Configuration for the Analyzer struct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Exact, case-sensitive names of the playlists to analyse, in configured order
    pub target_playlist_names: Vec<String>,
    pub playlist_page_size: u32,
    pub track_page_size: u32,
    pub feature_batch_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            target_playlist_names: vec![DEFAULT_PLAYLIST_NAME.to_string()],
            playlist_page_size: DEFAULT_PLAYLIST_PAGE_SIZE,
            track_page_size: DEFAULT_TRACK_PAGE_SIZE,
            feature_batch_size: MAX_FEATURE_BATCH,
        }
    }
}

#[derive(Default)]
pub struct ConfigBuilder {
    target_playlist_names: Option<Vec<String>>,
    playlist_page_size: Option<u32>,
    track_page_size: Option<u32>,
    feature_batch_size: Option<usize>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn target_playlist_names(mut self, names: Vec<String>) -> Self {
        self.target_playlist_names = Some(names);
        self
    }

    #[must_use]
    pub fn playlist_page_size(mut self, size: u32) -> Self {
        self.playlist_page_size = Some(size);
        self
    }

    #[must_use]
    pub fn track_page_size(mut self, size: u32) -> Self {
        self.track_page_size = Some(size);
        self
    }

    #[must_use]
    pub fn feature_batch_size(mut self, size: usize) -> Self {
        self.feature_batch_size = Some(size);
        self
    }

    pub fn build(self) -> Result<Config> {
        let defaults = Config::default();

        // Duplicates are dropped, first occurrence keeps its position
        let mut target_playlist_names: Vec<String> = Vec::new();
        for name in self
            .target_playlist_names
            .unwrap_or(defaults.target_playlist_names)
        {
            if !target_playlist_names.contains(&name) {
                target_playlist_names.push(name);
            }
        }

        let playlist_page_size = self
            .playlist_page_size
            .unwrap_or(defaults.playlist_page_size);
        let track_page_size = self.track_page_size.unwrap_or(defaults.track_page_size);
        let feature_batch_size = self
            .feature_batch_size
            .unwrap_or(defaults.feature_batch_size);

        if playlist_page_size == 0 || track_page_size == 0 || feature_batch_size == 0 {
            return Err(Error::ConfigurationError(
                "page and batch sizes must be greater than zero".into(),
            ));
        }
        if feature_batch_size > MAX_FEATURE_BATCH {
            warn!(
                "Audio feature batch size {feature_batch_size} exceeds the API limit, using {MAX_FEATURE_BATCH}"
            );
        }

        Ok(Config {
            target_playlist_names,
            playlist_page_size,
            track_page_size,
            feature_batch_size: feature_batch_size.min(MAX_FEATURE_BATCH),
        })
    }
}

// Runs the whole pipeline against one authenticated API handle
pub struct Analyzer<A> {
    api: A,
    config: Config,
}

impl<A: MusicApi> Analyzer<A> {
    pub fn new(api: A, config: Config) -> Self {
        Analyzer { api, config }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Lists and filters the playlists of `username`, collects their track
    /// ids (one entry per appearance), fetches audio features and tallies
    /// modes.
    pub async fn run(&self, username: &str) -> Result<ModeReport> {
        let names = &self.config.target_playlist_names;
        info!("Listing playlists of {username} ...");
        let playlists = list_playlists(&self.api, username, self.config.playlist_page_size).await?;
        debug!("Found {} playlists", playlists.len());

        let selected = filter_by_name(playlists, names);
        for name in names {
            if !selected.iter().any(|p| &p.name == name) {
                warn!("No playlist named {name:?} found for {username}");
            }
        }
        info!("Selected {} playlists", selected.len());

        let mut track_ids = Vec::new();
        for playlist in &selected {
            let ids = list_track_ids(&self.api, playlist, self.config.track_page_size).await?;
            debug!("Playlist {:?} holds {} tracks", playlist.name, ids.len());
            track_ids.extend(ids);
        }

        info!("Fetching audio features for {} tracks ...", track_ids.len());
        let features =
            fetch_audio_features(&self.api, &track_ids, self.config.feature_batch_size).await?;
        let tally = aggregate(&features);

        Ok(ModeReport::new(names.clone(), track_ids.len(), tally))
    }
}
