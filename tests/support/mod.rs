#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use spfy_mode::clients::{
    api::MusicApi,
    entities::{AudioFeatureRecord, Page, Playlist, TrackId},
    errors::Result,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Playlists {
        username: String,
        limit: u32,
        offset: u32,
    },
    Tracks {
        playlist_id: String,
        limit: u32,
        offset: u32,
    },
    Features(Vec<TrackId>),
}

// In-memory API serving pre-built pages and recording every request
#[derive(Default)]
pub struct MockApi {
    playlist_pages: Vec<Page<Playlist>>,
    track_pages: HashMap<String, Vec<Page<TrackId>>>,
    modes: HashMap<TrackId, Option<i32>>,
    requests: Mutex<Vec<Request>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_playlist_pages(mut self, pages: Vec<Page<Playlist>>) -> Self {
        self.playlist_pages = pages;
        self
    }

    pub fn with_track_pages(mut self, playlist_id: &str, pages: Vec<Page<TrackId>>) -> Self {
        self.track_pages.insert(playlist_id.to_string(), pages);
        self
    }

    pub fn with_mode(mut self, track_id: &str, mode: Option<i32>) -> Self {
        self.modes.insert(track_id.to_string(), mode);
        self
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn feature_batches(&self) -> Vec<usize> {
        self.requests()
            .into_iter()
            .filter_map(|r| match r {
                Request::Features(ids) => Some(ids.len()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, request: Request) {
        self.requests.lock().unwrap().push(request);
    }
}

fn page_at<T: Clone>(pages: &[Page<T>], limit: u32, offset: u32) -> Page<T> {
    let index = (offset / limit) as usize;
    match pages.get(index) {
        Some(page) => page.clone(),
        None => Page {
            items: Vec::new(),
            total: pages.last().map_or(0, |p| p.total),
        },
    }
}

impl MusicApi for MockApi {
    async fn user_playlists(
        &self,
        username: &str,
        limit: u32,
        offset: u32,
    ) -> Result<Page<Playlist>> {
        self.record(Request::Playlists {
            username: username.to_string(),
            limit,
            offset,
        });
        Ok(page_at(&self.playlist_pages, limit, offset))
    }

    async fn playlist_track_ids(
        &self,
        playlist: &Playlist,
        limit: u32,
        offset: u32,
    ) -> Result<Page<TrackId>> {
        self.record(Request::Tracks {
            playlist_id: playlist.id.clone(),
            limit,
            offset,
        });
        let pages = self
            .track_pages
            .get(&playlist.id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        Ok(page_at(pages, limit, offset))
    }

    async fn audio_features(&self, track_ids: &[TrackId]) -> Result<Vec<AudioFeatureRecord>> {
        self.record(Request::Features(track_ids.to_vec()));
        Ok(track_ids
            .iter()
            .map(|id| AudioFeatureRecord {
                id: id.clone(),
                mode: self.modes.get(id).copied().flatten(),
            })
            .collect())
    }
}

pub fn playlist(id: &str, name: &str) -> Playlist {
    Playlist {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn track_ids(prefix: &str, count: usize) -> Vec<TrackId> {
    (0..count).map(|i| format!("{prefix}{i}")).collect()
}

/// Splits `items` into pages of `page_size`, each reporting the full total.
pub fn paged<T: Clone>(items: &[T], page_size: usize) -> Vec<Page<T>> {
    let total = u32::try_from(items.len()).unwrap();
    items
        .chunks(page_size)
        .map(|chunk| Page {
            items: chunk.to_vec(),
            total,
        })
        .collect()
}
