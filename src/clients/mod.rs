/// The single-page API seam driven by the pagination loops
pub mod api;
/// Data entities for playlists, tracks and audio features
pub mod entities;
/// Error types and result aliases
pub mod errors;
/// Spotify Web API client
pub mod spotify;

pub use api::MusicApi;
pub use spotify::SpotifyClient;
