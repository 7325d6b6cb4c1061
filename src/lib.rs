//! Spfy-mode - major/minor breakdown of Spotify playlists
//!
//! This library lists a user's playlists, keeps the ones named in the
//! configuration, collects their tracks and reports which share of them is
//! written in a major or a minor key according to Spotify's audio features.

/// Analysis configuration and the end-to-end pipeline
pub mod analyzer;
/// Client modules for interacting with the Spotify Web API
pub mod clients;
/// Mode tally, percentages and report rendering
pub mod modes;
pub mod pagination;
