use std::process::ExitCode;

use clap::Parser;
use log::info;
use spfy_mode::{
    analyzer::{Analyzer, ConfigBuilder, DEFAULT_PLAYLIST_NAME},
    clients::{SpotifyClient, errors::Result},
};

#[derive(Parser, Debug)]
#[command(name = "spfy-mode")]
#[command(version, about = "Major/minor mode breakdown of Spotify playlists", long_about = None)]
struct Cli {
    /// Spotify username whose playlists are analysed
    #[arg(env = "SPFY_MODE_USERNAME")]
    username: Option<String>,

    /// Exact name of a playlist to analyse; can be repeated
    #[arg(long = "playlist", value_name = "NAME", default_value = DEFAULT_PLAYLIST_NAME)]
    playlists: Vec<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

pub async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // An empty variable counts as missing
    let Some(username) = cli.username.filter(|u| !u.is_empty()) else {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
        println!("Usage: {program} username");
        return Ok(ExitCode::FAILURE);
    };

    let config = ConfigBuilder::new()
        .target_playlist_names(cli.playlists)
        .build()?;

    info!("Authorizing Spotify client ...");
    let spotify = SpotifyClient::try_default(&username)?;
    // CLI prompt may be shown on this call
    spotify.authorize_client().await?;

    let report = Analyzer::new(spotify, config).run(&username).await?;
    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        println!("{report}");
    }
    Ok(ExitCode::SUCCESS)
}
