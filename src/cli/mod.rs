use crate::view::consts::{TERRAIN_ELEVATION_URL, TERRAIN_TEXTURE_URL, TILESET_URL};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
#[command(version, about = "Location guessing game server")]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    #[arg(long)]
    pub jwt_signing_key: String,
    /// NDJSON file with one `{"lng": .., "lat": ..}` per line. Built-in Tokyo pool if omitted.
    #[arg(long)]
    pub locations: Option<PathBuf>,
    #[arg(long)]
    #[arg(default_values = ["http://127.0.0.1:3000", "http://localhost:3000"])]
    pub allowed_origins: Vec<String>,
    #[arg(long)]
    #[arg(default_value = TERRAIN_ELEVATION_URL)]
    pub terrain_elevation_url: String,
    #[arg(long)]
    #[arg(default_value = TERRAIN_TEXTURE_URL)]
    pub terrain_texture_url: String,
    #[arg(long)]
    #[arg(default_value = TILESET_URL)]
    pub tileset_url: Url,
}
