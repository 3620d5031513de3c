use crate::cli::Args;
use crate::view::consts::{TERRAIN_ELEVATION_URL, TERRAIN_TEXTURE_URL, TILESET_URL};
use clap::Parser;
use std::net::SocketAddr;
use std::str::FromStr;
use url::Url;

pub fn fake_args() -> Args {
    Args {
        listen_address: SocketAddr::from_str("0.0.0.0:3030")
            .expect("Failed to construct fake listen address."),
        jwt_signing_key: String::from("testKey"),
        locations: None,
        allowed_origins: vec![String::from("http://localhost:3000")],
        terrain_elevation_url: String::from(TERRAIN_ELEVATION_URL),
        terrain_texture_url: String::from(TERRAIN_TEXTURE_URL),
        tileset_url: Url::from_str(TILESET_URL).expect("Failed to construct fake tileset URL."),
    }
}

#[test]
fn test_defaults() {
    let args = Args::try_parse_from(["guessr-server", "--jwt-signing-key", "key"]).unwrap();

    assert_eq!(args.listen_address, SocketAddr::from(([0, 0, 0, 0], 3030)));
    assert_eq!(args.locations, None);
    assert_eq!(
        args.allowed_origins,
        vec!["http://127.0.0.1:3000", "http://localhost:3000"]
    );
    assert_eq!(args.terrain_elevation_url, TERRAIN_ELEVATION_URL);
    assert_eq!(args.tileset_url.as_str(), TILESET_URL);
}

#[test]
fn test_signing_key_is_required() {
    assert!(Args::try_parse_from(["guessr-server"]).is_err());
}

#[test]
fn test_repeated_allowed_origins() {
    let args = Args::try_parse_from([
        "guessr-server",
        "--jwt-signing-key",
        "key",
        "--allowed-origins",
        "https://a.example",
        "--allowed-origins",
        "https://b.example",
        "--locations",
        "pool.ndjson",
    ])
    .unwrap();

    assert_eq!(
        args.allowed_origins,
        vec!["https://a.example", "https://b.example"]
    );
    assert_eq!(args.locations, Some("pool.ndjson".into()));
}
