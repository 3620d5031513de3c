use crate::map::models::LngLat;

pub const BASEMAP_STYLE: &str = "geolonia/midnight";
pub const BASEMAP_CENTER: LngLat = LngLat::new(139.7673068, 35.6809591);
pub const BASEMAP_ZOOM: f64 = 14.0;

pub const TERRAIN_ELEVATION_URL: &str =
    "https://tileserver-dev.geolonia.com/gsi-dem/tiles/{z}/{x}/{y}.png";
pub const TERRAIN_TEXTURE_URL: &str =
    "https://cyberjapandata.gsi.go.jp/xyz/seamlessphoto/{z}/{x}/{y}.jpg";
pub const TERRAIN_MIN_ZOOM: u32 = 0;
pub const TERRAIN_MAX_ZOOM: u32 = 14;
pub const TERRAIN_OPACITY: f64 = 0.5;

pub const TILESET_URL: &str =
    "https://raw.githubusercontent.com/naogify/deckgl-3d-tiles/main/tileset.json";
pub const TILESET_POINT_SIZE: f64 = 1.0;
pub const TILESET_OPACITY: f64 = 0.8;

pub const CAMERA_MOVE_SPEED: f64 = 100.0;
pub const CAMERA_INERTIA: f64 = 1.0;
/// Meters above the view state origin.
pub const CAMERA_ALTITUDE: f64 = 70.0;
