use crate::map::models::LngLat;
use crate::view::consts::{
    BASEMAP_CENTER, BASEMAP_STYLE, BASEMAP_ZOOM, CAMERA_ALTITUDE, CAMERA_INERTIA,
    CAMERA_MOVE_SPEED, TERRAIN_MAX_ZOOM, TERRAIN_MIN_ZOOM, TERRAIN_OPACITY, TILESET_OPACITY,
    TILESET_POINT_SIZE,
};
use crate::view::templates::TileUrlTemplate;
use serde::Serialize;
use url::Url;

/// Everything the client needs to set up the map view and the 3D view.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    pub basemap: BasemapView,
    pub camera: FirstPersonCamera,
    pub terrain: TerrainLayer,
    pub tileset: TilesetLayer,
    pub pages: Vec<PageRoute>,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasemapView {
    pub style: String,
    pub center: LngLat,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

impl Default for BasemapView {
    fn default() -> Self {
        Self {
            style: BASEMAP_STYLE.to_string(),
            center: BASEMAP_CENTER,
            zoom: BASEMAP_ZOOM,
            pitch: 0.0,
            bearing: 0.0,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstPersonCamera {
    pub move_speed: f64,
    pub inertia: f64,
    pub position: [f64; 3],
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self {
            move_speed: CAMERA_MOVE_SPEED,
            inertia: CAMERA_INERTIA,
            position: [0.0, 0.0, CAMERA_ALTITUDE],
        }
    }
}

/// Linear RGB to elevation mapping of terrain-RGB tiles:
/// `r * r_scaler + g * g_scaler + b * b_scaler + offset` meters.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElevationDecoder {
    pub r_scaler: f64,
    pub g_scaler: f64,
    pub b_scaler: f64,
    pub offset: f64,
}

impl Default for ElevationDecoder {
    fn default() -> Self {
        Self {
            r_scaler: 6553.6,
            g_scaler: 25.6,
            b_scaler: 0.1,
            offset: -9965.0,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerrainLayer {
    pub elevation_data: TileUrlTemplate,
    pub texture: TileUrlTemplate,
    pub elevation_decoder: ElevationDecoder,
    pub min_zoom: u32,
    pub max_zoom: u32,
    pub opacity: f64,
}

impl TerrainLayer {
    pub fn new(elevation_data: TileUrlTemplate, texture: TileUrlTemplate) -> Self {
        Self {
            elevation_data,
            texture,
            elevation_decoder: ElevationDecoder::default(),
            min_zoom: TERRAIN_MIN_ZOOM,
            max_zoom: TERRAIN_MAX_ZOOM,
            opacity: TERRAIN_OPACITY,
        }
    }

    pub fn covers_zoom(&self, z: u32) -> bool {
        (self.min_zoom..=self.max_zoom).contains(&z)
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TilesetLayer {
    pub data: Url,
    pub point_size: f64,
    pub opacity: f64,
}

impl TilesetLayer {
    pub fn new(data: Url) -> Self {
        Self {
            data,
            point_size: TILESET_POINT_SIZE,
            opacity: TILESET_OPACITY,
        }
    }
}

/// Client-side pages.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Page {
    Dashboard,
    Score,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Dashboard, Page::Score];

    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "/",
            Page::Score => "/score",
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRoute {
    pub page: Page,
    pub path: &'static str,
}

impl From<Page> for PageRoute {
    fn from(page: Page) -> Self {
        Self {
            page,
            path: page.path(),
        }
    }
}
