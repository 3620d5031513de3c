use crate::view::models::ViewConfig;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfigResponse {
    pub error: bool,
    pub view: ViewConfig,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TerrainTileResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<TerrainTileError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elevation_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture_url: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TerrainTileError {
    ZoomOutOfRange,
}
