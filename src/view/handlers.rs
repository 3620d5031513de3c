use crate::app_context::AppContext;
use crate::storage::rounds::HashMapRoundsStorage;
use crate::view::responses::{TerrainTileError, TerrainTileResponse, ViewConfigResponse};
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn config(
    State(app_context): State<AppContext<HashMapRoundsStorage>>,
) -> Json<ViewConfigResponse> {
    Json(ViewConfigResponse {
        error: false,
        view: app_context.view.as_ref().clone(),
    })
}

#[axum::debug_handler]
pub async fn terrain_tile(
    Path((z, x, y)): Path<(u32, u32, u32)>,
    State(app_context): State<AppContext<HashMapRoundsStorage>>,
) -> Json<TerrainTileResponse> {
    let terrain = &app_context.view.terrain;
    if !terrain.covers_zoom(z) {
        return Json(TerrainTileResponse {
            error: true,
            error_code: Some(TerrainTileError::ZoomOutOfRange),
            elevation_url: None,
            texture_url: None,
        });
    }
    Json(TerrainTileResponse {
        error: false,
        error_code: None,
        elevation_url: Some(terrain.elevation_data.expand(z, x, y)),
        texture_url: Some(terrain.texture.expand(z, x, y)),
    })
}
