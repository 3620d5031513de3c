use crate::cli::Args;
use models::{
    BasemapView, FirstPersonCamera, Page, PageRoute, TerrainLayer, TilesetLayer, ViewConfig,
};
use templates::{TemplateError, TileUrlTemplate};

pub mod consts;
pub mod handlers;
pub mod models;
pub mod responses;
pub mod templates;

pub fn init(args: &Args) -> Result<ViewConfig, TemplateError> {
    let terrain = TerrainLayer::new(
        TileUrlTemplate::parse(&args.terrain_elevation_url)?,
        TileUrlTemplate::parse(&args.terrain_texture_url)?,
    );
    tracing::info!(
        tileset = %args.tileset_url,
        "Initialized the view configuration."
    );
    Ok(ViewConfig {
        basemap: BasemapView::default(),
        camera: FirstPersonCamera::default(),
        terrain,
        tileset: TilesetLayer::new(args.tileset_url.clone()),
        pages: Page::ALL.into_iter().map(PageRoute::from).collect(),
    })
}
