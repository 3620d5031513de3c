use crate::cli::Args;
use locations::{LocationPool, LocationsError};

pub mod consts;
pub mod distance;
pub mod locations;
pub mod models;

pub fn init(args: &Args) -> Result<LocationPool, LocationsError> {
    let pool = match &args.locations {
        Some(path) => LocationPool::load(path)?,
        None => LocationPool::builtin(),
    };
    tracing::info!(
        locations_count = pool.len(),
        source = ?args.locations,
        "Initialized the locations pool."
    );
    Ok(pool)
}
