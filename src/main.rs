use clap::Parser;
use cli::Args;
use std::process::ExitCode;
use thiserror::Error;

mod app_context;
mod auth;
mod cli;
mod health;
mod http;
mod logging;
mod map;
mod rounds;
mod storage;
mod view;

#[derive(Debug, Error)]
enum StartupError {
    #[error(transparent)]
    Auth(#[from] auth::AuthError),
    #[error(transparent)]
    Locations(#[from] map::locations::LocationsError),
    #[error(transparent)]
    View(#[from] view::templates::TemplateError),
    #[error("failed to serve on the listen address: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init();
    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "Server stopped.");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), StartupError> {
    auth::init(&args)?;
    let locations = map::init(&args)?;
    let view = view::init(&args)?;
    let app_context = app_context::init(locations, view);
    let router = http::router::new(&args, app_context);
    let listener = tokio::net::TcpListener::bind(args.listen_address).await?;
    tracing::info!(listen_address = %args.listen_address, "Listening.");
    axum::serve(listener, router).await?;
    Ok(())
}
