use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::{anyhow, Context};
use clap::Parser;
use coursegrid::{
    catalog::Catalog,
    routes::{self, AppState},
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
/// Serves a responsive grid of course cards.
struct Args {
    /// JSON file holding an array of courses
    #[arg(long, env = "COURSEGRID_CATALOG", default_value = "courses.json")]
    catalog: PathBuf,

    /// Address to listen on
    #[arg(long, env = "COURSEGRID_BIND", default_value = "0.0.0.0:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                [
                    "backend=debug",         // code in this file
                    "coursegrid=debug",      // code in this crate (but not this file)
                    "tower_http=debug",      // http request/response pairs
                    "axum::rejection=trace", // extractor rejections (i.e. bad path params)
                ]
                .join(",")
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let catalog = Catalog::load(&args.catalog).await?;
    let app = routes::make_app(Arc::new(AppState::new(catalog)));

    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| anyhow!("failed to bind listener to {}", args.bind))?;
    info!("listening on http://{}", &args.bind);

    axum::serve(listener, app)
        .await
        .context("error while serving app")?;

    Ok(())
}
