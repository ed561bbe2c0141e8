// src/main.rs
mod config;
mod error;
mod handlers;
mod middleware;
mod models;
mod routes;
mod services;
mod storage;
mod templates;
mod ui;
mod utils;

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::models::ContactInfo;
use crate::routes::create_router;
use crate::services::loader::DataLoader;
use crate::services::resources;
use crate::storage::{AssetSource, DirSource, HttpSource};
use crate::templates::{RenderContext, Shell};

pub struct AppState {
    pub config: Config,
    pub loader: DataLoader,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn AssetSource>) -> Self {
        let loader = DataLoader::new(source, config.cache_capacity, config.load_deadline);
        Self { config, loader }
    }

    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext {
            fallback_image: &self.config.fallback_image,
            page_size: self.config.page_size,
        }
    }

    pub fn shell<'a>(&'a self, contact: Option<&'a ContactInfo>, active: &'a str) -> Shell<'a> {
        Shell {
            site_name: &self.config.site_name,
            contact,
            active,
        }
    }
}

fn asset_source(config: &Config) -> anyhow::Result<Arc<dyn AssetSource>> {
    Ok(match &config.asset_base_url {
        Some(base) => Arc::new(
            HttpSource::new(base, config.fetch_timeout)
                .with_context(|| format!("invalid ASSET_BASE_URL {}", base))?,
        ),
        None => Arc::new(DirSource::new(config.asset_dir.clone())),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()
        .map_err(|err| anyhow::anyhow!("invalid configuration: {}", err))?;
    let addr = config.server_addr().context("invalid HOST/PORT")?;

    let source = asset_source(&config)?;
    tracing::info!(source = %source.describe(), "asset data store");

    let state = Arc::new(AppState::new(config, source));

    // warm the documents every page shell needs
    let loader = state.loader.clone();
    tokio::spawn(async move {
        loader.prefetch(resources::SHARED).await;
    });

    let app = create_router(state.clone());

    tracing::info!("{} listening on http://{}", state.config.site_name, addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
