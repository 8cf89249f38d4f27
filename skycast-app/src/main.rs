use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{routing::get, Router};
use skycast_client::{ApiBroker, ClientConfig};
use skycast_core::{DataBroker, ListChangedNotifier, ListViewService, WeatherForecast};
use skycast_store::{seed_forecasts, LocalBroker, WeatherStore};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use config::{Backend, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skycast=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting skycast");

    let config = Config::load()?;
    tracing::info!(backend = ?config.backend, "Configuration loaded");

    match config.backend {
        Backend::Local => serve(config).await,
        Backend::Api => page_through(config).await,
    }
}

/// Seed the in-memory store and host the list API over a local broker.
async fn serve(config: Config) -> Result<()> {
    let store = WeatherStore::new();
    store.load_if_empty(seed_forecasts(config.seed_count)).await;
    tracing::info!(seed_count = config.seed_count, "Store seeded");

    let state = skycast_api::AppState::new(Arc::new(LocalBroker::new(store)));

    let app = Router::new()
        .route("/health", get(health_check))
        .merge(skycast_api::routes(state))
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Drive a view service over the remote broker, paging through the full
/// forecast list with change notifications.
async fn page_through(config: Config) -> Result<()> {
    let broker = ApiBroker::new(ClientConfig::new(&config.api_base_url))?;

    let notifier = Arc::new(ListChangedNotifier::new());
    notifier.subscribe(|| tracing::info!("forecast list changed"));

    let view = ListViewService::<WeatherForecast>::new(
        Arc::new(broker) as Arc<dyn DataBroker<WeatherForecast>>,
        notifier,
    );

    let page_size = config.page_size.max(1);
    let mut start_index = 0;

    loop {
        let total = view.load_window_and_notify(start_index, page_size).await;
        let result = view.result();
        tracing::info!(
            start_index,
            fetched = result.items.len(),
            total,
            success = result.success,
            message = result.message.as_deref().unwrap_or(""),
            "fetched forecast page"
        );

        if !result.success || start_index + page_size >= total {
            break;
        }
        start_index += page_size;
    }

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
