use anyhow::Error;
use log::info;
use stack_string::format_sstr;
use std::sync::Arc;
use tokio::net::TcpListener;

use weather_dashboard_common::DashboardData;

use crate::{config::Config, dashboard_data::load_dashboard_data, routes::get_routes};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub data: Arc<DashboardData>,
}

/// # Errors
/// Returns error if forecast data fail to load, or the server fails to bind
pub async fn start_app(config: Config) -> Result<(), Error> {
    let data = load_dashboard_data(&config.data_path).await?;
    run_app(config, data).await
}

async fn run_app(config: Config, data: DashboardData) -> Result<(), Error> {
    let addr = format_sstr!("{}:{}", config.host, config.port);
    let app = AppState {
        config,
        data: Arc::new(data),
    };
    let router = get_routes(app);

    let listener = TcpListener::bind(addr.as_str()).await?;
    info!("listening on {addr}");
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
