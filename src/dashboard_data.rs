use log::{debug, info};
use std::path::Path;
use tokio::fs::read;

use weather_dashboard_common::DashboardData;

use crate::errors::ServiceError as Error;

/// Parse and validate a forecast fixture.
///
/// # Errors
/// Return error if the json is malformed, a required field is missing,
/// a date repeats, or a minimum temperature exceeds the maximum
pub fn parse_dashboard_data(buf: &[u8]) -> Result<DashboardData, Error> {
    serde_json::from_slice(buf).map_err(Into::into)
}

/// # Errors
/// Return error if the file can't be read or fails validation
pub async fn load_dashboard_data(path: &Path) -> Result<DashboardData, Error> {
    debug!("loading forecasts from {}", path.display());
    let buf = read(path).await?;
    let data = parse_dashboard_data(&buf)?;
    info!(
        "loaded {} forecasts for {}, {}",
        data.forecasts.len(),
        data.location.city,
        data.location.country
    );
    Ok(data)
}
