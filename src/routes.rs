use axum::{
    extract::{Query, State},
    routing::get,
    Router,
};
use log::debug;
use serde::Deserialize;
use stack_string::format_sstr;

use crate::{
    app::AppState, errors::ServiceError as Error, html_response::HtmlResponse,
    weather_element::index_page,
};

type HttpResult<T> = Result<T, Error>;

#[derive(Deserialize, Debug, Default, Clone, Copy)]
pub struct IndexQuery {
    /// date of the forecast to show in detail
    pub date: Option<i64>,
}

/// Dashboard page, `?date=` selects the detailed forecast
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> HttpResult<HtmlResponse<String>> {
    debug!("index {query:?}");
    if let Some(date) = query.date {
        if state.data.forecasts.get(date).is_none() {
            return Err(Error::NotFound(format_sstr!("no forecast for date {date}")));
        }
    }
    let body = index_page(&state.config.title, &state.data, query.date);
    Ok(HtmlResponse::new(body))
}

pub fn get_routes(state: AppState) -> Router {
    Router::new()
        .route("/weather/index.html", get(index))
        .with_state(state)
}
