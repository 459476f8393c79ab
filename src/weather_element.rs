use dioxus::prelude::*;

use weather_dashboard_common::{weather_element::App, DashboardData};

static STYLE: &str = include_str!("../templates/style.css");
static WEATHER_ICONS_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/weather-icons/2.0.12/css/weather-icons.min.css";

/// Render the full dashboard page.
#[must_use]
pub fn index_page(title: &str, data: &DashboardData, selected_date: Option<i64>) -> String {
    let location = data.location.clone();
    let forecasts = data.forecasts.clone();

    let body = dioxus_ssr::render_element(rsx! {
        head {
            meta { charset: "utf-8" }
            title { "{title}" }
            link { rel: "stylesheet", href: WEATHER_ICONS_CSS }
            style { {STYLE} }
        }
        body {
            App {
                location: location,
                forecasts: forecasts,
                selected_date: selected_date,
            }
        }
    });

    let mut page = String::with_capacity(body.len() + 32);
    page.push_str("<!DOCTYPE html>\n<html>");
    page.push_str(&body);
    page.push_str("</html>\n");
    page
}
