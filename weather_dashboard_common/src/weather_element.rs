use dioxus::prelude::*;
use log::debug;
use stack_string::{format_sstr, StackString};
use time::{macros::format_description, OffsetDateTime};

use crate::model::{Forecast, ForecastList, Icon, Location, Temperature};

pub static GREETING: &str = "Welcome to the weather app";

fn forecast_datetime(date: i64) -> Option<OffsetDateTime> {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(date) * 1_000_000).ok()
}

/// Short day label such as `Mon 30 Apr`, falls back to the raw timestamp
#[must_use]
pub fn format_date(date: i64) -> StackString {
    forecast_datetime(date)
        .and_then(|dt| {
            dt.format(format_description!(
                "[weekday repr:short] [day padding:none] [month repr:short]"
            ))
            .ok()
        })
        .map_or_else(|| format_sstr!("{date}"), Into::into)
}

/// Long day label such as `Monday 30 April`
#[must_use]
pub fn format_long_date(date: i64) -> StackString {
    forecast_datetime(date)
        .and_then(|dt| {
            dt.format(format_description!(
                "[weekday repr:long] [day padding:none] [month repr:long]"
            ))
            .ok()
        })
        .map_or_else(|| format_sstr!("{date}"), Into::into)
}

#[component]
pub fn LocationDetails(
    #[props(into)] city: StackString,
    #[props(into)] country: StackString,
) -> Element {
    rsx! {
        h1 { class: "location-details", "{city}, {country}" }
    }
}

#[component]
pub fn ForecastSummary(
    date: i64,
    temperature: Temperature,
    #[props(into)] description: StackString,
    icon: Icon,
    #[props(default)] selected: bool,
) -> Element {
    let date_str = format_date(date);
    let max = temperature.max;
    let class = if selected {
        "forecast-summary forecast-summary--selected"
    } else {
        "forecast-summary"
    };

    rsx! {
        div { class: "{class}",
            div { class: "forecast-summary__date", "{date_str}" }
            div { class: "forecast-summary__icon",
                i { class: "wi wi-owm-{icon}" }
            }
            div { class: "forecast-summary__temperature", "{max}°C" }
            div { class: "forecast-summary__description", "{description}" }
            a { class: "forecast-summary__more", href: "?date={date}", "More details" }
        }
    }
}

/// One summary card per forecast, in list order, keyed by date
#[component]
pub fn ForecastSummaries(
    #[props(default)] forecasts: ForecastList,
    #[props(!optional)] selected_date: Option<i64>,
) -> Element {
    rsx! {
        div { class: "forecast-summaries",
            {
                forecasts.iter().map(|forecast| {
                    let date = forecast.date;
                    rsx! {
                        ForecastSummary {
                            key: "{date}",
                            date: date,
                            temperature: forecast.temperature,
                            description: forecast.description.clone(),
                            icon: forecast.icon.clone(),
                            selected: selected_date == Some(date),
                        }
                    }
                })
            }
        }
    }
}

#[component]
pub fn ForecastDetails(forecast: Forecast) -> Element {
    let date_str = format_long_date(forecast.date);
    let Temperature { max, min } = forecast.temperature;
    let description = &forecast.description;
    let humidity = forecast.humidity.map(|h| format_sstr!("Humidity: {h}%"));
    let wind = forecast
        .wind
        .as_ref()
        .map(|w| format_sstr!("Wind: {}mph {}", w.speed, w.direction));

    rsx! {
        div { class: "forecast-details",
            div { class: "forecast-details__date", "{date_str}" }
            div { class: "forecast-details__max-temperature", "Max Temperature: {max}°C" }
            div { class: "forecast-details__min-temperature", "Min Temperature: {min}°C" }
            div { class: "forecast-details__description", "{description}" }
            {
                humidity.map(|humidity| rsx! {
                    div { class: "forecast-details__humidity", "{humidity}" }
                })
            }
            {
                wind.map(|wind| rsx! {
                    div { class: "forecast-details__wind", "{wind}" }
                })
            }
        }
    }
}

/// Dashboard root.
///
/// `selected_date` picks the forecast shown in [`ForecastDetails`]; when it
/// is `None` or not in `forecasts` the first forecast is shown instead.
#[component]
pub fn App(
    location: Location,
    #[props(default)] forecasts: ForecastList,
    #[props(!optional)] selected_date: Option<i64>,
) -> Element {
    let Location { city, country } = location;
    let selected = forecasts.select(selected_date).cloned();
    let selected_date = selected.as_ref().map(|f| f.date);
    debug!("render {city}, {country} selected {selected_date:?}");

    rsx! {
        div { class: "weather-app",
            p { class: "weather-app__greeting", "{GREETING}" }
            LocationDetails { city: city, country: country }
            ForecastSummaries { forecasts: forecasts.clone(), selected_date: selected_date }
            {
                selected.map(|forecast| rsx! {
                    ForecastDetails { forecast: forecast }
                })
            }
        }
    }
}

#[cfg(test)]
mod test {
    use anyhow::Error;
    use dioxus::prelude::*;

    use crate::{
        model::{Forecast, ForecastList, Icon, Location, Temperature, Wind},
        weather_element::{
            format_date, format_long_date, App, ForecastDetails, ForecastSummaries,
            LocationDetails,
        },
    };

    fn forecast(date: i64, description: &str, max: f64, min: f64) -> Forecast {
        Forecast {
            date,
            description: description.into(),
            icon: Icon::Code(800),
            temperature: Temperature { max, min },
            humidity: None,
            wind: None,
        }
    }

    fn manchester() -> Location {
        Location {
            city: "Manchester".into(),
            country: "UK".into(),
        }
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(1_525_046_400_000).as_str(), "Mon 30 Apr");
        assert_eq!(format_long_date(1_525_046_400_000).as_str(), "Monday 30 April");
        assert_eq!(format_date(1).as_str(), "Thu 1 Jan");
        assert_eq!(format_date(i64::MAX).as_str(), "9223372036854775807");
    }

    #[test]
    fn test_location_details() {
        let html = dioxus_ssr::render_element(rsx! {
            LocationDetails { city: "Manchester", country: "UK" }
        });
        assert!(html.contains("Manchester, UK"));
    }

    #[test]
    fn test_forecast_summaries_empty() {
        let html = dioxus_ssr::render_element(rsx! {
            ForecastSummaries { forecasts: ForecastList::default(), selected_date: None }
        });
        assert!(html.contains("forecast-summaries"));
        assert_eq!(html.matches("forecast-summary__date").count(), 0);
    }

    #[test]
    fn test_forecast_summaries_single() -> Result<(), Error> {
        let forecasts = ForecastList::new(vec![Forecast {
            icon: Icon::Code(0),
            ..forecast(1, "Sunny", 20.0, 10.0)
        }])?;
        let html = dioxus_ssr::render_element(rsx! {
            ForecastSummaries { forecasts: forecasts, selected_date: None }
        });
        assert_eq!(html.matches("forecast-summary__date").count(), 1);
        assert!(html.contains("Thu 1 Jan"));
        assert!(html.contains("Sunny"));
        assert!(html.contains("wi-owm-0"));
        assert!(html.contains("20°C"));
        assert!(html.contains("?date=1"));
        assert!(!html.contains("forecast-summary--selected"));
        Ok(())
    }

    #[test]
    fn test_forecast_summaries_preserve_order() -> Result<(), Error> {
        let forecasts = ForecastList::new(vec![
            forecast(300, "Third", 3.0, 1.0),
            forecast(100, "First", 3.0, 1.0),
            forecast(200, "Second", 3.0, 1.0),
        ])?;
        let html = dioxus_ssr::render_element(rsx! {
            ForecastSummaries { forecasts: forecasts, selected_date: Some(100) }
        });
        assert_eq!(html.matches("forecast-summary__date").count(), 3);
        let third = html.find("Third").unwrap();
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(third < first);
        assert!(first < second);
        assert_eq!(html.matches("forecast-summary--selected").count(), 1);
        Ok(())
    }

    #[test]
    fn test_forecast_details() {
        let forecast = Forecast {
            humidity: Some(30.0),
            wind: Some(Wind {
                speed: 12.0,
                direction: "ne".into(),
            }),
            ..forecast(1_525_046_400_000, "Clear Sky", 22.0, 14.5)
        };
        let html = dioxus_ssr::render_element(rsx! {
            ForecastDetails { forecast: forecast }
        });
        assert!(html.contains("Monday 30 April"));
        assert!(html.contains("Max Temperature: 22°C"));
        assert!(html.contains("Min Temperature: 14.5°C"));
        assert!(html.contains("Clear Sky"));
        assert!(html.contains("Humidity: 30%"));
        assert!(html.contains("Wind: 12mph ne"));
    }

    #[test]
    fn test_forecast_details_without_extras() {
        let forecast = forecast(1, "Fog", 5.0, 1.0);
        let html = dioxus_ssr::render_element(rsx! {
            ForecastDetails { forecast: forecast }
        });
        assert!(!html.contains("Humidity"));
        assert!(!html.contains("Wind"));
    }

    #[test]
    fn test_app() -> Result<(), Error> {
        let forecasts = ForecastList::new(vec![
            forecast(1_525_046_400_000, "Clear Sky", 20.0, 10.0),
            forecast(1_525_132_800_000, "Light Rain", 15.0, 8.0),
        ])?;
        let html = dioxus_ssr::render_element(rsx! {
            App { location: manchester(), forecasts: forecasts, selected_date: Some(1_525_132_800_000) }
        });
        assert!(html.to_lowercase().contains("weather app"));
        assert!(html.contains("Manchester, UK"));
        assert_eq!(html.matches("forecast-summary__date").count(), 2);
        assert!(html.contains("forecast-details"));
        assert!(html.contains("Tuesday 1 May"));
        assert!(html.contains("Max Temperature: 15°C"));
        assert!(html.contains("Min Temperature: 8°C"));
        Ok(())
    }

    #[test]
    fn test_app_defaults_to_first_forecast() -> Result<(), Error> {
        let forecasts = ForecastList::new(vec![
            forecast(1_525_046_400_000, "Clear Sky", 20.0, 10.0),
            forecast(1_525_132_800_000, "Light Rain", 15.0, 8.0),
        ])?;
        let html = dioxus_ssr::render_element(rsx! {
            App { location: manchester(), forecasts: forecasts, selected_date: None }
        });
        assert!(html.contains("Monday 30 April"));
        assert!(!html.contains("Tuesday 1 May"));
        Ok(())
    }

    #[test]
    fn test_app_without_forecasts() {
        let html = dioxus_ssr::render_element(rsx! {
            App { location: manchester(), selected_date: None }
        });
        assert!(html.contains("Manchester, UK"));
        assert_eq!(html.matches("forecast-summary__date").count(), 0);
        assert!(!html.contains("forecast-details"));
    }

    #[test]
    fn test_app_render_is_idempotent() -> Result<(), Error> {
        let forecasts = ForecastList::new(vec![forecast(1, "Sunny", 20.0, 10.0)])?;
        let first = dioxus_ssr::render_element(rsx! {
            App { location: manchester(), forecasts: forecasts.clone(), selected_date: None }
        });
        let second = dioxus_ssr::render_element(rsx! {
            App { location: manchester(), forecasts: forecasts, selected_date: None }
        });
        assert_eq!(first, second);
        Ok(())
    }
}
