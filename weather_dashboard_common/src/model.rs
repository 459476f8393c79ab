use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use stack_string::StackString;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ModelError {
    #[error("duplicate forecast date {0}")]
    DuplicateDate(i64),
    #[error("forecast {date} has minimum temperature {min} above maximum {max}")]
    InvertedTemperature { date: i64, min: f64, max: f64 },
}

/// City and country the forecasts apply to
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    pub city: StackString,
    pub country: StackString,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct Temperature {
    pub max: f64,
    pub min: f64,
}

/// Weather icon, either an OpenWeatherMap condition code or an icon name
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Display)]
#[serde(untagged)]
pub enum Icon {
    #[display("{_0}")]
    Code(u64),
    #[display("{_0}")]
    Name(StackString),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Wind {
    pub speed: f64,
    pub direction: StackString,
}

/// A single day's forecast, `date` is a unix timestamp in milliseconds
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Forecast {
    pub date: i64,
    pub description: StackString,
    pub icon: Icon,
    pub temperature: Temperature,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind: Option<Wind>,
}

/// Forecasts in display order.
///
/// Dates are unique within a list and every entry satisfies
/// `temperature.min <= temperature.max`; both are checked on construction,
/// including deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default, Deref)]
#[serde(try_from = "Vec<Forecast>", into = "Vec<Forecast>")]
pub struct ForecastList(Vec<Forecast>);

impl ForecastList {
    /// # Errors
    /// Returns error on a repeated date or a minimum temperature above the maximum
    pub fn new(forecasts: Vec<Forecast>) -> Result<Self, ModelError> {
        let mut dates = HashSet::with_capacity(forecasts.len());
        for forecast in &forecasts {
            let Temperature { max, min } = forecast.temperature;
            if min.is_nan() || max.is_nan() || min > max {
                return Err(ModelError::InvertedTemperature {
                    date: forecast.date,
                    min,
                    max,
                });
            }
            if !dates.insert(forecast.date) {
                return Err(ModelError::DuplicateDate(forecast.date));
            }
        }
        Ok(Self(forecasts))
    }

    #[must_use]
    pub fn get(&self, date: i64) -> Option<&Forecast> {
        self.0.iter().find(|f| f.date == date)
    }

    /// Forecast matching `date`, falling back to the first entry
    #[must_use]
    pub fn select(&self, date: Option<i64>) -> Option<&Forecast> {
        date.and_then(|d| self.get(d)).or_else(|| self.0.first())
    }
}

impl TryFrom<Vec<Forecast>> for ForecastList {
    type Error = ModelError;

    fn try_from(forecasts: Vec<Forecast>) -> Result<Self, Self::Error> {
        Self::new(forecasts)
    }
}

impl From<ForecastList> for Vec<Forecast> {
    fn from(item: ForecastList) -> Self {
        item.0
    }
}

/// Contents of a forecast fixture file
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DashboardData {
    pub location: Location,
    #[serde(default)]
    pub forecasts: ForecastList,
}
