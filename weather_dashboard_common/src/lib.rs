#![allow(clippy::pedantic)]
#![allow(clippy::too_many_arguments)]

pub mod model;
pub mod weather_element;

pub use model::{DashboardData, Forecast, ForecastList, Icon, Location, ModelError, Temperature, Wind};
