#![allow(clippy::must_use_candidate)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod app;
pub mod config;
pub mod dashboard_data;
pub mod errors;
pub mod html_response;
pub mod parse_opts;
pub mod routes;
pub mod weather_element;
