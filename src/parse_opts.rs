use anyhow::{format_err, Error};
use clap::Parser;
use log::debug;
use stack_string::{format_sstr, StackString};
use std::path::{Path, PathBuf};
use tokio::{
    fs::File,
    io::{stdout, AsyncWrite, AsyncWriteExt},
};

use crate::{
    app::start_app, config::Config, dashboard_data::load_dashboard_data,
    weather_element::index_page,
};

#[derive(Parser, Debug)]
pub enum ParseOpts {
    /// Run daemon
    Daemon,
    /// Render the dashboard to a static html page
    Render {
        #[clap(short, long)]
        /// Forecast fixture (defaults to DATA_PATH)
        filepath: Option<PathBuf>,
        #[clap(short, long)]
        /// Output file (if missing will write to stdout)
        output: Option<PathBuf>,
        #[clap(short, long)]
        /// Date of the forecast to show in detail
        date: Option<i64>,
    },
    /// Load and validate a forecast fixture
    Validate {
        #[clap(short, long)]
        /// Forecast fixture (defaults to DATA_PATH)
        filepath: Option<PathBuf>,
    },
}

impl ParseOpts {
    /// # Errors
    /// Return error if config or data fail to load, or output can't be written
    pub async fn process_args() -> Result<(), Error> {
        let opts = ParseOpts::parse();
        let config = Config::init_config(None)?;

        match opts {
            Self::Daemon => {
                tokio::spawn(async move { start_app(config).await }).await??;
            }
            Self::Render {
                filepath,
                output,
                date,
            } => {
                let filepath = filepath.unwrap_or_else(|| config.data_path.clone());
                render_page(&filepath, output.as_deref(), date, &config.title).await?;
            }
            Self::Validate { filepath } => {
                let filepath = filepath.unwrap_or_else(|| config.data_path.clone());
                let summary = validate_data(&filepath).await?;
                stdout().write_all(summary.as_bytes()).await?;
            }
        }
        Ok(())
    }
}

/// Render the dashboard for `filepath` into `output`, or stdout when absent.
///
/// # Errors
/// Return error if the fixture fails to load, `date` has no forecast, or
/// the output can't be written
pub async fn render_page(
    filepath: &Path,
    output: Option<&Path>,
    date: Option<i64>,
    title: &str,
) -> Result<(), Error> {
    let data = load_dashboard_data(filepath).await?;
    if let Some(date) = date {
        if data.forecasts.get(date).is_none() {
            return Err(format_err!("no forecast for date {date}"));
        }
    }
    let page = index_page(title, &data, date);

    let mut file: Box<dyn AsyncWrite + Unpin + Send + Sync> = if let Some(output) = output {
        Box::new(File::create(output).await?)
    } else {
        Box::new(stdout())
    };
    file.write_all(page.as_bytes()).await?;
    file.flush().await?;
    debug!("rendered {} bytes", page.len());
    Ok(())
}

/// # Errors
/// Return error if the fixture fails to load or validate
pub async fn validate_data(filepath: &Path) -> Result<StackString, Error> {
    let data = load_dashboard_data(filepath).await?;
    Ok(format_sstr!(
        "{}: {}, {} with {} forecasts\n",
        filepath.display(),
        data.location.city,
        data.location.country,
        data.forecasts.len()
    ))
}
