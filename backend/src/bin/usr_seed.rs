//! Seed an in-memory store with the sample user records and print them.
//!
//! Settings come from `USR_SAMPLE_DATA_*` environment variables, CLI flags,
//! or a config file. Each stored record is written to stdout as a
//! [`UserRecordView`], so passwords never leave the process. Logs go to
//! stderr as JSON.

use std::env;
use std::io::{self, Write};
use std::sync::Arc;

use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use usr_backend::domain::UserRecordView;
use usr_backend::domain::ports::UserRecordRepository;
use usr_backend::outbound::persistence::InMemoryUserStore;
use usr_backend::sample_data::{OutputFormat, SampleDataSettings, seed_sample_data_on_startup};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = SampleDataSettings::load_from_iter(env::args_os())
        .map_err(|err| eyre!("failed to load sample data settings: {err}"))?;
    let format = settings.output_format()?;

    let store = Arc::new(InMemoryUserStore::new());
    seed_sample_data_on_startup(&settings, Arc::clone(&store))
        .await
        .wrap_err("failed to seed sample records")?;

    let views: Vec<UserRecordView> = store
        .list()
        .await?
        .iter()
        .map(UserRecordView::from)
        .collect();
    write_views(io::stdout().lock(), format, &views)
}

fn write_views(mut out: impl Write, format: OutputFormat, views: &[UserRecordView]) -> Result<()> {
    match format {
        OutputFormat::JsonLines => {
            for view in views {
                serde_json::to_writer(&mut out, view).wrap_err("failed to encode record")?;
                writeln!(out)?;
            }
        }
        OutputFormat::Pretty => {
            serde_json::to_writer_pretty(&mut out, views).wrap_err("failed to encode records")?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
