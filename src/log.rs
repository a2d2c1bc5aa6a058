use serde_derive::Deserialize;
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

#[derive(Debug, Deserialize)]
pub struct Log {
    pub level: String,
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

fn default_ansi() -> bool {
    true
}

/// setup log from an optional environment filter and the config file
///
/// if the environment filter is present, then the config is not used.
/// Events go to stderr, stdout belongs to the console.
pub fn setup(
    env_filter: Result<EnvFilter, tracing_subscriber::filter::FromEnvError>,
    config: Option<&Log>,
) -> anyhow::Result<()> {
    let (filter, ansi) = match (env_filter, config) {
        (Ok(env_filter), config) => (env_filter, config.map(|c| c.ansi).unwrap_or(true)),
        (Err(_), Some(config)) => (EnvFilter::try_new(&config.level)?, config.ansi),
        (Err(_), None) => (EnvFilter::new("warn"), true),
    };

    let subscriber = Subscriber::builder()
        .with_timer(tracing_subscriber::fmt::time::ChronoUtc::rfc3339())
        .with_level(true)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
