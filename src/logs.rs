use strum_macros::{Display, EnumString};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::UtcTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Logs go to stderr so stdout only carries command output.
pub fn init_logs(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_timer(UtcTime::rfc_3339())
        // RUST_LOG controls levels, e.g. RUST_LOG=realty_trends=debug
        .with_env_filter(env_filter);

    let result = match format {
        LogFormat::Json => {
            tracing::subscriber::set_global_default(builder.json().flatten_event(true).finish())
        }
        LogFormat::Pretty => tracing::subscriber::set_global_default(builder.pretty().finish()),
    };

    result.expect("setting default subscriber failed");
}
