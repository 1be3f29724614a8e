use crate::utils::error::{ContactsError, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_DIRECTIVE: &str = "contacts_board=info";
pub const VERBOSE_DIRECTIVE: &str = "contacts_board=debug,info";

/// `RUST_LOG` 優先，否則使用傳入的預設 directive
fn build_filter(default_directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive))
}

pub fn init_cli_logger(default_directive: &str, json: bool) -> Result<()> {
    let filter = build_filter(default_directive);

    let registry = tracing_subscriber::registry().with(filter);

    let outcome = if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init()
    };

    outcome.map_err(|e| ContactsError::LoggingError {
        message: e.to_string(),
    })
}
