pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::users_api::HttpUserSource;
pub use adapters::web::router;
pub use config::Settings;
pub use core::directory::ContactDirectory;
pub use utils::error::{ContactsError, Result};
