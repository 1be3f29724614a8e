use super::toml_config::TomlConfig;
use super::Settings;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "contacts-board")]
#[command(about = "Server-rendered contact board seeded from a users API")]
pub struct CliConfig {
    /// Address to listen on (host:port)
    #[arg(long)]
    pub bind: Option<String>,

    /// Users API queried once at startup
    #[arg(long)]
    pub users_endpoint: Option<String>,

    /// Timeout for the startup import, in seconds
    #[arg(long)]
    pub import_timeout_secs: Option<u64>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Start with an empty directory without calling the users API
    #[arg(long)]
    pub skip_import: bool,

    /// Import, print a summary and exit without serving
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl CliConfig {
    /// 合併預設值、設定檔與命令列參數
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            settings = settings.merge_file(&TomlConfig::from_file(path)?);
        }

        if let Some(bind) = &self.bind {
            settings.bind = bind.clone();
        }
        if let Some(endpoint) = &self.users_endpoint {
            settings.users_endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.import_timeout_secs {
            settings.import_timeout_secs = timeout;
        }
        if self.skip_import {
            settings.import_enabled = false;
        }
        if self.json_logs {
            settings.json_logs = true;
        }
        settings.verbose = self.verbose;

        Ok(settings)
    }
}
