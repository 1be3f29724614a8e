use clap::Parser;
use contacts_board::core::{ConfigProvider, ContactStatus};
use contacts_board::utils::{logger, validation::Validate};
use contacts_board::{router, CliConfig, ContactDirectory, HttpUserSource};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    logger::init_cli_logger(&settings.log_directive(), settings.json_logs)?;

    tracing::info!("Starting contacts-board");
    tracing::debug!("Resolved settings: {:?}", settings);

    // 驗證配置
    if let Err(e) = settings.validate() {
        tracing::error!(
            "❌ Configuration validation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let directory = ContactDirectory::new();

    if settings.import_enabled() {
        let source = HttpUserSource::new(
            settings.users_endpoint(),
            Duration::from_secs(settings.import_timeout_secs()),
        )?;
        tracing::info!("📥 Importing contacts from {}", source.endpoint());
        let count = directory.seed_from(&source).await;
        tracing::info!("✅ Loaded {} contacts", count);
    } else {
        tracing::warn!("Import skipped, starting with an empty directory");
        directory.initialize(Vec::new()).await;
    }

    if cli.dry_run {
        let total = directory.count_total().await;
        let active = directory.count_by_status(ContactStatus::Active).await;
        println!("🔍 Dry run: {} contacts ({} active), not serving", total, active);
        for contact in directory.all().await {
            println!("  {} <{}> {}", contact.name, contact.email, contact.phone);
        }
        return Ok(());
    }

    let listener = tokio::net::TcpListener::bind(settings.bind_addr()).await?;
    tracing::info!("🚀 Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(directory))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
