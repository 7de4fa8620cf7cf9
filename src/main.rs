use journal_index::config::JournalConfig;
use journal_index::features::build_router;
use journal_index::io::LocalEntrySource;
use journal_index::services::builder::build_index;
use journal_index::services::loader::EntryLoader;
use journal_index::AppState;
use log::info;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = JournalConfig::from_env()?;

    // one-shot build; a directory-level failure ends the process here
    let report = build_index(&config.entries_dir)?;
    if !report.skipped.is_empty() {
        info!(
            "Skipped {} of {} files",
            report.skipped.len(),
            report.files_found
        );
    }

    if !config.preview_server {
        return Ok(());
    }

    let loader = EntryLoader::new(Box::new(LocalEntrySource::new(
        config.entries_dir.clone(),
    )));

    let app_state = AppState {
        loader: Arc::new(loader),
        config: Arc::new(config.clone()),
    };

    let app = build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    info!(
        "Preview server listening on http://{}{}",
        config.bind_address, config.base_path
    );

    axum::serve(listener, app).await?;

    Ok(())
}
