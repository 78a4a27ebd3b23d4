use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;

mod api;
mod config;
mod model;
mod models;
mod notify;
mod panel;
mod stub;
mod terminal;
mod view;

#[cfg(test)]
mod test_support;

use api::ReqwestApiClient;
use config::Config;
use notify::TerminalNotifier;
use panel::EmployeePanel;
use terminal::Console;
use tracing::info;
use tracing_appender::rolling;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log; stdout belongs to the panel
    let file_appender = rolling::daily(&config.log_dir, &config.log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false) // removes module path
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Panel starting...");

    let stub = match &config.stub_server_addr {
        Some(addr) => Some(stub::spawn(addr, stub::demo_records())?),
        None => None,
    };
    let base_url = match &stub {
        Some(stub) => stub.base_url()?,
        None => config.api_base_url.clone(),
    };
    info!(base_url = %base_url, "using employees API");

    let api = ReqwestApiClient::new(base_url, config.api_timeout)
        .context("failed to build HTTP client")?;
    let console = Console::stdio();
    let notifier = TerminalNotifier::new(console.clone());
    let mut panel = EmployeePanel::new(Arc::new(api), Arc::new(notifier));

    terminal::run(&mut panel, &console).await?;

    if let Some(stub) = stub {
        stub.stop().await;
    }
    info!("Panel stopped");
    Ok(())
}
