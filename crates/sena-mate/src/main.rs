mod assistant;
mod config;
mod error;
mod http;
mod server;

use std::sync::Arc;

use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use assistant::Assistant;
use config::Config;
use sena_common::openai::OpenAiClient;
use sena_common::prompt::load_prompt;
use server::SenaMateServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; variables may come from the environment.
    let dotenv = dotenvy::dotenv().ok();

    // stderr only: stdout carries MCP JSON-RPC in stdio mode.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!(dotenv = ?dotenv, "starting sena-mate");

    let config = Config::from_env()?;
    info!(
        hf_token = config.openai.api_key.is_some(),
        chat_model = %config.chat_model,
        base_url = %config.openai.base_url,
        prompt_path = %config.prompt_path.display(),
        "configuration loaded"
    );

    let prompt = Arc::new(load_prompt(&config.prompt_path));
    let openai = Arc::new(OpenAiClient::new(config.openai.clone())?);
    info!(
        timeout_ms = openai.config().default_timeout.as_millis(),
        max_retries = openai.config().max_retries,
        "chat client configured"
    );

    let assistant = Assistant::new(prompt, openai, config.chat_model.clone());

    if let Some(addr) = &config.http_listen_addr {
        let listener = TcpListener::bind(addr).await?;
        info!(listen_addr = %addr, model = %assistant.chat_model(), "HTTP API ready");
        axum::serve(listener, http::router(assistant)).await?;
    } else {
        let server = SenaMateServer::new(assistant);
        info!("MCP server ready, serving on stdio");
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!(error = %e, "MCP server error");
        })?;
        service.waiting().await?;
        info!("MCP server shut down");
    }
    Ok(())
}
