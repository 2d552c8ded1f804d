use anyhow::Result;
use chat_relay::config::RelayConfig;
use chat_relay::server::run_server;
use clap::Parser;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "chat-relay",
    about = "HTTP relay that forwards prompts to an LLM completion API"
)]
struct Cli {
    #[arg(long, env = "RELAY_HOST", default_value = "0.0.0.0")]
    host: String,

    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Exact origin allowed by CORS; omit to allow any origin
    #[arg(long, env = "FRONTEND_ORIGIN")]
    frontend_origin: Option<String>,

    /// Base URL of the completion API
    #[arg(long, env = "LLM_API_BASE", default_value = "https://api.openai.com/v1")]
    api_base: String,

    /// Bearer credential for the completion API; an empty key surfaces as an
    /// upstream auth failure at request time
    #[arg(long, env = "OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    api_key: String,

    #[arg(long, env = "LLM_MODEL", default_value = "gpt-4o-mini")]
    model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let config = RelayConfig {
        host: cli.host,
        port: cli.port,
        frontend_origin: cli.frontend_origin,
        api_base: cli.api_base,
        api_key: cli.api_key,
        model: cli.model,
    };

    info!(
        host = %config.host,
        port = config.port,
        model = %config.model,
        api_base = %config.api_base,
        "Starting chat relay"
    );

    run_server(config).await
}
