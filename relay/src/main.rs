use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use relay::{build_router, AppState};
use text_provider::{ChatCompletionsClient, EchoGenerator, TextGenerator};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ProviderKind {
    /// Answer locally without a model.
    Echo,
    /// Forward to an OpenAI-compatible `/chat/completions` endpoint.
    ChatCompletions,
}

#[derive(Parser, Debug)]
#[clap(about = "Relays text messages to a text-generation provider")]
struct Args {
    #[clap(short, long, env = "RELAY_ADDRESS", default_value = "127.0.0.1:8080")]
    address: String,
    #[clap(short, long, env = "RELAY_PROVIDER", value_enum, default_value = "echo")]
    provider: ProviderKind,
    #[clap(long, env = "RELAY_PROVIDER_URL", default_value = "http://127.0.0.1:4000/v1")]
    provider_url: String,
    #[clap(short, long, env = "RELAY_MODEL", default_value = "gpt-3.5-turbo")]
    model: String,
    #[clap(long, env = "RELAY_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    #[clap(
        long,
        env = "RELAY_GENERATE_TIMEOUT_SECS",
        default_value = "60",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    generate_timeout_secs: u64,
    #[clap(long, env = "RELAY_LOG_LEVEL", default_value = "info")]
    log_level: tracing::Level,
}

fn build_generator(args: &Args) -> Result<Arc<dyn TextGenerator>> {
    match args.provider {
        ProviderKind::Echo => Ok(Arc::new(EchoGenerator)),
        ProviderKind::ChatCompletions => {
            let client =
                ChatCompletionsClient::new(&args.provider_url, &args.model, args.api_key.clone())
                    .context("Failed to create chat completions client")?;
            tracing::info!("Using provider {:?}", client);
            Ok(Arc::new(client))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    tracing::info!("args: {:?}", &args);

    let generator = build_generator(&args)?;
    let state = AppState::new(generator, Duration::from_secs(args.generate_timeout_secs));
    let app = build_router(state);

    tracing::info!("Listening on {}", &args.address);
    let listener = TcpListener::bind(&args.address)
        .await
        .with_context(|| format!("Failed to bind {}", args.address))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("Server shutdown");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl-C: {:?}", e);
    }
}
