use anyhow::{anyhow, Result};
use clap::Parser;
use std::fmt::Debug;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::instrument;

#[derive(Parser, Debug)]
#[clap(about = "Sends messages to a relay and prints the generated replies")]
struct Args {
    #[clap(short, long, env = "RELAY_ADDRESS", default_value = "127.0.0.1:8080")]
    relay_address: String,
    /// Message to send. Reads one message per line from stdin when omitted.
    message: Option<String>,
}

#[derive(serde::Deserialize, Debug)]
struct GenerateReply {
    response: String,
}

#[derive(serde::Deserialize, Debug)]
struct ErrorReply {
    detail: String,
}

struct HttpClient {
    client: reqwest::Client,
    url: String,
}
impl Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("url", &self.url)
            .finish()
    }
}

impl HttpClient {
    fn new(address: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("http://{}/generate", address),
        }
    }

    #[instrument(skip_all, fields(status))]
    async fn send_message(&self, message: &str) -> Result<String> {
        let response = self
            .client
            .post(&self.url)
            .json(&serde_json::json!({ "message": message }))
            .send()
            .await?;

        let status = response.status();
        tracing::Span::current().record("status", status.as_u16());

        if status.is_success() {
            let reply: GenerateReply = response.json().await?;
            return Ok(reply.response);
        }

        let text = response.text().await?;
        let detail = serde_json::from_str::<ErrorReply>(&text)
            .map(|e| e.detail)
            .unwrap_or(text);
        Err(anyhow!("relay answered {}: {}", status, detail))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = HttpClient::new(&args.relay_address);
    tracing::info!("Sending messages with {:?}", client);

    if let Some(message) = args.message {
        println!("{}", client.send_message(&message).await?);
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match client.send_message(line).await {
            Ok(reply) => println!("{}", reply),
            Err(e) => tracing::error!("Error sending message: {:?}", e),
        }
    }
    Ok(())
}
