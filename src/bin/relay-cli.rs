use clap::{Parser, Subcommand};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Client CLI for the workflow dispatch relay", long_about = None)]
struct Cli {
    /// Base URL of a running relay
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trigger the download workflow for a URL
    Trigger {
        /// The file URL the workflow should download
        download_url: String,
    },
    /// Probe the relay (a bare request; expects the missing-URL envelope)
    Probe,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Trigger { download_url } => {
            let encoded = utf8_percent_encode(&download_url, NON_ALPHANUMERIC).to_string();
            let res = client
                .get(format!("{}/{}", cli.url.trim_end_matches('/'), encoded))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Probe => {
            let res = client
                .get(format!("{}/", cli.url.trim_end_matches('/')))
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Relay returned status {}", status);
    }

    // Error envelopes are JSON too; print whatever came back.
    match res.json::<Value>().await {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(e) => eprintln!("Non-JSON response: {}", e),
    }
    Ok(())
}
