//! neuroswitch - send one prompt through the NeuroSwitch API
//!
//! Settings come from an optional `config` file (any format the `config`
//! crate understands) overlaid with environment variables:
//!     NEUROSWITCH_API_KEY: API key (required)
//!     NEUROSWITCH_BASE_URL: API base URL (default: https://api.neuroswitch.com)

use clap::Parser;
use client::{Client, ClientConfig};
use config::{Config, ConfigBuilder, Environment, File, builder::DefaultState};
use request::{Message, Mode};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "neuroswitch")]
#[command(about = "Send a prompt to the NeuroSwitch API and print the reply")]
struct Cli {
    /// Prompt sent as the user message
    prompt: String,

    /// Requested model; empty lets NeuroSwitch choose
    #[arg(long, default_value = "")]
    model: String,

    /// Routing mode (adaptive, turbo, saver, ...)
    #[arg(long, default_value = "adaptive")]
    mode: Mode,

    /// Optional system message placed before the prompt
    #[arg(long)]
    system: Option<String>,

    /// Config file name, extension optional
    #[arg(long, default_value = "config")]
    config: String,
}

impl Cli {
    fn messages(&self) -> Vec<Message> {
        self.system
            .iter()
            .map(Message::system)
            .chain(std::iter::once(Message::user(self.prompt.as_str())))
            .collect()
    }
}

fn load_config(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<ClientConfig> {
    let settings = builder
        .add_source(Environment::with_prefix("NEUROSWITCH"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(
        Config::builder().add_source(File::with_name(&cli.config).required(false)),
    )?;
    info!("Using NeuroSwitch endpoint {}", config.base_url());

    let client = Client::from_config(config);
    let response = client
        .chat_completions(&cli.model, &cli.messages(), cli.mode.clone())
        .await?;

    println!("Assistant: {}", response.content().unwrap_or_default());
    println!("Tokens Used: {}", response.total_tokens());
    println!("Cost: {}", response.cost);
    println!("Model: {}", response.model);

    Ok(())
}
