use client::Client;
use request::{Message, Mode};

#[tokio::main]
async fn main() -> client::Result<()> {
    let api_key =
        std::env::var("NEUROSWITCH_API_KEY").unwrap_or_else(|_| "your_api_key".to_string());
    let client = match std::env::var("NEUROSWITCH_BASE_URL") {
        Ok(base_url) => Client::with_base_url(api_key, base_url),
        Err(_) => Client::new(api_key),
    };

    println!("Sending request to NeuroSwitch...");

    let response = client
        .chat_completions(
            "",
            &[Message::user("Tell me a Christmas story.")],
            Mode::Adaptive,
        )
        .await?;

    println!("Assistant: {}", response.content().unwrap_or_default());
    println!("Tokens Used: {}", response.total_tokens());
    println!("Cost: {}", response.cost);
    println!("Model: {}", response.model);

    Ok(())
}
