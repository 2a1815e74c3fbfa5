use anyhow::Result;
use commerce_api::oauth1::{default_client, CallOptions};
use serde_json::json;

/// Log a customer in, then read their profile with the returned bearer token.
///
/// ```shell
/// cargo run --example customer_token -- user@example.com password
/// ```
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (username, password) = (
        args.next().unwrap_or_default(),
        args.next().unwrap_or_default(),
    );

    let client = default_client()?;
    let token = client
        .consumer_token(json!({"username": username, "password": password}))
        .await?;
    let token = token.as_str().unwrap_or_default();

    let me = client
        .get("customers/me", CallOptions::new().with_request_token(token))
        .await?;
    println!("{}", serde_json::to_string_pretty(&me)?);

    Ok(())
}
