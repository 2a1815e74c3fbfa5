use anyhow::Result;
use bytes::Bytes;
use commerce_api_core::Context;
use commerce_api_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;
use std::time::Duration;

/// Send a single GET through a timeout-bounded client.
///
/// ```shell
/// cargo run --example custom_client -- https://commerce.example.com/health_check.php
/// ```
#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::try_init();

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://example.com".to_string());

    // Abandoning slow calls is the transport's job.
    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .user_agent("commerce-api-example/0.1")
        .build()?;

    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    let req = http::Request::get(&url).body(Bytes::new())?;
    let resp = ctx.http_send(req).await?;

    println!("GET {url} -> {}", resp.status());
    for (name, value) in resp.headers() {
        println!("  {name}: {value:?}");
    }

    Ok(())
}
