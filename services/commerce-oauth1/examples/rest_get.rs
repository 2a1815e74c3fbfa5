use anyhow::Result;
use commerce_api_core::{Context, OsEnv};
use commerce_api_http_send_reqwest::ReqwestHttpSend;
use commerce_api_oauth1::{CallOptions, Config, RestClient};

/// Fetch a resource from the commerce REST api.
///
/// Credentials and the base url are read from `COMMERCE_*` env values.
///
/// ```shell
/// COMMERCE_BASE_URL=https://commerce.example.com \
/// COMMERCE_CONSUMER_KEY=... COMMERCE_CONSUMER_SECRET=... \
/// COMMERCE_ACCESS_TOKEN=... COMMERCE_ACCESS_TOKEN_SECRET=... \
/// cargo run --example rest_get -- "products?searchCriteria%5BpageSize%5D=5"
/// ```
#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let resource = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "store/storeConfigs".to_string());

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let client = RestClient::from_config(ctx, Config::new())?;

    let resp = client.get(&resource, CallOptions::new()).await?;
    println!("{}", serde_json::to_string_pretty(&resp)?);

    Ok(())
}
