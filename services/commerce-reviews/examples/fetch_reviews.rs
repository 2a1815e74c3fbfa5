use anyhow::Result;
use commerce_api_core::{Context, OsEnv};
use commerce_api_http_send_reqwest::ReqwestHttpSend;
use commerce_api_reviews::{Config, ReviewOptions, ReviewsService};

/// Print the reviews of a product.
///
/// ```shell
/// GC_GRAPHQL_ENDPOINT=https://graphql.example.com/graphql GC_CLIENT_ID_REVIEW=... \
/// cargo run --example fetch_reviews -- 123 DE
/// ```
#[tokio::main]
async fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let mut args = std::env::args().skip(1);
    let product_id = args.next().unwrap_or_else(|| "1".to_string());

    let mut opts = ReviewOptions::new().with_per_page(5);
    if let Some(store_code) = args.next() {
        opts = opts.with_store_code(store_code);
    }

    let ctx = Context::new()
        .with_http_send(ReqwestHttpSend::default())
        .with_env(OsEnv);
    let service = ReviewsService::from_config(ctx, Config::new());

    let resp = service.fetch_reviews_for_product(&product_id, &opts).await?;
    println!("{}", serde_json::to_string_pretty(&resp)?);

    Ok(())
}
