use async_trait::async_trait;
use commerce_api_core::hash::base64_hmac_sha256;
use commerce_api_core::{
    AuthMode, Context, Error, ProvideCredential, RequestDescriptor, Result, SignRequest, Signer,
    SigningCredential, StaticEnv,
};
use http::HeaderValue;
use std::collections::HashMap;

#[derive(Clone, Debug)]
struct ApiKey {
    key: String,
    secret: String,
}

impl SigningCredential for ApiKey {
    fn is_valid(&self) -> bool {
        !self.key.is_empty() && !self.secret.is_empty()
    }
}

#[derive(Debug)]
struct EnvApiKeyProvider;

#[async_trait]
impl ProvideCredential for EnvApiKeyProvider {
    type Credential = ApiKey;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        match (ctx.env_var("MY_API_KEY"), ctx.env_var("MY_API_SECRET")) {
            (Some(key), Some(secret)) => Ok(Some(ApiKey { key, secret })),
            _ => Ok(None),
        }
    }
}

/// Signs `METHOD url` with the api secret.
#[derive(Debug)]
struct ApiKeySigner;

#[async_trait]
impl SignRequest for ApiKeySigner {
    type Credential = ApiKey;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &RequestDescriptor,
        credential: Option<&Self::Credential>,
    ) -> Result<HeaderValue> {
        let cred = credential.ok_or_else(|| Error::credential_invalid("missing api key"))?;
        let content = format!("{} {}", req.method(), req.url());
        let signature = base64_hmac_sha256(cred.secret.as_bytes(), content.as_bytes());

        let mut value = HeaderValue::from_str(&format!("ApiKey {}:{signature}", cred.key))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from([
            ("MY_API_KEY".to_string(), "demo-key".to_string()),
            ("MY_API_SECRET".to_string(), "demo-secret".to_string()),
        ]),
    });
    let signer = Signer::new(ctx, EnvApiKeyProvider, ApiKeySigner);

    let req = RequestDescriptor::get("https://api.example.com/v1/users")?;

    for mode in [
        AuthMode::from_request_token(""),
        AuthMode::from_request_token("customer-token"),
    ] {
        let value = signer.authorize(&req, &mode).await?;
        println!("{mode:?}: {}", value.to_str().unwrap_or("<opaque>"));
    }

    Ok(())
}
