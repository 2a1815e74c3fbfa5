// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use commerce_api_core::utils::Redact;
use commerce_api_core::{
    AuthMode, Context, Error, ProvideCredential, RequestDescriptor, Result, Signer,
};
use http::header::AUTHORIZATION;
use http::{HeaderMap, Method};
use serde_json::Value;

use crate::config::{ClientConfig, Config};
use crate::constants::CUSTOMER_TOKEN_RESOURCE;
use crate::provide_credential::{ConfigCredentialProvider, StaticCredentialProvider};
use crate::{Credential, RequestSigner};

/// Per-call options for [`RestClient`].
#[derive(Clone, Default)]
pub struct CallOptions {
    request_token: String,
    headers: HeaderMap,
}

impl CallOptions {
    /// Create empty options: signed request, no extra headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Send `Authorization: Bearer <token>` instead of signing.
    ///
    /// An empty token keeps OAuth signing.
    pub fn with_request_token(mut self, token: impl Into<String>) -> Self {
        self.request_token = token.into();
        self
    }

    /// Extra headers applied after the `Authorization` header, replacing any
    /// header with the same name.
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }
}

impl Debug for CallOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallOptions")
            .field("request_token", &Redact::from(&self.request_token))
            .field("headers", &self.headers)
            .finish()
    }
}

/// RestClient calls the commerce REST api with OAuth 1.0a signed requests.
///
/// Every call sends exactly one request. Nothing is retried and the client
/// keeps no state between calls.
#[derive(Clone, Debug)]
pub struct RestClient {
    config: ClientConfig,
    signer: Signer<Credential>,
}

impl RestClient {
    /// Create a client from a url config and a signer.
    pub fn new(config: ClientConfig, signer: Signer<Credential>) -> Self {
        Self { config, signer }
    }

    /// Create a client for `<base_url>/rest/<store_code>/V1/` signing with `credential`.
    ///
    /// ```no_run
    /// use commerce_api_core::Context;
    /// use commerce_api_oauth1::{CallOptions, Credential, RestClient};
    ///
    /// # async fn example(ctx: Context) -> commerce_api_core::Result<()> {
    /// let client = RestClient::commerce(
    ///     ctx,
    ///     "https://commerce.example.com",
    ///     Some("default"),
    ///     Credential::new("consumer_key", "consumer_secret", "access_token", "token_secret"),
    /// );
    /// let products = client
    ///     .get("products?searchCriteria=all", CallOptions::new())
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn commerce(
        ctx: Context,
        base_url: &str,
        store_code: Option<&str>,
        credential: Credential,
    ) -> Self {
        Self::with_provider(
            ctx,
            ClientConfig::commerce(base_url, store_code),
            StaticCredentialProvider::from(credential),
        )
    }

    /// Create a client from [`Config`], reading unset values from env.
    pub fn from_config(ctx: Context, config: Config) -> Result<Self> {
        let config = config.from_env(&ctx);
        let client_config = config.client_config()?;

        Ok(Self::with_provider(
            ctx,
            client_config,
            ConfigCredentialProvider::new(Arc::new(config)),
        ))
    }

    /// Create a client signing with credentials loaded from `provider` on every call.
    pub fn with_provider(
        ctx: Context,
        config: ClientConfig,
        provider: impl ProvideCredential<Credential = Credential>,
    ) -> Self {
        Self::new(config, Signer::new(ctx, provider, RequestSigner::new()))
    }

    /// Url config of this client.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET <resource>`.
    pub async fn get(&self, resource: &str, opts: CallOptions) -> Result<Value> {
        self.call(Method::GET, resource, None, opts).await
    }

    /// `POST <resource>` with a JSON body.
    pub async fn post(&self, resource: &str, body: Value, opts: CallOptions) -> Result<Value> {
        self.call(Method::POST, resource, Some(body), opts).await
    }

    /// `PUT <resource>` with a JSON body.
    pub async fn put(&self, resource: &str, body: Value, opts: CallOptions) -> Result<Value> {
        self.call(Method::PUT, resource, Some(body), opts).await
    }

    /// `DELETE <resource>`.
    pub async fn delete(&self, resource: &str, opts: CallOptions) -> Result<Value> {
        self.call(Method::DELETE, resource, None, opts).await
    }

    /// Exchange customer login data for a customer token.
    pub async fn consumer_token(&self, login: Value) -> Result<Value> {
        self.post(CUSTOMER_TOKEN_RESOURCE, login, CallOptions::new())
            .await
    }

    async fn call(
        &self,
        method: Method,
        resource: &str,
        body: Option<Value>,
        opts: CallOptions,
    ) -> Result<Value> {
        let url = self.config.resource_url(resource);
        let logger = self.signer.context().logger();
        logger.debug(&format!("Fetching URL: {url} with method: {method}"));

        let result = match RequestDescriptor::new(method, &url) {
            Ok(req) => {
                let req = match body {
                    Some(body) => req.with_body(body),
                    None => req,
                };
                self.send(&req, opts).await
            }
            Err(err) => Err(err),
        };

        if let Err(err) = &result {
            logger.error(&format!("Error fetching URL {url}: {err}"));
            if let Some(body) = err.response_body() {
                logger.error(&format!("Error body {url}: {body}"));
            }
        }
        result
    }

    async fn send(&self, req: &RequestDescriptor, opts: CallOptions) -> Result<Value> {
        let mode = AuthMode::from_request_token(&opts.request_token);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, self.signer.authorize(req, &mode).await?);
        headers.extend(opts.headers);

        let resp = self
            .signer
            .context()
            .http_send(req.to_http_request(headers)?)
            .await?;

        let status = resp.status();
        let body = resp.into_body();
        if !status.is_success() {
            return Err(Error::transport(format!(
                "Request failed with status code {}",
                status.as_u16()
            ))
            .with_response(status, String::from_utf8_lossy(&body)));
        }

        Ok(decode_json(&body))
    }
}

/// Empty body is `null`, a body that isn't JSON is kept as a string.
fn decode_json(body: &[u8]) -> Value {
    if body.is_empty() {
        return Value::Null;
    }

    serde_json::from_slice(body)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bytes::Bytes;
    use commerce_api_core::time::from_timestamp;
    use commerce_api_core::{ErrorKind, HttpSend, Logger};
    use http::{HeaderValue, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::sync::Mutex;
    use test_case::test_case;

    #[derive(Debug, Clone)]
    struct MockHttpSend {
        status: StatusCode,
        body: &'static str,
        requests: Arc<Mutex<Vec<http::Request<Bytes>>>>,
    }

    impl MockHttpSend {
        fn new(status: StatusCode, body: &'static str) -> Self {
            Self {
                status,
                body,
                requests: Arc::default(),
            }
        }

        fn last_request(&self) -> http::Request<Bytes> {
            self.requests.lock().unwrap().pop().expect("no request sent")
        }
    }

    #[async_trait]
    impl HttpSend for MockHttpSend {
        async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
            self.requests.lock().unwrap().push(req);
            Ok(http::Response::builder()
                .status(self.status)
                .body(Bytes::from_static(self.body.as_bytes()))?)
        }
    }

    #[derive(Debug, Clone, Default)]
    struct RecordingLogger {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingLogger {
        fn lines(&self) -> Vec<String> {
            self.lines.lock().unwrap().clone()
        }
    }

    impl Logger for RecordingLogger {
        fn debug(&self, message: &str) {
            self.lines.lock().unwrap().push(format!("debug: {message}"));
        }

        fn info(&self, message: &str) {
            self.lines.lock().unwrap().push(format!("info: {message}"));
        }

        fn error(&self, message: &str) {
            self.lines.lock().unwrap().push(format!("error: {message}"));
        }
    }

    fn client(http: MockHttpSend, logger: RecordingLogger) -> RestClient {
        let ctx = Context::new().with_http_send(http).with_logger(logger);
        let signer = Signer::new(
            ctx,
            StaticCredentialProvider::new(
                "consumer_key",
                "consumer_secret",
                "access_token",
                "token_secret",
            ),
            RequestSigner::new()
                .with_nonce("kllo9940pd9333jh")
                .with_time(from_timestamp(1191242096).unwrap()),
        );

        RestClient::new(
            ClientConfig::commerce("https://commerce.example.com", None),
            signer,
        )
    }

    #[tokio::test]
    async fn test_get_is_signed() -> Result<()> {
        let http = MockHttpSend::new(StatusCode::OK, r#"{"items":[]}"#);
        let logger = RecordingLogger::default();
        let client = client(http.clone(), logger.clone());

        let resp = client
            .get("products?searchCriteria=all&pageSize=10", CallOptions::new())
            .await?;
        assert_eq!(resp, json!({"items": []}));

        let req = http.last_request();
        assert_eq!(req.method(), Method::GET);
        assert_eq!(
            req.uri().to_string(),
            "https://commerce.example.com/rest/default/V1/products?searchCriteria=all&pageSize=10"
        );
        assert_eq!(
            req.headers()[AUTHORIZATION],
            r#"OAuth oauth_consumer_key="consumer_key", oauth_nonce="kllo9940pd9333jh", oauth_signature="lZcyUu6S4tRuG2NR42AHUHxe%2BCijNaApHi55ej7wAE0%3D", oauth_signature_method="HMAC-SHA256", oauth_timestamp="1191242096", oauth_token="access_token", oauth_version="1.0""#
        );
        assert!(req.headers().get(http::header::CONTENT_TYPE).is_none());
        let expected = "debug: Fetching URL: https://commerce.example.com/rest/default/V1/products?searchCriteria=all&pageSize=10 with method: GET";
        assert_eq!(logger.lines(), vec![expected.to_string()]);
        Ok(())
    }

    #[tokio::test]
    async fn test_request_token_uses_bearer() -> Result<()> {
        let http = MockHttpSend::new(StatusCode::OK, "{}");
        let client = client(http.clone(), RecordingLogger::default());

        client
            .delete(
                "carts/mine/items/1",
                CallOptions::new().with_request_token("customer-token"),
            )
            .await?;

        let req = http.last_request();
        assert_eq!(req.method(), Method::DELETE);
        assert_eq!(req.headers()[AUTHORIZATION], "Bearer customer-token");
        Ok(())
    }

    #[tokio::test]
    async fn test_custom_headers_override_authorization() -> Result<()> {
        let http = MockHttpSend::new(StatusCode::OK, "{}");
        let client = client(http.clone(), RecordingLogger::default());

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Custom abc"));
        headers.insert("x-store", HeaderValue::from_static("gb"));

        client
            .put(
                "products/sku-1",
                json!({"product": {"price": 10}}),
                CallOptions::new().with_headers(headers),
            )
            .await?;

        let req = http.last_request();
        assert_eq!(req.method(), Method::PUT);
        assert_eq!(req.headers().get_all(AUTHORIZATION).iter().count(), 1);
        assert_eq!(req.headers()[AUTHORIZATION], "Custom abc");
        assert_eq!(req.headers()["x-store"], "gb");
        assert_eq!(req.headers()[http::header::CONTENT_TYPE], "application/json");
        assert_eq!(
            serde_json::from_slice::<Value>(req.body())?,
            json!({"product": {"price": 10}})
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_consumer_token() -> Result<()> {
        let http = MockHttpSend::new(StatusCode::OK, r#""customer-token""#);
        let client = client(http.clone(), RecordingLogger::default());

        let token = client
            .consumer_token(json!({"username": "user@example.com", "password": "secret"}))
            .await?;
        assert_eq!(token, json!("customer-token"));

        let req = http.last_request();
        assert_eq!(req.method(), Method::POST);
        assert_eq!(
            req.uri().to_string(),
            "https://commerce.example.com/rest/default/V1/integration/customer/token"
        );
        assert!(req.headers()[AUTHORIZATION]
            .to_str()
            .unwrap()
            .starts_with("OAuth "));
        Ok(())
    }

    #[tokio::test]
    async fn test_error_status_is_logged_and_raised() {
        let http = MockHttpSend::new(StatusCode::NOT_FOUND, r#"{"message":"No such entity."}"#);
        let logger = RecordingLogger::default();
        let client = client(http, logger.clone());

        let err = client
            .get("products/missing", CallOptions::new())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Transport);
        assert_eq!(err.message(), "Request failed with status code 404");
        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(err.response_body(), Some(r#"{"message":"No such entity."}"#));

        let lines = logger.lines();
        assert_eq!(lines.len(), 3);
        let prefix = "error: Error fetching URL https://commerce.example.com/rest/default/V1/products/missing: ";
        assert!(lines[1].starts_with(prefix));
        assert_eq!(
            lines[2],
            r#"error: Error body https://commerce.example.com/rest/default/V1/products/missing: {"message":"No such entity."}"#
        );
    }

    #[tokio::test]
    async fn test_transport_failure_without_body() {
        let logger = RecordingLogger::default();
        let ctx = Context::new().with_logger(logger.clone());
        let client = RestClient::commerce(
            ctx,
            "https://commerce.example.com",
            Some("gb"),
            Credential::new("ck", "cs", "at", "ats"),
        );

        let err = client.get("products", CallOptions::new()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert!(err.response_body().is_none());

        let lines = logger.lines();
        assert_eq!(lines.len(), 2);
        let prefix = "error: Error fetching URL https://commerce.example.com/rest/gb/V1/products: ";
        assert!(lines[1].starts_with(prefix));
    }

    #[tokio::test]
    async fn test_invalid_resource_is_logged() {
        let http = MockHttpSend::new(StatusCode::OK, "{}");
        let logger = RecordingLogger::default();
        let client = client(http.clone(), logger.clone());

        let err = client
            .get("products/my sku", CallOptions::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
        assert!(http.requests.lock().unwrap().is_empty());

        let lines = logger.lines();
        assert_eq!(lines.len(), 2);
        let prefix = "error: Error fetching URL https://commerce.example.com/rest/default/V1/products/my sku: ";
        assert!(lines[1].starts_with(prefix));
    }

    #[tokio::test]
    async fn test_partial_config_is_still_signed() -> Result<()> {
        let http = MockHttpSend::new(StatusCode::OK, "[]");
        let ctx = Context::new()
            .with_http_send(http.clone())
            .with_logger(RecordingLogger::default());
        let config = Config::new()
            .with_base_url("https://commerce.example.com")
            .with_credential(Credential::new("ck", "cs", "at", ""));
        let config = Config {
            access_token_secret: None,
            ..config
        };

        let client = RestClient::from_config(ctx, config)?;
        client.get("products", CallOptions::new()).await?;

        let req = http.last_request();
        assert!(req.headers()[AUTHORIZATION]
            .to_str()
            .unwrap()
            .starts_with("OAuth "));
        Ok(())
    }

    #[tokio::test]
    async fn test_from_config_requires_base_url() {
        let err = RestClient::from_config(Context::new(), Config::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test_case(b"", Value::Null; "empty body")]
    #[test_case(br#"{"id":1}"#, json!({"id": 1}); "json object")]
    #[test_case(b"true", json!(true); "json scalar")]
    #[test_case(b"<html>oops</html>", json!("<html>oops</html>"); "not json")]
    fn test_decode_json(body: &[u8], expected: Value) {
        assert_eq!(decode_json(body), expected);
    }
}
