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

use std::fmt::Write;

use async_trait::async_trait;
use commerce_api_core::hash::base64_hmac_sha256;
use commerce_api_core::time::{now, DateTime};
use commerce_api_core::utils::rfc3986_encode;
use commerce_api_core::{Context, Error, RequestDescriptor, Result, SignRequest};
use http::HeaderValue;
use log::debug;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::constants::*;
use crate::Credential;

/// RequestSigner that implements OAuth 1.0a with HMAC-SHA256.
///
/// - [RFC 5849: The OAuth 1.0 Protocol](https://www.rfc-editor.org/rfc/rfc5849)
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
    nonce: Option<String>,
}

impl RequestSigner {
    /// Create a new RequestSigner.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the nonce.
    ///
    /// # Note
    ///
    /// A fresh random nonce must be used for every request.
    /// Only use this function for testing.
    pub fn with_nonce(mut self, nonce: impl Into<String>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _ctx: &Context,
        req: &RequestDescriptor,
        credential: Option<&Self::Credential>,
    ) -> Result<HeaderValue> {
        let k = credential.ok_or_else(|| Error::credential_invalid("missing credential"))?;
        let now = self.time.unwrap_or_else(now);
        let nonce = self.nonce.clone().unwrap_or_else(generate_nonce);

        let mut oauth_params = vec![
            (OAUTH_CONSUMER_KEY, k.consumer_key.clone()),
            (OAUTH_NONCE, nonce),
            (OAUTH_SIGNATURE_METHOD, HMAC_SHA256.to_string()),
            (OAUTH_TIMESTAMP, now.timestamp().to_string()),
            (OAUTH_TOKEN, k.access_token.clone()),
            (OAUTH_VERSION, OAUTH_VERSION_1_0.to_string()),
        ];

        let string_to_sign = string_to_sign(req, &oauth_params)?;
        debug!("calculated string to sign: {string_to_sign}");

        let signing_key = format!(
            "{}&{}",
            rfc3986_encode(&k.consumer_secret),
            rfc3986_encode(&k.access_token_secret)
        );
        let signature = base64_hmac_sha256(signing_key.as_bytes(), string_to_sign.as_bytes());
        oauth_params.push((OAUTH_SIGNATURE, signature));
        oauth_params.sort();

        let mut value: HeaderValue = authorization_header(&oauth_params).parse()?;
        value.set_sensitive(true);
        Ok(value)
    }
}

fn generate_nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LENGTH)
        .map(char::from)
        .collect()
}

/// Construct the signature base string.
///
/// ## Format
///
/// ```text
/// METHOD + "&" +
/// encode(base url) + "&" +
/// encode(sorted, encoded parameters joined as k=v&k=v)
/// ```
///
/// Parameters are the `oauth_*` values plus the decoded query of the url.
fn string_to_sign(req: &RequestDescriptor, oauth_params: &[(&str, String)]) -> Result<String> {
    let url = req.url();

    let mut params: Vec<(String, String)> = oauth_params
        .iter()
        .map(|(k, v)| (rfc3986_encode(k), rfc3986_encode(v)))
        .collect();
    if let Some(query) = url.query() {
        params.extend(
            form_urlencoded::parse(query.as_bytes())
                .map(|(k, v)| (rfc3986_encode(&k), rfc3986_encode(&v))),
        );
    }
    params.sort();

    let normalized = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut s = String::new();
    write!(
        s,
        "{}&{}&{}",
        req.method().as_str(),
        rfc3986_encode(&base_url(url)?),
        rfc3986_encode(&normalized)
    )?;
    Ok(s)
}

/// Lowercase scheme and host, drop the default port and the query.
fn base_url(url: &http::Uri) -> Result<String> {
    let scheme = url
        .scheme_str()
        .ok_or_else(|| Error::request_invalid("url has no scheme"))?
        .to_lowercase();
    let host = url
        .host()
        .ok_or_else(|| Error::request_invalid("url has no host"))?
        .to_lowercase();

    let port = match (scheme.as_str(), url.port_u16()) {
        ("http", Some(80)) | ("https", Some(443)) | (_, None) => String::new(),
        (_, Some(port)) => format!(":{port}"),
    };

    Ok(format!("{scheme}://{host}{port}{}", url.path()))
}

fn authorization_header(params: &[(&str, String)]) -> String {
    let pairs = params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", rfc3986_encode(k), rfc3986_encode(v)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("OAuth {pairs}")
}
