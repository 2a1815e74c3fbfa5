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
use std::str::FromStr;

use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue, Method, Uri};
use serde_json::Value;

use crate::utils::Redact;
use crate::{Error, Result};

/// RequestDescriptor is the unit that gets signed and dispatched.
///
/// A descriptor is immutable once built: signers only read it. Build a fresh one for
/// every call, OAuth signatures are bound to their nonce and timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    method: Method,
    url: Uri,
    body: Option<Value>,
}

impl RequestDescriptor {
    /// Create a descriptor for `GET`, `POST`, `PUT` or `DELETE`.
    pub fn new(method: Method, url: &str) -> Result<Self> {
        if !matches!(
            method,
            Method::GET | Method::POST | Method::PUT | Method::DELETE
        ) {
            return Err(Error::request_invalid(format!(
                "unsupported http method: {method}"
            )));
        }

        let url = Uri::from_str(url)?;
        if url.scheme().is_none() || url.authority().is_none() {
            return Err(Error::request_invalid(format!(
                "request url must be absolute: {url}"
            )));
        }

        Ok(Self {
            method,
            url,
            body: None,
        })
    }

    /// Create a `GET` descriptor.
    pub fn get(url: &str) -> Result<Self> {
        Self::new(Method::GET, url)
    }

    /// Create a `POST` descriptor with a JSON body.
    pub fn post(url: &str, body: Value) -> Result<Self> {
        Ok(Self::new(Method::POST, url)?.with_body(body))
    }

    /// Attach a JSON body while building the descriptor.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// HTTP method.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Absolute request url.
    pub fn url(&self) -> &Uri {
        &self.url
    }

    /// JSON body, if any.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Build the http request for this descriptor.
    ///
    /// `headers` replace any header of the same name, including `Content-Type`.
    /// `Content-Type: application/json` is only set when a body is present.
    pub fn to_http_request(&self, headers: HeaderMap) -> Result<http::Request<Bytes>> {
        let body = match &self.body {
            Some(v) => Bytes::from(serde_json::to_vec(v)?),
            None => Bytes::new(),
        };

        let mut req = http::Request::builder()
            .method(self.method.clone())
            .uri(self.url.clone())
            .body(body)?;

        if self.body.is_some() {
            req.headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        req.headers_mut().extend(headers);

        Ok(req)
    }
}

/// AuthMode selects how a request is authenticated.
///
/// Exactly one mode applies per call.
#[derive(Clone, PartialEq, Eq)]
pub enum AuthMode {
    /// Sign the request with the loaded credential.
    Signed,
    /// Send `Authorization: Bearer <token>` without signing.
    Bearer(String),
}

impl AuthMode {
    /// Infer the mode from a caller supplied request token.
    ///
    /// A non-empty token always wins over signing, an empty token means sign.
    pub fn from_request_token(token: &str) -> Self {
        if token.is_empty() {
            AuthMode::Signed
        } else {
            AuthMode::Bearer(token.to_string())
        }
    }
}

impl Debug for AuthMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthMode::Signed => f.write_str("Signed"),
            AuthMode::Bearer(token) => f.debug_tuple("Bearer").field(&Redact::from(token)).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_descriptor_rejects_unsupported_method() {
        let err = RequestDescriptor::new(Method::PATCH, "https://example.com/a").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::RequestInvalid);
    }

    #[test]
    fn test_descriptor_rejects_relative_url() {
        assert!(RequestDescriptor::get("/rest/V1/products").is_err());
    }

    #[test]
    fn test_to_http_request_with_body() -> Result<()> {
        let req = RequestDescriptor::post("https://example.com/a", json!({"sku": "abc"}))?;
        let http_req = req.to_http_request(HeaderMap::new())?;

        assert_eq!(http_req.method(), Method::POST);
        assert_eq!(http_req.uri(), "https://example.com/a");
        assert_eq!(
            http_req.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(http_req.body().as_ref(), br#"{"sku":"abc"}"#);
        Ok(())
    }

    #[test]
    fn test_to_http_request_without_body() -> Result<()> {
        let req = RequestDescriptor::get("https://example.com/a")?;
        let http_req = req.to_http_request(HeaderMap::new())?;

        assert!(http_req.headers().get(CONTENT_TYPE).is_none());
        assert!(http_req.body().is_empty());
        Ok(())
    }

    #[test]
    fn test_headers_override_content_type() -> Result<()> {
        let req = RequestDescriptor::new(Method::PUT, "https://example.com/a")?
            .with_body(json!([]));
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));

        let http_req = req.to_http_request(headers)?;
        assert_eq!(http_req.headers().get(CONTENT_TYPE).unwrap(), "text/plain");
        Ok(())
    }

    #[test]
    fn test_auth_mode_from_request_token() {
        assert_eq!(AuthMode::from_request_token(""), AuthMode::Signed);
        assert_eq!(
            AuthMode::from_request_token("abc"),
            AuthMode::Bearer("abc".to_string())
        );
        assert_eq!(format!("{:?}", AuthMode::from_request_token("abc")), "Bearer(***)");
    }
}
