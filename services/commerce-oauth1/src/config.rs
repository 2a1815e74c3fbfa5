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

use commerce_api_core::{utils::Redact, Context, Error, Result};

use crate::constants::*;
use crate::Credential;

/// Config carries all the configuration for the commerce REST client.
#[derive(Clone, Default)]
pub struct Config {
    /// `base_url` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`COMMERCE_BASE_URL`]
    pub base_url: Option<String>,
    /// `store_code` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`COMMERCE_STORE_CODE`]
    pub store_code: Option<String>,
    /// `api_version` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`COMMERCE_API_VERSION`]
    pub api_version: Option<String>,
    /// `consumer_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`COMMERCE_CONSUMER_KEY`]
    pub consumer_key: Option<String>,
    /// `consumer_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`COMMERCE_CONSUMER_SECRET`]
    pub consumer_secret: Option<String>,
    /// `access_token` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`COMMERCE_ACCESS_TOKEN`]
    pub access_token: Option<String>,
    /// `access_token_secret` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`COMMERCE_ACCESS_TOKEN_SECRET`]
    pub access_token_secret: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set base_url
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set store_code
    pub fn with_store_code(mut self, store_code: impl Into<String>) -> Self {
        self.store_code = Some(store_code.into());
        self
    }

    /// Set api_version
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Set all four OAuth values at once.
    pub fn with_credential(mut self, cred: Credential) -> Self {
        self.consumer_key = Some(cred.consumer_key);
        self.consumer_secret = Some(cred.consumer_secret);
        self.access_token = Some(cred.access_token);
        self.access_token_secret = Some(cred.access_token_secret);
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let fields = [
            (&mut self.base_url, COMMERCE_BASE_URL),
            (&mut self.store_code, COMMERCE_STORE_CODE),
            (&mut self.api_version, COMMERCE_API_VERSION),
            (&mut self.consumer_key, COMMERCE_CONSUMER_KEY),
            (&mut self.consumer_secret, COMMERCE_CONSUMER_SECRET),
            (&mut self.access_token, COMMERCE_ACCESS_TOKEN),
            (&mut self.access_token_secret, COMMERCE_ACCESS_TOKEN_SECRET),
        ];
        for (field, key) in fields {
            if let Some(v) = ctx.env_var(key) {
                field.get_or_insert(v);
            }
        }

        self
    }

    /// Build the credential if any OAuth value is configured.
    ///
    /// Unset values are signed as empty strings, the server rejects them.
    pub fn credential(&self) -> Option<Credential> {
        let fields = [
            &self.consumer_key,
            &self.consumer_secret,
            &self.access_token,
            &self.access_token_secret,
        ];
        if fields.iter().all(|v| v.is_none()) {
            return None;
        }

        let [ck, cs, at, ats] = fields.map(|v| v.clone().unwrap_or_default());
        Some(Credential::new(ck, cs, at, ats))
    }

    /// Build the commerce URL layout `<base_url>/rest/<store_code>/<api_version>/`.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let base_url = self
            .base_url
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::config_invalid("commerce base url is not configured"))?;

        let mut cfg = ClientConfig::commerce(base_url, self.store_code.as_deref());
        if let Some(version) = self.api_version.as_deref().filter(|v| !v.is_empty()) {
            cfg.api_version = version.to_string();
        }
        Ok(cfg)
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("store_code", &self.store_code)
            .field("api_version", &self.api_version)
            .field("consumer_key", &self.consumer_key.as_ref().map(Redact::from))
            .field(
                "consumer_secret",
                &self.consumer_secret.as_ref().map(Redact::from),
            )
            .field("access_token", &self.access_token.as_ref().map(Redact::from))
            .field(
                "access_token_secret",
                &self.access_token_secret.as_ref().map(Redact::from),
            )
            .finish()
    }
}

/// ClientConfig decides how resource paths become absolute urls.
///
/// It is immutable for the lifetime of a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Server url every resource url starts with, including its trailing slash.
    pub base_url: String,
    /// Version segment placed between `base_url` and the resource path.
    pub api_version: String,
    /// Store the urls are scoped to, if any.
    pub store_code: Option<String>,
}

impl ClientConfig {
    /// Create a config from an explicit server url and version.
    ///
    /// Urls are built as `base_url + api_version + "/" + resource`.
    pub fn new(base_url: impl Into<String>, api_version: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_version: api_version.into(),
            store_code: None,
        }
    }

    /// Create the commerce layout `<base_url>/rest/<store_code>/V1/`.
    ///
    /// A missing or empty store code uses the `default` store.
    pub fn commerce(base_url: &str, store_code: Option<&str>) -> Self {
        let store_code = store_code
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_STORE_CODE);

        Self {
            base_url: format!("{}/rest/{store_code}/", base_url.trim_end_matches('/')),
            api_version: DEFAULT_API_VERSION.to_string(),
            store_code: Some(store_code.to_string()),
        }
    }

    /// Build the absolute url for a resource path.
    ///
    /// The resource path is trusted input and is not escaped.
    pub fn resource_url(&self, resource: &str) -> String {
        format!("{}{}/{}", self.base_url, self.api_version, resource)
    }
}
