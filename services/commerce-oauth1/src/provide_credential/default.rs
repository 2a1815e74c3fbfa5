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

use async_trait::async_trait;
use commerce_api_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

use crate::credential::Credential;
use crate::provide_credential::EnvCredentialProvider;

/// DefaultCredentialProvider tries env values, plus any provider pushed in front of them.
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider
    pub fn new() -> Self {
        let chain = ProvideCredentialChain::new().push(EnvCredentialProvider::new());

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }

    /// Add a credential provider to the front of the default chain.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use commerce_api_oauth1::{DefaultCredentialProvider, StaticCredentialProvider};
    ///
    /// let provider = DefaultCredentialProvider::new().push_front(StaticCredentialProvider::new(
    ///     "consumer_key",
    ///     "consumer_secret",
    ///     "access_token",
    ///     "access_token_secret",
    /// ));
    /// ```
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = Credential> + 'static,
    ) -> Self {
        self.chain = self.chain.push_front(provider);
        self
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::StaticCredentialProvider;
    use commerce_api_core::StaticEnv;
    use std::collections::HashMap;

    fn full_env() -> StaticEnv {
        StaticEnv {
            envs: HashMap::from_iter([
                (COMMERCE_CONSUMER_KEY.to_string(), "env_key".to_string()),
                (COMMERCE_CONSUMER_SECRET.to_string(), "env_secret".to_string()),
                (COMMERCE_ACCESS_TOKEN.to_string(), "env_token".to_string()),
                (
                    COMMERCE_ACCESS_TOKEN_SECRET.to_string(),
                    "env_token_secret".to_string(),
                ),
            ]),
        }
    }

    #[tokio::test]
    async fn test_default_loader_without_env() {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::new(),
        });

        let loader = DefaultCredentialProvider::new();
        let credential = loader.provide_credential(&ctx).await.unwrap();

        assert!(credential.is_none());
    }

    #[tokio::test]
    async fn test_default_loader_with_env() {
        let ctx = Context::new().with_env(full_env());

        let loader = DefaultCredentialProvider::new();
        let credential = loader.provide_credential(&ctx).await.unwrap().unwrap();

        assert_eq!("env_key", credential.consumer_key);
        assert_eq!("env_token_secret", credential.access_token_secret);
    }

    #[tokio::test]
    async fn test_push_front_wins_over_env() {
        let ctx = Context::new().with_env(full_env());

        let loader = DefaultCredentialProvider::new()
            .push_front(StaticCredentialProvider::new("ck", "cs", "at", "ats"));
        let credential = loader.provide_credential(&ctx).await.unwrap().unwrap();

        assert_eq!("ck", credential.consumer_key);
        assert_eq!("ats", credential.access_token_secret);
    }
}
