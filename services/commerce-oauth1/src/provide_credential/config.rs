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
use commerce_api_core::{Context, ProvideCredential, Result};
use std::sync::Arc;

use crate::config::Config;
use crate::credential::Credential;

/// ConfigCredentialProvider loads the credential from a [`Config`],
/// filling unset fields from env.
#[derive(Debug)]
pub struct ConfigCredentialProvider {
    config: Arc<Config>,
}

impl ConfigCredentialProvider {
    /// Create a new loader via config.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProvideCredential for ConfigCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let config = self.config.as_ref().clone().from_env(ctx);
        Ok(config.credential())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use commerce_api_core::StaticEnv;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_config_provider_mixes_config_and_env() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (COMMERCE_ACCESS_TOKEN.to_string(), "env_token".to_string()),
                (
                    COMMERCE_ACCESS_TOKEN_SECRET.to_string(),
                    "env_token_secret".to_string(),
                ),
            ]),
        });
        let config = Config {
            consumer_key: Some("cfg_key".to_string()),
            consumer_secret: Some("cfg_secret".to_string()),
            access_token: Some("cfg_token".to_string()),
            ..Default::default()
        };

        let cred = ConfigCredentialProvider::new(Arc::new(config))
            .provide_credential(&ctx)
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred.consumer_key, "cfg_key");
        assert_eq!(cred.consumer_secret, "cfg_secret");
        assert_eq!(cred.access_token, "cfg_token");
        assert_eq!(cred.access_token_secret, "env_token_secret");

        Ok(())
    }

    #[tokio::test]
    async fn test_config_provider_incomplete() -> anyhow::Result<()> {
        let config = Config {
            consumer_key: Some("cfg_key".to_string()),
            ..Default::default()
        };

        let cred = ConfigCredentialProvider::new(Arc::new(config))
            .provide_credential(&Context::new())
            .await?
            .expect("credential must be loaded");
        assert_eq!(cred.consumer_key, "cfg_key");
        assert_eq!(cred.consumer_secret, "");
        assert_eq!(cred.access_token_secret, "");

        Ok(())
    }
}
