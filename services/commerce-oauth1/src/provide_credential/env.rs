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

use crate::{constants::*, Credential};

/// EnvCredentialProvider loads the credential from `COMMERCE_*` env values.
///
/// Yields nothing when none of the four values is set. Unset values among
/// the rest are signed as empty strings.
#[derive(Debug, Default)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let envs = ctx.env_vars();

        let fields = [
            COMMERCE_CONSUMER_KEY,
            COMMERCE_CONSUMER_SECRET,
            COMMERCE_ACCESS_TOKEN,
            COMMERCE_ACCESS_TOKEN_SECRET,
        ]
        .map(|k| envs.get(k).cloned());
        if fields.iter().all(Option::is_none) {
            return Ok(None);
        }

        let [ck, cs, at, ats] = fields.map(Option::unwrap_or_default);
        Ok(Some(Credential::new(ck, cs, at, ats)))
    }
}
