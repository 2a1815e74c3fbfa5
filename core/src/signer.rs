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

use std::sync::Arc;

use http::HeaderValue;

use crate::{
    AuthMode, Context, ProvideCredential, RequestDescriptor, Result, SignRequest,
    SigningCredential,
};

/// Signer is the main struct used to authorize requests.
///
/// The credential is loaded on every call. Signer holds no mutable state, so clones
/// can be shared across tasks freely.
#[derive(Clone, Debug)]
pub struct Signer<C: SigningCredential> {
    ctx: Context,
    provider: Arc<dyn ProvideCredential<Credential = C>>,
    signer: Arc<dyn SignRequest<Credential = C>>,
}

impl<C: SigningCredential> Signer<C> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        provider: impl ProvideCredential<Credential = C>,
        signer: impl SignRequest<Credential = C>,
    ) -> Self {
        Self {
            ctx,
            provider: Arc::new(provider),
            signer: Arc::new(signer),
        }
    }

    /// Get the context this signer was built with.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Compute the signed `Authorization` header for `req`.
    pub async fn sign(&self, req: &RequestDescriptor) -> Result<HeaderValue> {
        let cred = self.provider.provide_credential(&self.ctx).await?;
        if !cred.is_valid() {
            log::warn!("signing with an incomplete credential, the server will likely reject it");
        }

        self.signer.sign_request(&self.ctx, req, cred.as_ref()).await
    }

    /// Compute the `Authorization` header for `req` under `mode`.
    ///
    /// `AuthMode::Bearer` never touches the credential provider or the signer.
    pub async fn authorize(&self, req: &RequestDescriptor, mode: &AuthMode) -> Result<HeaderValue> {
        match mode {
            AuthMode::Bearer(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {token}"))?;
                value.set_sensitive(true);
                Ok(value)
            }
            AuthMode::Signed => self.sign(req).await,
        }
    }
}
