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

use commerce_api_core::Context;

use crate::constants::*;
use crate::StoreClientIds;

/// Config carries all the configuration for the reviews GraphQL client.
#[derive(Clone, Default, Debug)]
pub struct Config {
    /// `endpoint` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`GC_GRAPHQL_ENDPOINT`]
    pub endpoint: Option<String>,
    /// `client_id_review` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`GC_CLIENT_ID_REVIEW`]
    pub client_id_review: Option<String>,
    /// `client_id_review_gb` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`GC_CLIENT_ID_REVIEW_GB`]
    pub client_id_review_gb: Option<String>,
    /// `client_id_review_de` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`GC_CLIENT_ID_REVIEW_DE`]
    pub client_id_review_de: Option<String>,
    /// `client_id_review_es` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`GC_CLIENT_ID_REVIEW_ES`]
    pub client_id_review_es: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the default reviews client id
    pub fn with_client_id_review(mut self, client_id: impl Into<String>) -> Self {
        self.client_id_review = Some(client_id.into());
        self
    }

    /// Load config from env.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        let fields = [
            (&mut self.endpoint, GC_GRAPHQL_ENDPOINT),
            (&mut self.client_id_review, GC_CLIENT_ID_REVIEW),
            (&mut self.client_id_review_gb, GC_CLIENT_ID_REVIEW_GB),
            (&mut self.client_id_review_de, GC_CLIENT_ID_REVIEW_DE),
            (&mut self.client_id_review_es, GC_CLIENT_ID_REVIEW_ES),
        ];
        for (field, key) in fields {
            if let Some(v) = ctx.env_var(key) {
                field.get_or_insert(v);
            }
        }

        self
    }

    /// Build the endpoint config.
    ///
    /// Missing values stay empty, [`crate::GraphqlClient::execute`] rejects them.
    pub fn endpoint_config(&self) -> EndpointConfig {
        EndpointConfig {
            endpoint: self.endpoint.clone().unwrap_or_default(),
            client_ids: StoreClientIds {
                default: self.client_id_review.clone().unwrap_or_default(),
                gb: self.client_id_review_gb.clone(),
                de: self.client_id_review_de.clone(),
                es: self.client_id_review_es.clone(),
            },
        }
    }
}

/// The GraphQL endpoint and the client ids used against it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Absolute url every query is posted to.
    pub endpoint: String,
    /// Reviews client ids per store.
    pub client_ids: StoreClientIds,
}

impl EndpointConfig {
    /// Create an endpoint config.
    pub fn new(endpoint: impl Into<String>, client_ids: StoreClientIds) -> Self {
        Self {
            endpoint: endpoint.into(),
            client_ids,
        }
    }
}
