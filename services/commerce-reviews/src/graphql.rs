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

use commerce_api_core::{Context, Error, RequestDescriptor, Result};
use http::HeaderMap;
use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::constants::OPERATION_NAME;
use crate::EndpointConfig;

/// The `{query, variables, operationName}` body posted to a GraphQL endpoint.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest<'a> {
    /// Query document.
    pub query: &'a str,
    /// Query variables.
    pub variables: &'a Map<String, Value>,
    /// Taken from `variables.operationName`, `null` if absent or empty.
    pub operation_name: Option<&'a str>,
}

impl<'a> GraphqlRequest<'a> {
    /// Build the envelope for `query` and `variables`.
    pub fn new(query: &'a str, variables: &'a Map<String, Value>) -> Self {
        let operation_name = variables
            .get(OPERATION_NAME)
            .and_then(Value::as_str)
            .filter(|v| !v.is_empty());

        Self {
            query,
            variables,
            operation_name,
        }
    }
}

/// GraphqlClient posts queries to a GraphQL endpoint.
///
/// No request is signed. Callers authenticate through query variables or headers.
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    ctx: Context,
}

impl GraphqlClient {
    /// Create a new client.
    pub fn new(ctx: Context) -> Self {
        Self { ctx }
    }

    /// Get the context this client was built with.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Execute `query` and return its `data`.
    ///
    /// Any `errors` in the response fails the call, even when `data` is present.
    /// Failures after validation are logged before being returned.
    pub async fn execute(
        &self,
        query: &str,
        variables: &Map<String, Value>,
        endpoint: &EndpointConfig,
        headers: HeaderMap,
    ) -> Result<Value> {
        if endpoint.endpoint.is_empty() || endpoint.client_ids.default.is_empty() {
            return Err(Error::config_invalid(
                "Missing Commerce GraphQL endpoint data",
            ));
        }

        match self.send(query, variables, &endpoint.endpoint, headers).await {
            Ok(data) => Ok(data),
            Err(err) => {
                let logger = self.ctx.logger();
                logger.error(&format!("Error executing GraphQL query: {err}"));
                if let Some(body) = err.response_body() {
                    logger.error(&format!("Error response: {body}"));
                }
                Err(err)
            }
        }
    }

    async fn send(
        &self,
        query: &str,
        variables: &Map<String, Value>,
        endpoint: &str,
        headers: HeaderMap,
    ) -> Result<Value> {
        let envelope = GraphqlRequest::new(query, variables);
        debug!(
            "executing graphql operation {:?} on {endpoint}",
            envelope.operation_name
        );

        let req = RequestDescriptor::post(endpoint, serde_json::to_value(&envelope)?)?;
        let resp = self.ctx.http_send(req.to_http_request(headers)?).await?;

        let status = resp.status();
        let body = resp.into_body();
        if !status.is_success() {
            return Err(Error::transport(format!(
                "Request failed with status code {}",
                status.as_u16()
            ))
            .with_response(status, String::from_utf8_lossy(&body)));
        }

        let mut result: Map<String, Value> = serde_json::from_slice(&body).map_err(|e| {
            Error::response_invalid("GraphQL response is not a JSON object")
                .with_source(e)
                .with_response(status, String::from_utf8_lossy(&body))
        })?;

        match result.remove("errors") {
            None | Some(Value::Null) => {}
            Some(errors) => {
                return Err(Error::protocol(format!("GraphQL query error: {errors}")));
            }
        }

        Ok(result.remove("data").unwrap_or(Value::Null))
    }
}
