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

//! OAuth 1.0a (HMAC-SHA256) REST client for the commerce api.
//!
//! ```no_run
//! use commerce_api_core::Context;
//! use commerce_api_oauth1::{CallOptions, Config, RestClient};
//!
//! # async fn example(ctx: Context) -> commerce_api_core::Result<()> {
//! // Missing values are read from `COMMERCE_*` env.
//! let client = RestClient::from_config(ctx, Config::new().with_store_code("default"))?;
//!
//! let order = client.get("orders/1", CallOptions::new()).await?;
//! let customer = client
//!     .get("customers/me", CallOptions::new().with_request_token("customer-token"))
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod config;
pub use config::{ClientConfig, Config};

mod credential;
pub use credential::Credential;

mod client;
pub use client::{CallOptions, RestClient};

mod sign_request;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;

pub mod constants;
