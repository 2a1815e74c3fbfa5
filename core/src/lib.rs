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

//! Core components for calling commerce platform APIs.
//!
//! This crate provides the foundational types and traits shared by the
//! commerce-api service crates.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds implementations for HTTP sending, environment access and logging
//! - **RequestDescriptor**: The immutable `{method, url, body}` unit that is signed and dispatched
//! - **Traits**: Abstract interfaces for credential loading (`ProvideCredential`) and request signing (`SignRequest`)
//! - **Signer**: Loads a credential and produces the `Authorization` header for a request,
//!   or substitutes a bearer token when the caller supplies one
//!
//! ## Example
//!
//! ```no_run
//! use commerce_api_core::{
//!     AuthMode, Context, Error, ProvideCredential, RequestDescriptor, Result, SignRequest,
//!     Signer, SigningCredential,
//! };
//! use async_trait::async_trait;
//! use http::HeaderValue;
//!
//! #[derive(Clone, Debug)]
//! struct MyCredential {
//!     key: String,
//! }
//!
//! impl SigningCredential for MyCredential {
//!     fn is_valid(&self) -> bool {
//!         !self.key.is_empty()
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MyProvider;
//!
//! #[async_trait]
//! impl ProvideCredential for MyProvider {
//!     type Credential = MyCredential;
//!
//!     async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
//!         Ok(Some(MyCredential {
//!             key: "my-key".to_string(),
//!         }))
//!     }
//! }
//!
//! #[derive(Debug)]
//! struct MySigner;
//!
//! #[async_trait]
//! impl SignRequest for MySigner {
//!     type Credential = MyCredential;
//!
//!     async fn sign_request(
//!         &self,
//!         _ctx: &Context,
//!         _req: &RequestDescriptor,
//!         cred: Option<&Self::Credential>,
//!     ) -> Result<HeaderValue> {
//!         let cred = cred.ok_or_else(|| Error::credential_invalid("credential must be loaded"))?;
//!         Ok(HeaderValue::from_str(&format!("Key {}", cred.key))?)
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyProvider, MySigner);
//!
//! let req = RequestDescriptor::get("https://example.com/rest/default/V1/products")?;
//! let header = signer.authorize(&req, &AuthMode::Signed).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Traits
//!
//! - [`HttpSend`]: For sending HTTP requests
//! - [`Env`]: For environment variable access
//! - [`Logger`]: For the `debug/info/error` logging capability
//! - [`ProvideCredential`]: For loading credentials from various sources
//! - [`SignRequest`]: For computing a service-specific `Authorization` header
//! - [`SigningCredential`]: For validating credentials
//!
//! ## Utilities
//!
//! - [`hash`]: HMAC and base64 helpers
//! - [`time`]: Time helpers
//! - [`utils`]: Redaction and RFC 3986 percent-encoding

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{
    Context, Env, HttpSend, LogLogger, Logger, NoopEnv, NoopHttpSend, OsEnv, StaticEnv,
};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideCredential, ProvideCredentialChain, SignRequest, SigningCredential};
mod request;
pub use request::{AuthMode, RequestDescriptor};
mod signer;
pub use signer::Signer;
