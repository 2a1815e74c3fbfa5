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

//! Product reviews over the commerce GraphQL api.
//!
//! ```no_run
//! use commerce_api_core::Context;
//! use commerce_api_reviews::{Config, ReviewOptions, ReviewsService};
//!
//! # async fn example(ctx: Context) -> commerce_api_core::Result<()> {
//! // Missing values are read from `GC_*` env.
//! let service = ReviewsService::from_config(ctx, Config::new());
//!
//! let resp = service
//!     .fetch_reviews_for_product("123", &ReviewOptions::new().with_store_code("DE"))
//!     .await?;
//! println!("{} reviews, average {}", resp.total_reviews, resp.average_score);
//! # Ok(())
//! # }
//! ```

mod config;
pub use config::{Config, EndpointConfig};

mod store;
pub use store::{Store, StoreClientIds};

mod graphql;
pub use graphql::{GraphqlClient, GraphqlRequest};

mod review;
pub use review::{Pagination, Review, ReviewOptions, ReviewsResponse};

mod reviews;
pub use reviews::{ReviewsService, PRODUCT_REVIEWS_QUERY};

pub mod constants;
