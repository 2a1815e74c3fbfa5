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

use commerce_api_core::{Context, Error, Result};
use http::header::{HeaderName, HeaderValue};
use http::HeaderMap;
use serde_json::{Map, Value};

use crate::constants::*;
use crate::review::{as_f64, as_u64};
use crate::{
    Config, EndpointConfig, GraphqlClient, Pagination, Review, ReviewOptions, ReviewsResponse,
};

/// Query document for the `ProductReviews` operation.
pub const PRODUCT_REVIEWS_QUERY: &str = r#"
query ProductReviews($productId: String!, $perPage: String, $page: String, $sort: String, $direction: String, $clientId: String!) {
  productReviews(
    productId: $productId
    perPage: $perPage
    page: $page
    sort: $sort
    direction: $direction
    clientId: $clientId
  ) {
    status {
      code
      message
    }
    response {
      pagination {
        page
        perPage: per_page
        total
      }
      bottomLine: bottomline {
        averageScore: average_score
        totalReviews: total_review
      }
      reviews {
        id
        score
        votesUp: votes_up
        votesDown: votes_down
        content
        title
        createdAt: created_at
        deleted
        verifiedBuyer: verified_buyer
        user {
          userType: user_type
          displayName: display_name
        }
      }
    }
  }
}"#;

/// ReviewsService fetches product reviews and normalizes them into [`ReviewsResponse`].
#[derive(Debug, Clone)]
pub struct ReviewsService {
    client: GraphqlClient,
    endpoint: EndpointConfig,
}

impl ReviewsService {
    /// Create a new service.
    pub fn new(ctx: Context, endpoint: EndpointConfig) -> Self {
        Self {
            client: GraphqlClient::new(ctx),
            endpoint,
        }
    }

    /// Create a service from [`Config`], reading unset values from env.
    pub fn from_config(ctx: Context, config: Config) -> Self {
        let endpoint = config.from_env(&ctx).endpoint_config();
        Self::new(ctx, endpoint)
    }

    /// Endpoint config of this service.
    pub fn endpoint(&self) -> &EndpointConfig {
        &self.endpoint
    }

    /// Fetch one page of reviews for `product_id`.
    ///
    /// Every failure is reported as `Failed to fetch reviews for product <id>: <cause>`.
    pub async fn fetch_reviews_for_product(
        &self,
        product_id: &str,
        opts: &ReviewOptions,
    ) -> Result<ReviewsResponse> {
        self.fetch(product_id, opts)
            .await
            .map_err(|err| err.context(format!("Failed to fetch reviews for product {product_id}")))
    }

    async fn fetch(&self, product_id: &str, opts: &ReviewOptions) -> Result<ReviewsResponse> {
        let (page, per_page) = (opts.page(), opts.per_page());
        let variables = product_reviews_variables(
            product_id,
            page,
            per_page,
            opts.sort(),
            opts.direction(),
            self.endpoint.client_ids.resolve(opts.store_code()),
        );

        let mut headers = HeaderMap::new();
        if let Some(store_code) = opts.store_code() {
            headers.insert(
                HeaderName::from_static(STORE_HEADER),
                HeaderValue::from_str(store_code)?,
            );
        }

        let data = self
            .client
            .execute(PRODUCT_REVIEWS_QUERY, &variables, &self.endpoint, headers)
            .await?;

        let response = &data["productReviews"]["response"];
        if !response.is_object() {
            return Err(Error::response_invalid(
                "Failed to fetch reviews: Invalid data structure, missing productReviews.response",
            ));
        }

        Ok(normalize(response, page, per_page))
    }
}

fn product_reviews_variables(
    product_id: &str,
    page: u32,
    per_page: u32,
    sort: &str,
    direction: &str,
    client_id: &str,
) -> Map<String, Value> {
    let mut vars = Map::new();
    vars.insert("productId".to_string(), product_id.into());
    vars.insert("perPage".to_string(), per_page.to_string().into());
    vars.insert("page".to_string(), page.to_string().into());
    vars.insert("sort".to_string(), sort.into());
    vars.insert("direction".to_string(), direction.into());
    vars.insert("clientId".to_string(), client_id.into());
    vars.insert(
        OPERATION_NAME.to_string(),
        PRODUCT_REVIEWS_OPERATION.into(),
    );
    vars
}

/// Fill every field of [`ReviewsResponse`], falling back to the requested page
/// and zero values when upstream omits them.
fn normalize(response: &Value, page: u32, per_page: u32) -> ReviewsResponse {
    let pagination = &response["pagination"];
    let bottom_line = &response["bottomLine"];

    let reviews = response["reviews"]
        .as_array()
        .map(|reviews| {
            reviews
                .iter()
                .filter(|v| v.is_object())
                .map(Review::from_upstream)
                .collect()
        })
        .unwrap_or_default();

    ReviewsResponse {
        reviews,
        pagination: Pagination {
            page: as_u32(&pagination["page"]).unwrap_or(page),
            per_page: as_u32(&pagination["perPage"]).unwrap_or(per_page),
            total: as_u64(&pagination["total"]).unwrap_or_default(),
        },
        average_score: as_f64(&bottom_line["averageScore"]).unwrap_or_default(),
        total_reviews: as_u64(&bottom_line["totalReviews"]).unwrap_or_default(),
    }
}

fn as_u32(v: &Value) -> Option<u32> {
    as_u64(v).and_then(|v| u32::try_from(v).ok())
}
