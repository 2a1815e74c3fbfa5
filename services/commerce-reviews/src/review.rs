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

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::*;

/// A single product review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub score: u32,
    pub content: String,
    pub title: String,
    pub created_at: String,
}

impl Review {
    /// Project an upstream review, dropping every field not listed on [`Review`].
    ///
    /// Numeric ids become strings and fractional scores are rounded.
    pub(crate) fn from_upstream(v: &Value) -> Self {
        Self {
            id: match &v["id"] {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                _ => String::new(),
            },
            score: as_u64(&v["score"])
                .and_then(|s| u32::try_from(s).ok())
                .unwrap_or_default(),
            content: as_string(&v["content"]),
            title: as_string(&v["title"]),
            created_at: as_string(&v["createdAt"]),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

/// Normalized reviews of a product. Every field is always populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewsResponse {
    pub reviews: Vec<Review>,
    pub pagination: Pagination,
    pub average_score: f64,
    pub total_reviews: u64,
}

/// Options for [`crate::ReviewsService::fetch_reviews_for_product`].
///
/// Zero or empty values fall back to the defaults: page `1`, `10` per page,
/// sorted by `date` in `desc` order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewOptions {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub sort: Option<String>,
    pub direction: Option<String>,
    /// Store to scope the request to, sent as the `Store` header.
    pub store_code: Option<String>,
}

impl ReviewOptions {
    /// Create options with every value defaulted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set per_page
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Set sort
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Set direction
    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    /// Set store_code
    pub fn with_store_code(mut self, store_code: impl Into<String>) -> Self {
        self.store_code = Some(store_code.into());
        self
    }

    pub(crate) fn page(&self) -> u32 {
        self.page.filter(|v| *v > 0).unwrap_or(DEFAULT_PAGE)
    }

    pub(crate) fn per_page(&self) -> u32 {
        self.per_page.filter(|v| *v > 0).unwrap_or(DEFAULT_PER_PAGE)
    }

    pub(crate) fn sort(&self) -> &str {
        self.sort
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_SORT)
    }

    pub(crate) fn direction(&self) -> &str {
        self.direction
            .as_deref()
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_DIRECTION)
    }

    pub(crate) fn store_code(&self) -> Option<&str> {
        self.store_code.as_deref().filter(|v| !v.is_empty())
    }
}

fn as_string(v: &Value) -> String {
    v.as_str().map(str::to_string).unwrap_or_default()
}

/// Upstream numbers may arrive as floats or numeric strings.
pub(crate) fn as_f64(v: &Value) -> Option<f64> {
    let n = match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    n.filter(|v| v.is_finite())
}

pub(crate) fn as_u64(v: &Value) -> Option<u64> {
    as_f64(v).filter(|v| *v >= 0.0).map(|v| v.round() as u64)
}
