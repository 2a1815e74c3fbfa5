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

// Env values used by the reviews client.
pub const GC_GRAPHQL_ENDPOINT: &str = "GC_GRAPHQL_ENDPOINT";
pub const GC_CLIENT_ID_REVIEW: &str = "GC_CLIENT_ID_REVIEW";
pub const GC_CLIENT_ID_REVIEW_GB: &str = "GC_CLIENT_ID_REVIEW_GB";
pub const GC_CLIENT_ID_REVIEW_DE: &str = "GC_CLIENT_ID_REVIEW_DE";
pub const GC_CLIENT_ID_REVIEW_ES: &str = "GC_CLIENT_ID_REVIEW_ES";

pub const STORE_HEADER: &str = "store";
pub const OPERATION_NAME: &str = "operationName";
pub const PRODUCT_REVIEWS_OPERATION: &str = "ProductReviews";

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const DEFAULT_SORT: &str = "date";
pub const DEFAULT_DIRECTION: &str = "desc";
