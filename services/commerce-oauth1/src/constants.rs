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

// Env values used by the commerce REST client.
pub const COMMERCE_BASE_URL: &str = "COMMERCE_BASE_URL";
pub const COMMERCE_STORE_CODE: &str = "COMMERCE_STORE_CODE";
pub const COMMERCE_API_VERSION: &str = "COMMERCE_API_VERSION";
pub const COMMERCE_CONSUMER_KEY: &str = "COMMERCE_CONSUMER_KEY";
pub const COMMERCE_CONSUMER_SECRET: &str = "COMMERCE_CONSUMER_SECRET";
pub const COMMERCE_ACCESS_TOKEN: &str = "COMMERCE_ACCESS_TOKEN";
pub const COMMERCE_ACCESS_TOKEN_SECRET: &str = "COMMERCE_ACCESS_TOKEN_SECRET";

// OAuth 1.0a protocol parameters.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
pub const OAUTH_NONCE: &str = "oauth_nonce";
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
pub const OAUTH_TOKEN: &str = "oauth_token";
pub const OAUTH_VERSION: &str = "oauth_version";

pub const HMAC_SHA256: &str = "HMAC-SHA256";
pub const OAUTH_VERSION_1_0: &str = "1.0";
pub const NONCE_LENGTH: usize = 32;

// Commerce REST layout.
pub const DEFAULT_API_VERSION: &str = "V1";
pub const DEFAULT_STORE_CODE: &str = "default";
pub const CUSTOMER_TOKEN_RESOURCE: &str = "integration/customer/token";
