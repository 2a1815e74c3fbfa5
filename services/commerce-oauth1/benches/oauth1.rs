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

use commerce_api_core::time::from_timestamp;
use commerce_api_core::{Context, RequestDescriptor, SignRequest};
use commerce_api_oauth1::{Credential, RequestSigner};
use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::json;

criterion_group!(benches, bench);
criterion_main!(benches);

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("oauth1");
    let runtime = tokio::runtime::Runtime::new().expect("tokio runtime must be built");

    let ctx = Context::new();
    let cred = Credential::new("consumer_key", "consumer_secret", "access_token", "token_secret");
    let signer = RequestSigner::new().with_time(from_timestamp(1191242096).expect("valid time"));

    let get = RequestDescriptor::get(
        "https://commerce.example.com/rest/default/V1/products?searchCriteria%5BpageSize%5D=20&searchCriteria%5BcurrentPage%5D=1",
    )
    .expect("valid url");
    group.bench_function("sign_get_with_query", |b| {
        b.to_async(&runtime)
            .iter(|| signer.sign_request(&ctx, &get, Some(&cred)))
    });

    let post = RequestDescriptor::post(
        "https://commerce.example.com/rest/default/V1/integration/customer/token",
        json!({"username": "user@example.com", "password": "secret"}),
    )
    .expect("valid url");
    group.bench_function("sign_post", |b| {
        b.to_async(&runtime)
            .iter(|| signer.sign_request(&ctx, &post, Some(&cred)))
    });

    group.finish()
}
