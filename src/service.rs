// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(target_arch = "wasm32", no_main)]

use get_value::{GetValueRequest, VALUE};
use linera_sdk::{linera_base_types::WithServiceAbi, Service, ServiceRuntime};

pub struct GetValueService;

linera_sdk::service!(GetValueService);

impl WithServiceAbi for GetValueService {
    type Abi = get_value::GetValueAbi;
}

impl Service for GetValueService {
    type Parameters = ();

    async fn new(_runtime: ServiceRuntime<Self>) -> Self {
        GetValueService
    }

    async fn handle_query(&self, request: GetValueRequest) -> u64 {
        match request {
            GetValueRequest::GetValue => VALUE,
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::FutureExt as _;
    use linera_sdk::Service;

    use super::{GetValueRequest, GetValueService};

    #[test]
    fn query() {
        let service = GetValueService;

        let response = service
            .handle_query(GetValueRequest::GetValue)
            .now_or_never()
            .expect("Query should not await anything");

        assert_eq!(response, 42);
    }

    #[test]
    fn independent_queries() {
        let first = GetValueService;
        let second = GetValueService;

        for _ in 0..10 {
            let first_response = first
                .handle_query(GetValueRequest::GetValue)
                .now_or_never()
                .expect("Query should not await anything");
            let second_response = second
                .handle_query(GetValueRequest::GetValue)
                .now_or_never()
                .expect("Query should not await anything");

            assert_eq!(first_response, 42);
            assert_eq!(second_response, 42);
        }
    }
}
