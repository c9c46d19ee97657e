// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

#![cfg_attr(target_arch = "wasm32", no_main)]

use get_value::{GetValueOperation, VALUE};
use linera_sdk::{linera_base_types::WithContractAbi, Contract, ContractRuntime};

pub struct GetValueContract {
    runtime: ContractRuntime<Self>,
}

linera_sdk::contract!(GetValueContract);

impl WithContractAbi for GetValueContract {
    type Abi = get_value::GetValueAbi;
}

impl Contract for GetValueContract {
    type Message = ();
    type InstantiationArgument = ();
    type Parameters = ();
    type EventValue = ();

    async fn load(runtime: ContractRuntime<Self>) -> Self {
        GetValueContract { runtime }
    }

    async fn instantiate(&mut self, _argument: ()) {
        // Validate that the application parameters were configured correctly.
        self.runtime.application_parameters();
    }

    async fn execute_operation(&mut self, operation: GetValueOperation) -> u64 {
        match operation {
            GetValueOperation::GetValue => VALUE,
        }
    }

    async fn execute_message(&mut self, _message: ()) {
        panic!("GetValue application doesn't support any cross-chain messages");
    }

    async fn store(self) {}
}
