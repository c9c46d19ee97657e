// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

/*! ABI of the Get Value Application */

use linera_sdk::linera_base_types::{ContractAbi, ServiceAbi};
use serde::{Deserialize, Serialize};

/// The value returned by every `GetValue` call.
pub const VALUE: u64 = 42;

pub struct GetValueAbi;

impl ContractAbi for GetValueAbi {
    type Operation = GetValueOperation;
    type Response = u64;
}

impl ServiceAbi for GetValueAbi {
    type Query = GetValueRequest;
    type QueryResponse = u64;
}

/// The single operation accepted by the contract. It carries no arguments.
#[derive(Debug, Serialize, Deserialize)]
pub enum GetValueOperation {
    GetValue,
}

/// The single query accepted by the service. It carries no arguments.
#[derive(Debug, Serialize, Deserialize)]
pub enum GetValueRequest {
    GetValue,
}
