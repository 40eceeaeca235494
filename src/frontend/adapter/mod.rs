// src/frontend/adapter/mod.rs
// Seams between the view model and the remote contract canister.

pub mod canister_adapter;

pub use canister_adapter::{CanisterAdapter, CallKind};

use crate::error::TransportError;
use crate::models::{ActorResult, ContractMetadata, InitializeArgs, ParticipantId, Unit};
use async_trait::async_trait;
use candid::Principal;

/// The contract canister as seen by the client.
///
/// `Err` means the call could not be completed. A canister that ran and
/// refused the request answers `Ok(ActorResult::Err(reason))`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContractActor: Send + Sync {
    async fn get_contract_state_simplified(&self) -> Result<String, TransportError>;

    async fn get_contract_metadata(&self) -> Result<ContractMetadata, TransportError>;

    async fn get_randomized_participants(
        &self,
        shuffle: bool,
    ) -> Result<Vec<ParticipantId>, TransportError>;

    async fn initialize_contract(
        &self,
        args: InitializeArgs,
    ) -> Result<ActorResult<Unit>, TransportError>;

    async fn add_participant(
        &self,
        identity: ParticipantId,
    ) -> Result<ActorResult<Unit>, TransportError>;

    async fn sign(&self, signature: Vec<u8>) -> Result<ActorResult<Unit>, TransportError>;
}

/// Raw candid-over-bytes calls to a canister. An HTTP agent implements this.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn query(
        &self,
        canister_id: &Principal,
        method: &str,
        arg: Vec<u8>,
    ) -> Result<Vec<u8>, TransportError>;

    async fn update(
        &self,
        canister_id: &Principal,
        method: &str,
        arg: Vec<u8>,
    ) -> Result<Vec<u8>, TransportError>;
}
