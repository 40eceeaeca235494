// src/frontend/adapter/canister_adapter.rs
// Typed ContractActor on top of a raw Transport, using candid for the wire format.

use crate::adapter::{ContractActor, Transport};
use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::models::{ActorResult, ContractMetadata, InitializeArgs, ParticipantId, Unit};
use async_trait::async_trait;
use candid::utils::ArgumentEncoder;
use candid::{CandidType, Nat, Principal};
use serde::Deserialize;
use serde_bytes::ByteBuf;
use tracing::debug;

// Canister method names
const GET_STATE_METHOD: &str = "getContractStateSimplified";
const GET_METADATA_METHOD: &str = "getContractMetadata";
const GET_PARTICIPANTS_METHOD: &str = "getRandomizedParticipants";
const INITIALIZE_METHOD: &str = "initializeContract";
const ADD_PARTICIPANT_METHOD: &str = "addParticipant";
const SIGN_METHOD: &str = "sign";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallKind {
    Query,
    Update,
}

pub struct CanisterAdapter<T> {
    transport: T,
    canister_id: Principal,
}

impl<T: Transport> CanisterAdapter<T> {
    pub fn new(transport: T, canister_id: Principal) -> Self {
        Self {
            transport,
            canister_id,
        }
    }

    pub fn from_config(transport: T, config: &ClientConfig) -> Self {
        Self::new(transport, config.canister_id)
    }

    pub fn canister_id(&self) -> &Principal {
        &self.canister_id
    }

    /// Encodes `args`, performs the call, and decodes a single return value.
    async fn call<A, R>(&self, kind: CallKind, method: &str, args: A) -> Result<R, TransportError>
    where
        A: ArgumentEncoder + Send,
        R: CandidType + for<'de> Deserialize<'de> + Send,
    {
        let arg = candid::encode_args(args).map_err(|e| {
            TransportError::Codec(format!("Failed to encode arguments for {}: {}", method, e))
        })?;

        debug!(method, ?kind, canister = %self.canister_id, arg_len = arg.len(), "calling canister");
        let reply = match kind {
            CallKind::Query => self.transport.query(&self.canister_id, method, arg).await?,
            CallKind::Update => self.transport.update(&self.canister_id, method, arg).await?,
        };

        candid::decode_one::<R>(&reply).map_err(|e| {
            TransportError::Codec(format!("Failed to decode reply from {}: {}", method, e))
        })
    }
}

#[async_trait]
impl<T: Transport> ContractActor for CanisterAdapter<T> {
    async fn get_contract_state_simplified(&self) -> Result<String, TransportError> {
        self.call(CallKind::Query, GET_STATE_METHOD, ()).await
    }

    async fn get_contract_metadata(&self) -> Result<ContractMetadata, TransportError> {
        self.call(CallKind::Query, GET_METADATA_METHOD, ()).await
    }

    async fn get_randomized_participants(
        &self,
        shuffle: bool,
    ) -> Result<Vec<ParticipantId>, TransportError> {
        // Shuffling draws canister randomness, which is only available to updates.
        let kind = if shuffle { CallKind::Update } else { CallKind::Query };
        self.call(kind, GET_PARTICIPANTS_METHOD, (shuffle,)).await
    }

    async fn initialize_contract(
        &self,
        args: InitializeArgs,
    ) -> Result<ActorResult<Unit>, TransportError> {
        let InitializeArgs {
            content,
            title,
            description,
            required,
        } = args;
        self.call(
            CallKind::Update,
            INITIALIZE_METHOD,
            (content, title, description, Nat::from(required)),
        )
        .await
    }

    async fn add_participant(
        &self,
        identity: ParticipantId,
    ) -> Result<ActorResult<Unit>, TransportError> {
        self.call(CallKind::Update, ADD_PARTICIPANT_METHOD, (identity,)).await
    }

    async fn sign(&self, signature: Vec<u8>) -> Result<ActorResult<Unit>, TransportError> {
        debug!(signature = %hex::encode(&signature), "submitting signature");
        self.call(CallKind::Update, SIGN_METHOD, (ByteBuf::from(signature),))
            .await
    }
}
