// src/frontend/error.rs
use crate::models::common::ContractState;
use crate::models::commands::CommandKind;
use thiserror::Error;

/// A call that never produced a canister reply we could read.
///
/// Canister-level rejections are not transport errors; they arrive as the
/// `err` arm of [`crate::models::ActorResult`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Actor not connected")]
    NotConnected,

    #[error("Replica unreachable: {0}")]
    Unreachable(String),

    #[error("Call rejected by replica (code {code}): {message}")]
    Rejected { code: u32, message: String },

    #[error("Candid codec error: {0}")]
    Codec(String),
}

/// Form input that fails the local constraints and is never submitted.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("Required participants must be a number: {0}")]
    NotANumber(String),

    #[error("Invalid input: {0}")]
    Invalid(String),
}

/// Local refusal to dispatch a command. The message channels are left alone.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DispatchError {
    #[error("{command:?} is not available while the contract is {state}")]
    NotAvailable {
        command: CommandKind,
        state: ContractState,
    },

    #[error(transparent)]
    InvalidInput(#[from] InputError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Canister id is not set (expected one of: {0})")]
    MissingCanisterId(String),

    #[error("Invalid canister id {id}: {reason}")]
    InvalidCanisterId { id: String, reason: String },
}
