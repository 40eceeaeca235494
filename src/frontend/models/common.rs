// src/frontend/models/common.rs
use candid::CandidType;
use serde::Deserialize;
use std::fmt;

/// Text form of an Internet Identity principal. Membership is decided by the
/// canister; the client never parses or checks it.
pub type ParticipantId = String;

/// Lifecycle state as reported by `getContractStateSimplified`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ContractState {
    #[default]
    Draft,
    Active,
    /// Any state the canister reports that the client does not branch on.
    Other(String),
}

impl ContractState {
    pub fn as_str(&self) -> &str {
        match self {
            ContractState::Draft => "Draft",
            ContractState::Active => "Active",
            ContractState::Other(s) => s,
        }
    }
}

impl From<String> for ContractState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Draft" => ContractState::Draft,
            "Active" => ContractState::Active,
            _ => ContractState::Other(s),
        }
    }
}

impl From<&str> for ContractState {
    fn from(s: &str) -> Self {
        ContractState::from(s.to_string())
    }
}

impl fmt::Display for ContractState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Textual contract metadata returned by `getContractMetadata`.
#[derive(CandidType, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractMetadata {
    pub title: String,
    pub description: String,
    pub version: String,
}

/// Empty `record {}` payload the canister returns on success.
#[derive(CandidType, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unit {}

/// Tagged result of a canister update: `variant { ok : T; err : text }`.
///
/// The `err` text is a human-readable reason produced by the canister and is
/// shown to the user unmodified.
#[derive(CandidType, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum ActorResult<T> {
    #[serde(rename = "ok")]
    Ok(T),
    #[serde(rename = "err")]
    Err(String),
}

impl<T> ActorResult<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, ActorResult::Ok(_))
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            ActorResult::Ok(v) => Ok(v),
            ActorResult::Err(e) => Err(e),
        }
    }
}

/// Locally cached mirror of the canister's contract.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContractView {
    pub state: ContractState,
    pub metadata: ContractMetadata,
    pub participants: Vec<ParticipantId>,
}
