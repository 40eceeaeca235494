// src/frontend/lib.rs

pub mod adapter;
pub mod config;
pub mod error;
pub mod messages;
pub mod models;
pub mod services;

pub use adapter::{CanisterAdapter, ContractActor, Transport};
pub use config::{ClientConfig, Network};
pub use error::{ConfigError, DispatchError, InputError, TransportError};
pub use models::{AppState, Command, CommandKind, ContractMetadata, ContractState, ContractView};
pub use services::{ContractInterface, Outcome, Session};
