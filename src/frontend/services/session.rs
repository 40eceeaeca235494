// src/frontend/services/session.rs
use crate::adapter::ContractActor;
use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::messages;
use crate::services::contract_interface::ContractInterface;
use std::future::Future;
use tracing::{error, info};

/// Application after the connection attempt. A failed connection is terminal.
pub enum Session<A> {
    Ready(ContractInterface<A>),
    Failed { message: String },
}

impl<A: ContractActor> Session<A> {
    /// Awaits `connector` for an actor, then loads the initial contract view.
    ///
    /// A connector error is logged and turns into the connection failure
    /// screen; a failed initial refresh still yields a ready session showing
    /// the fetch error.
    pub async fn connect<F>(connector: F, config: &ClientConfig) -> Self
    where
        F: Future<Output = Result<A, TransportError>>,
    {
        match connector.await {
            Ok(actor) => {
                info!(
                    canister = %config.canister_id,
                    host = config.host(),
                    "connected to contract canister"
                );
                let mut interface = ContractInterface::with_config(actor, config);
                interface.refresh().await;
                Session::Ready(interface)
            }
            Err(e) => {
                error!(error = %e, "failed to initialize contract connection");
                Session::Failed {
                    message: messages::CONNECTION_FAILED.to_string(),
                }
            }
        }
    }

    pub fn interface(&self) -> Option<&ContractInterface<A>> {
        match self {
            Session::Ready(interface) => Some(interface),
            Session::Failed { .. } => None,
        }
    }

    pub fn interface_mut(&mut self) -> Option<&mut ContractInterface<A>> {
        match self {
            Session::Ready(interface) => Some(interface),
            Session::Failed { .. } => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Session::Ready(_) => None,
            Session::Failed { message } => Some(message.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::MockContractActor;
    use crate::config::Network;
    use crate::models::{ContractMetadata, ContractState};
    use candid::Principal;
    use futures::future;

    fn config() -> ClientConfig {
        ClientConfig::new(Network::Local, Principal::anonymous())
    }

    #[tokio::test]
    async fn connected_session_loads_initial_view() {
        let mut actor = MockContractActor::new();
        actor
            .expect_get_contract_state_simplified()
            .times(1)
            .returning(|| Ok("Draft".to_string()));
        actor
            .expect_get_contract_metadata()
            .times(1)
            .returning(|| Ok(ContractMetadata::default()));
        actor
            .expect_get_randomized_participants()
            .times(1)
            .returning(|_| Ok(vec![]));

        let session = Session::connect(future::ready(Ok(actor)), &config()).await;

        let interface = session.interface().expect("session should be ready");
        assert_eq!(interface.view().state, ContractState::Draft);
        assert_eq!(interface.state().error, None);
        assert_eq!(session.failure_message(), None);
    }

    #[tokio::test]
    async fn failed_connection_is_terminal() {
        let connector = future::ready(Err::<MockContractActor, _>(TransportError::Unreachable(
            "dns error".into(),
        )));

        let mut session = Session::connect(connector, &config()).await;

        assert!(session.interface_mut().is_none());
        assert_eq!(
            session.failure_message(),
            Some("Failed to initialize contract connection")
        );
    }

    #[tokio::test]
    async fn initial_fetch_failure_still_yields_ready_session() {
        let mut actor = MockContractActor::new();
        actor
            .expect_get_contract_state_simplified()
            .returning(|| Err(TransportError::NotConnected));
        actor
            .expect_get_contract_metadata()
            .returning(|| Ok(ContractMetadata::default()));
        actor
            .expect_get_randomized_participants()
            .returning(|_| Ok(vec![]));

        let session = Session::connect(future::ready(Ok(actor)), &config()).await;

        let interface = session.interface().expect("session should be ready");
        assert_eq!(
            interface.state().error.as_deref(),
            Some(messages::FETCH_FAILED)
        );
    }
}
