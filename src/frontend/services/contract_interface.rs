// src/frontend/services/contract_interface.rs
// View model mirroring the contract canister and mediating its three mutations.

use crate::adapter::ContractActor;
use crate::config::ClientConfig;
use crate::error::{DispatchError, TransportError};
use crate::models::{
    ActorResult, AddParticipantArgs, AppState, Command, CommandKind, ContractState, ContractView,
    Event, Forms, InitializeArgs, SignArgs, Unit,
};
use tracing::{error, info};

/// How a dispatched command ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The canister accepted the command and the view was re-fetched.
    Accepted,
    /// The canister ran and refused, with its reason.
    Rejected(String),
    /// The call did not complete; the user sees the command's fallback message.
    Failed,
}

pub struct ContractInterface<A> {
    actor: A,
    state: AppState,
    shuffle_participants: bool,
}

impl<A: ContractActor> ContractInterface<A> {
    pub fn new(actor: A) -> Self {
        Self {
            actor,
            state: AppState::default(),
            shuffle_participants: false,
        }
    }

    pub fn with_config(actor: A, config: &ClientConfig) -> Self {
        Self {
            shuffle_participants: config.shuffle_participants,
            ..Self::new(actor)
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> &ContractView {
        &self.state.view
    }

    /// Text inputs backing the three forms.
    pub fn forms_mut(&mut self) -> &mut Forms {
        &mut self.state.forms
    }

    pub fn actor(&self) -> &A {
        &self.actor
    }

    // --- Synchronisation ---

    /// Re-reads state, metadata and participants concurrently.
    ///
    /// Either all three cached fields are replaced or none are. On failure the
    /// generic fetch error is shown and the cause is only logged.
    pub async fn refresh(&mut self) -> bool {
        let fetched = self.fetch_view().await;
        if let Err(e) = &fetched {
            error!(error = %e, "failed to fetch contract state");
        }
        let refreshed = fetched.is_ok();
        self.state.apply(Event::Refreshed(fetched));
        refreshed
    }

    async fn fetch_view(&self) -> Result<ContractView, TransportError> {
        let (state, metadata, participants) = futures::try_join!(
            self.actor.get_contract_state_simplified(),
            self.actor.get_contract_metadata(),
            self.actor.get_randomized_participants(self.shuffle_participants),
        )?;
        Ok(ContractView {
            state: ContractState::from(state),
            metadata,
            participants,
        })
    }

    // --- Commands ---

    /// Runs one command against the canister.
    ///
    /// Commands not offered in the current lifecycle state, or whose input
    /// fails validation, are refused locally without touching the message
    /// channels. Everything else goes through the same protocol: clear
    /// messages, mark busy, call, branch on the tagged result, refresh on
    /// success, fall back to a fixed message on transport failure, clear busy.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError` only for local refusals. Remote outcomes are
    /// reported through [`Outcome`] and the app state.
    pub async fn dispatch(&mut self, command: Command) -> Result<Outcome, DispatchError> {
        let kind = command.kind();
        self.ensure_permitted(kind)?;
        command.validate()?;

        self.state.apply(Event::Submitted);
        let result = self.invoke(command).await;

        let outcome = match &result {
            Ok(ActorResult::Ok(_)) => {
                info!(?kind, "canister accepted command");
                Outcome::Accepted
            }
            Ok(ActorResult::Err(reason)) => {
                info!(?kind, %reason, "canister rejected command");
                Outcome::Rejected(reason.clone())
            }
            Err(e) => {
                error!(?kind, error = %e, "command call failed");
                Outcome::Failed
            }
        };
        self.state.apply(Event::Completed { kind, result });

        if outcome == Outcome::Accepted {
            self.refresh().await;
        }
        self.state.apply(Event::Settled);
        Ok(outcome)
    }

    fn ensure_permitted(&self, kind: CommandKind) -> Result<(), DispatchError> {
        if kind.permitted_in(&self.state.view.state) {
            Ok(())
        } else {
            Err(DispatchError::NotAvailable {
                command: kind,
                state: self.state.view.state.clone(),
            })
        }
    }

    async fn invoke(&self, command: Command) -> Result<ActorResult<Unit>, TransportError> {
        match command {
            Command::Initialize(args) => self.actor.initialize_contract(args).await,
            Command::AddParticipant(args) => self.actor.add_participant(args.identity).await,
            Command::Sign(args) => self.actor.sign(args.signature_bytes()).await,
        }
    }

    pub async fn initialize(&mut self, args: InitializeArgs) -> Result<Outcome, DispatchError> {
        self.dispatch(Command::Initialize(args)).await
    }

    pub async fn add_participant(
        &mut self,
        identity: impl Into<String>,
    ) -> Result<Outcome, DispatchError> {
        self.dispatch(Command::AddParticipant(AddParticipantArgs {
            identity: identity.into(),
        }))
        .await
    }

    pub async fn sign(&mut self, signature: impl Into<String>) -> Result<Outcome, DispatchError> {
        self.dispatch(Command::Sign(SignArgs {
            signature: signature.into(),
        }))
        .await
    }

    // --- Form submission ---

    pub async fn submit_initialize(&mut self) -> Result<Outcome, DispatchError> {
        self.ensure_permitted(CommandKind::Initialize)?;
        let command = self.state.forms.initialize_command()?;
        self.dispatch(command).await
    }

    pub async fn submit_add_participant(&mut self) -> Result<Outcome, DispatchError> {
        self.ensure_permitted(CommandKind::AddParticipant)?;
        let command = self.state.forms.add_participant_command()?;
        self.dispatch(command).await
    }

    pub async fn submit_sign(&mut self) -> Result<Outcome, DispatchError> {
        self.ensure_permitted(CommandKind::Sign)?;
        let command = self.state.forms.sign_command()?;
        self.dispatch(command).await
    }
}
