// src/frontend/models/app_state.rs
use crate::error::TransportError;
use crate::messages;
use crate::models::commands::{CommandKind, Forms};
use crate::models::common::{ActorResult, ContractView, Unit};

/// Everything a renderer needs. Only [`AppState::apply`] mutates it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppState {
    pub view: ContractView,
    pub error: Option<String>,
    pub success: Option<String>,
    /// Advisory only; not tied to any cancellation.
    pub busy: bool,
    pub forms: Forms,
}

/// Inputs to the reducer, produced by the view model as remote calls resolve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Submitted,
    Completed {
        kind: CommandKind,
        result: Result<ActorResult<Unit>, TransportError>,
    },
    Refreshed(Result<ContractView, TransportError>),
    Settled,
}

impl AppState {
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::Submitted => {
                self.error = None;
                self.success = None;
                self.busy = true;
            }
            Event::Completed { kind, result } => match result {
                Ok(ActorResult::Ok(_)) => {
                    self.success = Some(kind.success_message().to_string());
                    self.forms.clear_for(kind);
                }
                Ok(ActorResult::Err(reason)) => {
                    self.error = Some(reason);
                }
                Err(_) => {
                    self.error = Some(kind.failure_message().to_string());
                }
            },
            Event::Refreshed(Ok(view)) => {
                self.view = view;
            }
            Event::Refreshed(Err(_)) => {
                self.error = Some(messages::FETCH_FAILED.to_string());
            }
            Event::Settled => {
                self.busy = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::common::{ContractMetadata, ContractState};

    fn transport_err() -> TransportError {
        TransportError::Unreachable("connection refused".into())
    }

    #[test]
    fn submission_clears_both_channels_and_marks_busy() {
        let mut state = AppState {
            error: Some("old".into()),
            success: Some("older".into()),
            ..AppState::default()
        };
        state.apply(Event::Submitted);
        assert_eq!(state.error, None);
        assert_eq!(state.success, None);
        assert!(state.busy);
        state.apply(Event::Settled);
        assert!(!state.busy);
    }

    #[test]
    fn remote_rejection_is_shown_verbatim() {
        let mut state = AppState::default();
        state.apply(Event::Completed {
            kind: CommandKind::AddParticipant,
            result: Ok(ActorResult::Err("  already a participant\n".into())),
        });
        assert_eq!(state.error.as_deref(), Some("  already a participant\n"));
        assert_eq!(state.success, None);
    }

    #[test]
    fn transport_failure_shows_fallback_not_cause() {
        for (kind, expected) in [
            (CommandKind::Initialize, messages::INITIALIZE_FAILED),
            (CommandKind::AddParticipant, messages::ADD_PARTICIPANT_FAILED),
            (CommandKind::Sign, messages::SIGN_FAILED),
        ] {
            let mut state = AppState::default();
            state.apply(Event::Completed {
                kind,
                result: Err(transport_err()),
            });
            assert_eq!(state.error.as_deref(), Some(expected));
        }
    }

    #[test]
    fn accepted_sign_clears_signature_input() {
        let mut state = AppState::default();
        state.forms.signature = "my signature".into();
        state.forms.identity = "abc-123".into();
        state.apply(Event::Completed {
            kind: CommandKind::Sign,
            result: Ok(ActorResult::Ok(Unit {})),
        });
        assert_eq!(state.success.as_deref(), Some(messages::SIGN_SUCCESS));
        assert!(state.forms.signature.is_empty());
        assert_eq!(state.forms.identity, "abc-123");
    }

    #[test]
    fn failed_refresh_keeps_cached_view() {
        let cached = ContractView {
            state: ContractState::Active,
            metadata: ContractMetadata {
                title: "t".into(),
                description: "d".into(),
                version: "1".into(),
            },
            participants: vec!["p1".into()],
        };
        let mut state = AppState {
            view: cached.clone(),
            ..AppState::default()
        };
        state.apply(Event::Refreshed(Err(transport_err())));
        assert_eq!(state.view, cached);
        assert_eq!(state.error.as_deref(), Some(messages::FETCH_FAILED));
    }
}
