// src/frontend/models/commands.rs
// Discrete commands submitted from the three contract forms.

use crate::error::InputError;
use crate::messages;
use crate::models::common::{ContractState, ParticipantId};
use validator::Validate;

// --- Validation Helper ---
fn validate_request<T: Validate>(req: &T) -> Result<(), InputError> {
    req.validate().map_err(|e| InputError::Invalid(e.to_string()))
}

// --- Command Payloads ---

#[derive(Clone, Debug, PartialEq, Eq, Validate)]
pub struct InitializeArgs {
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    /// Signatures needed to finalize. Fixed once the contract is initialized.
    #[validate(range(min = 2))]
    pub required: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Validate)]
pub struct AddParticipantArgs {
    #[validate(length(min = 1))]
    pub identity: ParticipantId,
}

#[derive(Clone, Debug, PartialEq, Eq, Validate)]
pub struct SignArgs {
    #[validate(length(min = 1))]
    pub signature: String,
}

impl SignArgs {
    /// UTF-8 bytes of the entered text; this is what the canister receives.
    pub fn signature_bytes(&self) -> Vec<u8> {
        self.signature.as_bytes().to_vec()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandKind {
    Initialize,
    AddParticipant,
    Sign,
}

impl CommandKind {
    /// Initialize is offered only for a draft; the other two only while active.
    pub fn permitted_in(self, state: &ContractState) -> bool {
        match self {
            CommandKind::Initialize => *state == ContractState::Draft,
            CommandKind::AddParticipant | CommandKind::Sign => *state == ContractState::Active,
        }
    }

    pub fn success_message(self) -> &'static str {
        match self {
            CommandKind::Initialize => messages::INITIALIZE_SUCCESS,
            CommandKind::AddParticipant => messages::ADD_PARTICIPANT_SUCCESS,
            CommandKind::Sign => messages::SIGN_SUCCESS,
        }
    }

    /// Fallback shown when the call itself could not complete.
    pub fn failure_message(self) -> &'static str {
        match self {
            CommandKind::Initialize => messages::INITIALIZE_FAILED,
            CommandKind::AddParticipant => messages::ADD_PARTICIPANT_FAILED,
            CommandKind::Sign => messages::SIGN_FAILED,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Initialize(InitializeArgs),
    AddParticipant(AddParticipantArgs),
    Sign(SignArgs),
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Initialize(_) => CommandKind::Initialize,
            Command::AddParticipant(_) => CommandKind::AddParticipant,
            Command::Sign(_) => CommandKind::Sign,
        }
    }

    pub fn validate(&self) -> Result<(), InputError> {
        match self {
            Command::Initialize(args) => validate_request(args),
            Command::AddParticipant(args) => validate_request(args),
            Command::Sign(args) => validate_request(args),
        }
    }
}

// --- Forms ---

/// Raw text inputs of the initialize form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitializeForm {
    pub content: String,
    pub title: String,
    pub description: String,
    pub required: String,
}

impl Default for InitializeForm {
    fn default() -> Self {
        Self {
            content: String::new(),
            title: String::new(),
            description: String::new(),
            required: String::from("2"),
        }
    }
}

impl InitializeForm {
    pub fn to_args(&self) -> Result<InitializeArgs, InputError> {
        let required = parse_count(&self.required)?;
        let args = InitializeArgs {
            content: self.content.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            required,
        };
        validate_request(&args)?;
        Ok(args)
    }
}

/// Reads a participant count the way a numeric input does: any numeric text
/// (`"3"`, `"3.0"`, `"1e1"`) is accepted as long as it is a whole number.
fn parse_count(raw: &str) -> Result<u64, InputError> {
    let text = raw.trim();
    if let Ok(n) = text.parse::<u64>() {
        return Ok(n);
    }
    let value = text
        .parse::<f64>()
        .ok()
        .filter(|v| !v.is_nan())
        .ok_or_else(|| InputError::NotANumber(raw.to_string()))?;
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(InputError::Invalid(format!(
            "required: {} is not a whole number",
            text
        )));
    }
    if value < 0.0 {
        return Err(InputError::Invalid(format!(
            "required: {} is below the minimum of 2",
            text
        )));
    }
    // 2^64 is the first integral f64 that no longer fits.
    if value >= 18_446_744_073_709_551_616.0 {
        return Err(InputError::Invalid(format!(
            "required: {} is out of range",
            text
        )));
    }
    Ok(value as u64)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Forms {
    pub initialize: InitializeForm,
    pub identity: String,
    pub signature: String,
}

impl Forms {
    pub fn initialize_command(&self) -> Result<Command, InputError> {
        self.initialize.to_args().map(Command::Initialize)
    }

    pub fn add_participant_command(&self) -> Result<Command, InputError> {
        let args = AddParticipantArgs {
            identity: self.identity.clone(),
        };
        validate_request(&args)?;
        Ok(Command::AddParticipant(args))
    }

    pub fn sign_command(&self) -> Result<Command, InputError> {
        let args = SignArgs {
            signature: self.signature.clone(),
        };
        validate_request(&args)?;
        Ok(Command::Sign(args))
    }

    /// Resets the inputs consumed by a command the canister accepted.
    /// The initialize form is left as typed.
    pub fn clear_for(&mut self, kind: CommandKind) {
        match kind {
            CommandKind::Initialize => {}
            CommandKind::AddParticipant => self.identity.clear(),
            CommandKind::Sign => self.signature.clear(),
        }
    }
}
