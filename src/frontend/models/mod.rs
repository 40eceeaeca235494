pub mod app_state;
pub mod commands;
pub mod common;

// Re-export common types/enums for easier access
pub use app_state::{AppState, Event};
pub use commands::{AddParticipantArgs, Command, CommandKind, Forms, InitializeArgs, InitializeForm, SignArgs};
pub use common::*;
