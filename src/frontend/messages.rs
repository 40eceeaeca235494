// src/frontend/messages.rs
// User-facing status strings. Transport causes never appear here.

pub const INITIALIZE_SUCCESS: &str = "Contract initialized successfully";
pub const ADD_PARTICIPANT_SUCCESS: &str = "Participant added successfully";
pub const SIGN_SUCCESS: &str = "Contract signed successfully";

pub const INITIALIZE_FAILED: &str = "Failed to initialize contract";
pub const ADD_PARTICIPANT_FAILED: &str = "Failed to add participant";
pub const SIGN_FAILED: &str = "Failed to sign contract";

pub const FETCH_FAILED: &str = "Failed to fetch contract state";
pub const CONNECTION_FAILED: &str = "Failed to initialize contract connection";
