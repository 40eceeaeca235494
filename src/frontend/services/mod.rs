pub mod contract_interface;
pub mod session;

pub use contract_interface::{ContractInterface, Outcome};
pub use session::Session;
