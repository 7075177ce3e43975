// Web3 RSVP Application Layer

pub mod commands;
pub mod connect;
pub mod error;
pub mod metrics;
pub mod queries;
pub mod state;

#[cfg(test)]
mod test_support;

pub use connect::{connect_contract, try_connect_contract, ConnectError};
pub use error::AppError;
pub use metrics::Metrics;
pub use state::AppState;
