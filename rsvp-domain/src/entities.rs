// Domain entities
pub mod account;
pub mod confirmation;
pub mod event;
pub mod log;
pub mod metadata;
pub mod rsvp;
pub mod runtime_config;

pub use account::*;
pub use confirmation::*;
pub use event::*;
pub use log::*;
pub use metadata::*;
pub use rsvp::*;
pub use runtime_config::*;
