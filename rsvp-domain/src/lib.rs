// Web3 RSVP Domain Layer

pub mod contract;
pub mod entities;
pub mod events;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use contract::*;
pub use entities::*;
pub use events::*;
pub use ports::*;
pub use services::*;
pub use value_objects::*;
