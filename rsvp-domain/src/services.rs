// Domain services
pub mod projection;

pub use projection::*;
