pub mod health_service;
pub mod ipfs_metadata;
pub mod json_rpc;
pub mod static_wallet;

pub use health_service::*;
pub use ipfs_metadata::*;
pub use json_rpc::*;
pub use static_wallet::*;
