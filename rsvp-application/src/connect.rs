// Contract handle factory
// Binds the wallet's current account to the fixed Web3RSVP deployment.

use std::sync::Arc;

use thiserror::Error;
use tracing::{error, info, warn};

use rsvp_domain::ports::WalletProvider;
use rsvp_domain::{ContractAbi, ContractHandle, CONTRACT_ADDRESS};

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("ethereum provider not available")]
    NoWallet,
    #[error("contract binding failed: {0:#}")]
    Binding(anyhow::Error),
}

/// Explicit form of [`connect_contract`]: callers that care can tell a missing
/// wallet apart from a failed binding.
pub async fn try_connect_contract(
    provider: Option<&dyn WalletProvider>,
) -> Result<ContractHandle, ConnectError> {
    let provider = provider.ok_or(ConnectError::NoWallet)?;
    let abi = ContractAbi::load_bundled().map_err(|err| ConnectError::Binding(err.into()))?;
    let signer = provider
        .request_signer()
        .await
        .map_err(ConnectError::Binding)?;
    Ok(ContractHandle::new(CONTRACT_ADDRESS, Arc::new(abi), signer))
}

/// Never fails: a missing wallet or a binding error is logged and yields `None`.
pub async fn connect_contract(provider: Option<&dyn WalletProvider>) -> Option<ContractHandle> {
    match try_connect_contract(provider).await {
        Ok(handle) => {
            info!(
                "contract bound: address={}, signer={}",
                handle.address(),
                handle.signer()
            );
            Some(handle)
        }
        Err(ConnectError::NoWallet) => {
            warn!("ethereum provider not available, contract handle not created");
            None
        }
        Err(err) => {
            error!("{}", err);
            None
        }
    }
}
