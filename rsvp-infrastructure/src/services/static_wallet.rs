use alloy_primitives::Address;
use async_trait::async_trait;

use rsvp_domain::ports::WalletProvider;

/// Wallet pinned to a configured account.
pub struct StaticWalletProvider {
    account: Address,
}

impl StaticWalletProvider {
    pub fn new(account: Address) -> Self {
        Self { account }
    }
}

#[async_trait]
impl WalletProvider for StaticWalletProvider {
    async fn request_signer(&self) -> anyhow::Result<Address> {
        Ok(self.account)
    }
}
