//! Bridge between the egui shell and the vault workspace crates.
//! This must remain the only shell-facing boundary for vault operations.

use std::sync::Arc;

use citadel_wallet_core::{
    AccountId, Asset, AssetId, Consignment, ContractType, ImportPort, Invoice, ScanPayload,
    VaultError, VaultPort, WalletAccount,
};
use citadel_wallet_vault::{AcceptedConsignment, EmbeddedVault, ImportFlowAdapter};

#[derive(Clone)]
pub struct VaultBridge {
    vault: Arc<EmbeddedVault>,
    import: Arc<ImportFlowAdapter>,
}

impl Default for VaultBridge {
    fn default() -> Self {
        Self {
            vault: Arc::new(EmbeddedVault::testnet()),
            import: Arc::new(ImportFlowAdapter::new()),
        }
    }
}

impl VaultBridge {
    pub fn accounts(&self) -> Result<Vec<WalletAccount>, VaultError> {
        self.vault.accounts()
    }

    pub fn account(&self, id: &AccountId) -> Result<WalletAccount, VaultError> {
        self.vault.account(id)
    }

    pub fn assets(&self) -> Result<Vec<Asset>, VaultError> {
        self.vault.assets()
    }

    pub fn native_asset(&self) -> Result<Asset, VaultError> {
        self.vault.native_asset()
    }

    pub fn decode(&self, raw: &str) -> Result<ScanPayload, VaultError> {
        self.vault.decode(raw)
    }

    pub fn compose_invoice(
        &self,
        account: &AccountId,
        asset: &AssetId,
        amount: Option<u64>,
    ) -> Result<Invoice, VaultError> {
        self.vault.compose_invoice(account, asset, amount)
    }

    pub fn sync(&self, account: &AccountId) -> Result<(), VaultError> {
        self.vault.sync(account)
    }

    pub fn create_account(
        &self,
        name: &str,
        contract_type: ContractType,
    ) -> Result<WalletAccount, VaultError> {
        self.vault.create_account(name, contract_type)
    }

    pub fn create_keyring(&self, name: &str) -> Result<(), VaultError> {
        self.vault.create_keyring(name)
    }

    pub fn accept_consignment(
        &self,
        consignment: &Consignment,
        account: &AccountId,
    ) -> Result<(), VaultError> {
        self.import.accept_consignment(consignment, account)
    }

    pub fn accepted_consignments(&self) -> Vec<AcceptedConsignment> {
        self.import.accepted()
    }
}
